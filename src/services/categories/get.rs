use crate::domain::types::CategoryId;
use crate::dto::categories::CategoryOutput;
use crate::repository::CategoryReader;
use crate::services::{ServiceResult, UseCase};

use super::not_found;

pub struct GetCategoryByIdUseCase<R> {
    repo: R,
}

impl<R: CategoryReader> GetCategoryByIdUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: CategoryReader> UseCase<String> for GetCategoryByIdUseCase<R> {
    type Output = CategoryOutput;

    fn execute(&self, id: String) -> ServiceResult<CategoryOutput> {
        let id = CategoryId::new(id)?;

        self.repo
            .find_by_id(&id)?
            .map(CategoryOutput::from)
            .ok_or_else(|| not_found(&id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::domain::types::round_micros;
    use crate::repository::test::{Operation, TestRepository};
    use crate::services::ServiceError;

    #[test]
    fn returns_the_projection_of_an_existing_category() {
        let category = Category::new_category(
            Some("Film".into()),
            Some("A categoria mais assistida".into()),
            true,
        );
        let repo = TestRepository::new(vec![category.clone()]);
        let use_case = GetCategoryByIdUseCase::new(&repo);

        let output = use_case.execute(category.id().to_string()).unwrap();

        assert_eq!(&output.id, category.id());
        assert_eq!(output.name.as_deref(), Some("Film"));
        assert_eq!(output.description.as_deref(), Some("A categoria mais assistida"));
        assert!(output.is_active);
        assert_eq!(output.created_at, round_micros(category.created_at()));
        assert_eq!(output.updated_at, round_micros(category.updated_at()));
        assert!(output.deleted_at.is_none());
        assert_eq!(output, CategoryOutput::from(&category));
    }

    #[test]
    fn unknown_id_fails_with_not_found() {
        let repo = TestRepository::default();
        let use_case = GetCategoryByIdUseCase::new(&repo);

        let err = use_case.execute("123".to_string()).unwrap_err();

        assert_eq!(err.to_string(), "Category with ID 123 was not found");
        match err {
            ServiceError::NotFound(domain_error) => assert_eq!(domain_error.errors().len(), 1),
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[test]
    fn gateway_failure_propagates_unchanged() {
        let repo = TestRepository::default().failing(Operation::FindById, "Gateway error");
        let use_case = GetCategoryByIdUseCase::new(&repo);

        let err = use_case.execute("123".to_string()).unwrap_err();

        assert_eq!(
            err,
            ServiceError::Repository(crate::repository::errors::RepositoryError::Storage(
                "Gateway error".to_string()
            ))
        );
        assert_eq!(err.to_string(), "Gateway error");
    }
}
