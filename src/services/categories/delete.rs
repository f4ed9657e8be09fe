use crate::domain::types::CategoryId;
use crate::repository::CategoryWriter;
use crate::services::{ServiceResult, UseCase};

/// Deletes a category by id. Unknown ids are not an error.
pub struct DeleteCategoryUseCase<R> {
    repo: R,
}

impl<R: CategoryWriter> DeleteCategoryUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: CategoryWriter> UseCase<String> for DeleteCategoryUseCase<R> {
    type Output = ();

    fn execute(&self, id: String) -> ServiceResult<()> {
        let id = CategoryId::new(id)?;

        self.repo
            .delete_by_id(&id)
            .inspect_err(|e| log::error!("Failed to delete category {id}: {e}"))?;
        log::debug!("Deleted category {id}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::Category;
    use crate::repository::CategoryReader;
    use crate::repository::test::{Operation, TestRepository};
    use crate::services::ServiceError;

    #[test]
    fn deletes_existing_category() {
        let category = Category::new_category(Some("Film".into()), Some("desc".into()), true);
        let repo = TestRepository::new(vec![category.clone()]);
        let use_case = DeleteCategoryUseCase::new(&repo);

        use_case.execute(category.id().to_string()).unwrap();

        assert_eq!(repo.count(Operation::DeleteById), 1);
        assert!(repo.find_by_id(category.id()).unwrap().is_none());
    }

    #[test]
    fn unknown_id_is_a_no_op() {
        let repo = TestRepository::default();
        let use_case = DeleteCategoryUseCase::new(&repo);

        assert!(use_case.execute("123".to_string()).is_ok());
        assert_eq!(repo.count(Operation::DeleteById), 1);
    }

    #[test]
    fn gateway_failure_propagates_unchanged() {
        let repo = TestRepository::default().failing(Operation::DeleteById, "Gateway error");
        let use_case = DeleteCategoryUseCase::new(&repo);

        let err = use_case.execute("123".to_string()).unwrap_err();

        assert!(matches!(err, ServiceError::Repository(_)));
        assert_eq!(err.to_string(), "Gateway error");
    }

    #[test]
    fn blank_id_is_rejected() {
        let repo = TestRepository::default();
        let use_case = DeleteCategoryUseCase::new(&repo);

        let err = use_case.execute("  ".to_string()).unwrap_err();

        assert!(matches!(err, ServiceError::TypeConstraint(_)));
        assert_eq!(repo.count(Operation::DeleteById), 0);
    }
}
