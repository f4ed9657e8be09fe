use crate::domain::pagination::Pagination;
use crate::domain::search::CategorySearchQuery;
use crate::dto::categories::CategoryOutput;
use crate::repository::CategoryReader;
use crate::services::{ServiceResult, UseCase};

pub struct ListCategoriesUseCase<R> {
    repo: R,
}

impl<R: CategoryReader> ListCategoriesUseCase<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

impl<R: CategoryReader> UseCase<CategorySearchQuery> for ListCategoriesUseCase<R> {
    type Output = Pagination<CategoryOutput>;

    fn execute(&self, query: CategorySearchQuery) -> ServiceResult<Pagination<CategoryOutput>> {
        let page = self
            .repo
            .find_all(&query)
            .inspect_err(|e| log::error!("Failed to list categories: {e}"))?;
        Ok(page.map(CategoryOutput::from))
    }
}
