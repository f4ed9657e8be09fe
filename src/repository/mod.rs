use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::category::Category;
use crate::domain::pagination::Pagination;
use crate::domain::search::CategorySearchQuery;
use crate::domain::types::CategoryId;
use crate::models::category::Category as CategoryRecord;
use crate::repository::errors::RepositoryResult;

pub mod category;
pub mod errors;
#[cfg(test)]
pub mod test;

/// Category gateway keeping its rows in process memory.
///
/// Clones share the same rows, allowing the repository to be handed to
/// several use cases at once.
#[derive(Clone, Default)]
pub struct MemoryRepository {
    rows: Arc<RwLock<Vec<CategoryRecord>>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored categories.
    pub fn count(&self) -> usize {
        self.rows.read().len()
    }
}

/// Read-only operations for category entities.
pub trait CategoryReader {
    /// Retrieve a category by its identifier.
    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>>;
    /// List categories matching the filter, sort and page of `query`.
    fn find_all(&self, query: &CategorySearchQuery) -> RepositoryResult<Pagination<Category>>;
}

/// Write operations for category entities.
pub trait CategoryWriter {
    /// Persist a new category, returning the stored representation.
    fn create(&self, category: &Category) -> RepositoryResult<Category>;
    /// Replace an existing category, returning the stored representation.
    fn update(&self, category: &Category) -> RepositoryResult<Category>;
    /// Delete a category by id. Deleting an unknown id is a no-op.
    fn delete_by_id(&self, id: &CategoryId) -> RepositoryResult<()>;
}

impl<T: CategoryReader + ?Sized> CategoryReader for &T {
    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        (**self).find_by_id(id)
    }

    fn find_all(&self, query: &CategorySearchQuery) -> RepositoryResult<Pagination<Category>> {
        (**self).find_all(query)
    }
}

impl<T: CategoryWriter + ?Sized> CategoryWriter for &T {
    fn create(&self, category: &Category) -> RepositoryResult<Category> {
        (**self).create(category)
    }

    fn update(&self, category: &Category) -> RepositoryResult<Category> {
        (**self).update(category)
    }

    fn delete_by_id(&self, id: &CategoryId) -> RepositoryResult<()> {
        (**self).delete_by_id(id)
    }
}
