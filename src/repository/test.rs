use std::collections::HashMap;

use parking_lot::Mutex;

use crate::domain::category::Category;
use crate::domain::pagination::Pagination;
use crate::domain::search::CategorySearchQuery;
use crate::domain::types::CategoryId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{CategoryReader, CategoryWriter, MemoryRepository};

/// Gateway operation, used to inject failures and inspect calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
    Create,
    Update,
    FindById,
    DeleteById,
    FindAll,
}

/// A recorded gateway call with its argument.
#[derive(Clone, Debug)]
pub enum Call {
    Create(Category),
    Update(Category),
    FindById(CategoryId),
    DeleteById(CategoryId),
    FindAll(CategorySearchQuery),
}

impl Call {
    fn operation(&self) -> Operation {
        match self {
            Self::Create(_) => Operation::Create,
            Self::Update(_) => Operation::Update,
            Self::FindById(_) => Operation::FindById,
            Self::DeleteById(_) => Operation::DeleteById,
            Self::FindAll(_) => Operation::FindAll,
        }
    }
}

/// In-memory repository used for unit tests.
///
/// Every call is recorded before it is served, including calls configured to
/// fail with [`RepositoryError::Storage`].
#[derive(Default)]
pub struct TestRepository {
    store: MemoryRepository,
    failures: HashMap<Operation, String>,
    calls: Mutex<Vec<Call>>,
}

impl TestRepository {
    pub fn new(categories: Vec<Category>) -> Self {
        let store = MemoryRepository::new();
        for category in &categories {
            store.create(category).expect("seed category should be stored");
        }
        Self {
            store,
            ..Self::default()
        }
    }

    /// Make `operation` fail with a storage error carrying `message`.
    pub fn failing(mut self, operation: Operation, message: &str) -> Self {
        self.failures.insert(operation, message.to_string());
        self
    }

    /// Number of calls made to `operation`.
    pub fn count(&self, operation: Operation) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|call| call.operation() == operation)
            .count()
    }

    /// Categories passed to `create`, in call order.
    pub fn created(&self) -> Vec<Category> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                Call::Create(category) => Some(category.clone()),
                _ => None,
            })
            .collect()
    }

    /// Categories passed to `update`, in call order.
    pub fn updated(&self) -> Vec<Category> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                Call::Update(category) => Some(category.clone()),
                _ => None,
            })
            .collect()
    }

    fn serve(&self, call: Call) -> RepositoryResult<()> {
        let operation = call.operation();
        self.calls.lock().push(call);
        match self.failures.get(&operation) {
            Some(message) => Err(RepositoryError::Storage(message.clone())),
            None => Ok(()),
        }
    }
}

impl CategoryReader for TestRepository {
    fn find_by_id(&self, id: &CategoryId) -> RepositoryResult<Option<Category>> {
        self.serve(Call::FindById(id.clone()))?;
        self.store.find_by_id(id)
    }

    fn find_all(&self, query: &CategorySearchQuery) -> RepositoryResult<Pagination<Category>> {
        self.serve(Call::FindAll(query.clone()))?;
        self.store.find_all(query)
    }
}

impl CategoryWriter for TestRepository {
    fn create(&self, category: &Category) -> RepositoryResult<Category> {
        self.serve(Call::Create(category.clone()))?;
        self.store.create(category)
    }

    fn update(&self, category: &Category) -> RepositoryResult<Category> {
        self.serve(Call::Update(category.clone()))?;
        self.store.update(category)
    }

    fn delete_by_id(&self, id: &CategoryId) -> RepositoryResult<()> {
        self.serve(Call::DeleteById(id.clone()))?;
        self.store.delete_by_id(id)
    }
}
