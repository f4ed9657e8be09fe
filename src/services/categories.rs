//! Category use cases.
//!
//! Commands (`create`, `update`) validate before touching the gateway and
//! fold gateway failures into a [`Notification`](crate::domain::notification::Notification).
//! Queries (`get`, `list`) and `delete` let gateway failures propagate.

use crate::domain::error::DomainError;
use crate::domain::types::CategoryId;
use crate::services::ServiceError;

pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

pub use create::{CreateCategoryCommand, CreateCategoryUseCase};
pub use delete::DeleteCategoryUseCase;
pub use get::GetCategoryByIdUseCase;
pub use list::ListCategoriesUseCase;
pub use update::{UpdateCategoryCommand, UpdateCategoryUseCase};

fn not_found(id: &CategoryId) -> ServiceError {
    ServiceError::NotFound(DomainError::not_found("Category", id))
}
