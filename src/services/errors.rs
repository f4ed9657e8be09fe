use thiserror::Error;

use crate::domain::error::DomainError;
use crate::repository::errors::RepositoryError;

/// Failures raised by use cases.
///
/// Expected validation failures are not represented here: commands report
/// them as the left side of their result.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The requested aggregate does not exist.
    #[error(transparent)]
    NotFound(DomainError),
    /// An identifier or query option could not be constructed.
    #[error("{0}")]
    TypeConstraint(String),
    /// A gateway failure passed through unchanged.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Convenient alias for results returned from use cases.
pub type ServiceResult<T> = Result<T, ServiceError>;
