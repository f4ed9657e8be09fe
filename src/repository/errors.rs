use thiserror::Error;

/// Errors surfaced by category gateways.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// The record to update does not exist.
    #[error("record not found")]
    NotFound,
    /// A record with the same identifier already exists.
    #[error("record {0} already exists")]
    Conflict(String),
    /// A mandatory column was missing.
    #[error("not-null constraint violated for `{0}`")]
    ConstraintViolation(String),
    /// The request or stored data could not be interpreted.
    #[error("validation error: {0}")]
    ValidationError(String),
    /// Underlying storage failure; the message is kept verbatim.
    #[error("{0}")]
    Storage(String),
}

/// Convenient alias for results returned from gateway functions.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
