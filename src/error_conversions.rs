//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service or repository error types, so
//! the `From` implementations connecting them live here.

use crate::domain::notification::Notification;
use crate::domain::types::TypeConstraintError;
use crate::repository::errors::RepositoryError;
use crate::services::errors::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::TypeConstraint(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<RepositoryError> for Notification {
    fn from(val: RepositoryError) -> Self {
        Notification::from_error(&val)
    }
}
