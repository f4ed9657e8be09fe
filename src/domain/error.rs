use std::fmt::Display;

use thiserror::Error;

use crate::domain::validation::ValidationError;

/// Domain-level failure carrying a message and its structured errors.
///
/// Raised for exceptional conditions such as looking up an aggregate that
/// does not exist; validation failures travel as a `Notification` instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct DomainError {
    message: String,
    errors: Vec<ValidationError>,
}

impl DomainError {
    /// Failure described by a single error.
    pub fn with(error: ValidationError) -> Self {
        Self {
            message: error.message().to_string(),
            errors: vec![error],
        }
    }

    /// `<aggregate> with ID <id> was not found`.
    pub fn not_found(aggregate: &str, id: &impl Display) -> Self {
        Self::with(ValidationError::new(format!(
            "{aggregate} with ID {id} was not found"
        )))
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
