use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

use crate::domain::validation::{Validation, ValidationError, ValidationHandler};

/// Collects every validation failure of one round.
///
/// A notification is created fresh for each validation round and handed out
/// as the failure side of a command result; it is never reset in place.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    pub fn create() -> Self {
        Self::default()
    }

    /// Notification holding exactly one error.
    pub fn with_error(error: ValidationError) -> Self {
        Self {
            errors: vec![error],
        }
    }

    /// Notification holding one error carrying the message of `error`.
    pub fn from_error(error: &dyn std::error::Error) -> Self {
        Self::with_error(ValidationError::new(error.to_string()))
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> &mut dyn ValidationHandler {
        self.errors.push(error);
        self
    }

    fn append_all(&mut self, other: &dyn ValidationHandler) -> &mut dyn ValidationHandler {
        self.errors.extend_from_slice(other.errors());
        self
    }

    fn validate(&mut self, validation: &dyn Validation) -> &mut dyn ValidationHandler {
        if let Err(fault) = validation.validate(self) {
            log::debug!("Validation aborted unexpectedly: {fault}");
            self.errors.push(ValidationError::new(fault.to_string()));
        }
        self
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl Display for Notification {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<&str> = self.errors.iter().map(ValidationError::message).collect();
        f.write_str(&messages.join("; "))
    }
}
