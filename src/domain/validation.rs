//! Error accumulation contract shared by every validation round.
//!
//! A [`ValidationHandler`] collects [`ValidationError`]s from any number of
//! [`Validation`] units of work. Handlers never stop at the first failure:
//! every registered validation runs, and an unexpected `Err` returned by a
//! unit of work is recorded as one more error instead of aborting the round.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Boxed failure returned by a validation unit of work for conditions it did
/// not anticipate.
pub type ValidationFault = Box<dyn std::error::Error + Send + Sync>;

/// A single human-readable validation message.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Accumulator of validation errors.
pub trait ValidationHandler {
    /// Record one error.
    fn append(&mut self, error: ValidationError) -> &mut dyn ValidationHandler;

    /// Record every error accumulated by `other`, preserving its order.
    fn append_all(&mut self, other: &dyn ValidationHandler) -> &mut dyn ValidationHandler;

    /// Run `validation` against this handler.
    ///
    /// An `Err` from the unit of work is converted into a single error built
    /// from its message and is never propagated.
    fn validate(&mut self, validation: &dyn Validation) -> &mut dyn ValidationHandler;

    /// Errors in insertion order.
    fn errors(&self) -> &[ValidationError];

    fn has_error(&self) -> bool {
        !self.errors().is_empty()
    }

    /// First error in insertion order, used for single-line messages.
    fn first_error(&self) -> Option<&ValidationError> {
        self.errors().first()
    }
}

/// A unit of work that appends zero or more errors to a handler.
pub trait Validation {
    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), ValidationFault>;
}

impl<F> Validation for F
where
    F: Fn(&mut dyn ValidationHandler) -> Result<(), ValidationFault>,
{
    fn validate(&self, handler: &mut dyn ValidationHandler) -> Result<(), ValidationFault> {
        self(handler)
    }
}
