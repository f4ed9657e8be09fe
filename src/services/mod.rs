//! Application services: one use case per category intent.

pub mod categories;
pub mod errors;

pub use errors::{ServiceError, ServiceResult};

/// A single application intent.
///
/// Use cases hold no per-call state and may be shared between callers.
pub trait UseCase<Input> {
    type Output;

    fn execute(&self, input: Input) -> ServiceResult<Self::Output>;
}
