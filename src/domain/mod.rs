//! Domain layer: the category aggregate, its value objects and the
//! validation primitives shared by every use case.

pub mod category;
pub mod either;
pub mod error;
pub mod notification;
pub mod pagination;
pub mod search;
pub mod types;
pub mod validation;
