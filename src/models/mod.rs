pub mod category;
#[cfg(feature = "cli")]
pub mod config;
