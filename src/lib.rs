//! Core library exports for the catalog service.
//!
//! This crate exposes the category domain, its persistence models and
//! gateways, and the use cases that create, update, delete, fetch and list
//! categories.

pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod models;
pub mod repository;
pub mod services;
