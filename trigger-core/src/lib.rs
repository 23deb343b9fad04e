//! Trigger Core
//!
//! Shared types for the trigger samples.
//!
//! This crate contains:
//! - Domain types: HTTP triggers, queue messages, table entities and binding names
//! - DTOs: Data transfer objects returned by the HTTP host
//! - Errors: Failures raised while resolving or reading bindings

pub mod domain;
pub mod dto;
pub mod error;

pub use error::BindingError;
