//! Core domain types
//!
//! These types are shared between the HTTP host (which serves triggers),
//! the queue runner (which executes the queue sample) and the CLI.

pub mod binding;
pub mod http;
pub mod queue;
