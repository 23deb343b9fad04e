//! Repository layer
//!
//! Repositories own the I/O against the bindings the host provides.
//! All repositories are trait-based to enable testing.

mod bindings;

pub use bindings::{BindingStore, FileBindingStore};
