//! Trigger HTTP Host
//!
//! Router, configuration and shutdown handling for the HTTP-trigger host.
//! The binary wires these together; the router is also served in-process
//! by the client's tests.

pub mod api;
pub mod config;
pub mod shutdown;
