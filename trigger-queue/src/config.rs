//! Runner configuration
//!
//! The queue sample is configured entirely by the host-provided binding
//! variables. There are no defaults: a missing binding is an error.

use trigger_core::BindingError;
use trigger_core::domain::binding::BindingPaths;

/// Queue runner configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// File paths of the input, table and output bindings
    pub bindings: BindingPaths,
}

impl Config {
    pub fn new(bindings: BindingPaths) -> Self {
        Self { bindings }
    }

    /// Creates configuration from environment variables
    ///
    /// Expected environment variables:
    /// - input (required): queue message file
    /// - tableInput (required): table entities file
    /// - output (required): output binding file
    pub fn from_env() -> Result<Self, BindingError> {
        Ok(Self::new(BindingPaths::from_env()?))
    }
}
