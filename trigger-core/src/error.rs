//! Error types for binding resolution and I/O

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while resolving or reading the queue sample's bindings
#[derive(Debug, Error)]
pub enum BindingError {
    /// A binding environment variable is unset or empty
    #[error("binding variable '{0}' is not set")]
    MissingVariable(&'static str),

    /// A binding file could not be read
    #[error("failed to read binding file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The table binding is not a JSON array of objects
    #[error("failed to parse table entities from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The output binding could not be written
    #[error("failed to write output binding {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
