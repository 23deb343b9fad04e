//! Binding repository
//!
//! Reads the queue message and table entities, and writes the output
//! binding. Each operation opens its file, completes, and releases the
//! handle before returning.

use async_trait::async_trait;
use trigger_core::BindingError;
use trigger_core::domain::binding::BindingPaths;
use trigger_core::domain::queue::{QueueMessage, TableEntity, parse_entities};

/// Access to the bindings of one queue-trigger invocation
#[async_trait]
pub trait BindingStore: Send + Sync {
    /// Reads the queue message from the input binding
    async fn read_message(&self) -> Result<QueueMessage, BindingError>;

    /// Reads and parses the table entities binding
    async fn read_entities(&self) -> Result<Vec<TableEntity>, BindingError>;

    /// Writes the value to the output binding, replacing any previous content
    async fn write_output(&self, value: &str) -> Result<(), BindingError>;
}

/// File-backed binding store
#[derive(Debug, Clone)]
pub struct FileBindingStore {
    paths: BindingPaths,
}

impl FileBindingStore {
    pub fn new(paths: BindingPaths) -> Self {
        Self { paths }
    }

    pub fn paths(&self) -> &BindingPaths {
        &self.paths
    }
}

#[async_trait]
impl BindingStore for FileBindingStore {
    async fn read_message(&self) -> Result<QueueMessage, BindingError> {
        let path = &self.paths.input;
        tracing::debug!("Reading queue message from {:?}", path);

        tokio::fs::read_to_string(path)
            .await
            .map(QueueMessage::from)
            .map_err(|source| BindingError::Read {
                path: path.clone(),
                source,
            })
    }

    async fn read_entities(&self) -> Result<Vec<TableEntity>, BindingError> {
        let path = &self.paths.table_input;
        tracing::debug!("Reading table entities from {:?}", path);

        let document =
            tokio::fs::read_to_string(path)
                .await
                .map_err(|source| BindingError::Read {
                    path: path.clone(),
                    source,
                })?;

        parse_entities(&document).map_err(|source| BindingError::Parse {
            path: path.clone(),
            source,
        })
    }

    async fn write_output(&self, value: &str) -> Result<(), BindingError> {
        let path = &self.paths.output;
        tracing::debug!("Writing {} bytes to output binding {:?}", value.len(), path);

        tokio::fs::write(path, value)
            .await
            .map_err(|source| BindingError::Write {
                path: path.clone(),
                source,
            })
    }
}
