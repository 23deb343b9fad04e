//! Queue trigger service
//!
//! Runs the sample's linear sequence:
//! - Read the queue message
//! - Read the table entities
//! - Print the transcript
//! - Forward the message to the output binding
//!
//! The first failure aborts the invocation; nothing is retried.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::Write;
use tracing::info;
use trigger_core::domain::queue::QueueInvocation;

use crate::repository::BindingStore;

/// Service trait for handling one queue-trigger invocation
#[async_trait]
pub trait QueueTriggerService: Send + Sync {
    /// Handles the invocation
    ///
    /// # Arguments
    /// * `out` - Destination for the transcript (stdout in the runner)
    ///
    /// # Returns
    /// The invocation that was processed
    async fn handle(&self, out: &mut (dyn Write + Send)) -> Result<QueueInvocation>;
}

/// Standard implementation of QueueTriggerService
pub struct StandardQueueTriggerService<S> {
    store: S,
}

impl<S: BindingStore> StandardQueueTriggerService<S> {
    /// Creates a new service over the given binding store
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: BindingStore> QueueTriggerService for StandardQueueTriggerService<S> {
    async fn handle(&self, out: &mut (dyn Write + Send)) -> Result<QueueInvocation> {
        let message = self
            .store
            .read_message()
            .await
            .context("Failed to read queue message")?;

        let entities = self
            .store
            .read_entities()
            .await
            .context("Failed to read table entities")?;

        let invocation = QueueInvocation::new(message, entities);
        info!(
            "Processing queue message ({} bytes, {} entities)",
            invocation.output().len(),
            invocation.entities.len()
        );

        for line in invocation.transcript() {
            writeln!(out, "{}", line).context("Failed to write transcript")?;
        }
        out.flush().context("Failed to flush transcript")?;

        self.store
            .write_output(invocation.output())
            .await
            .context("Failed to write output binding")?;

        Ok(invocation)
    }
}
