//! Trigger Queue
//!
//! The queue-trigger sample: reads the queue message and table entities the
//! host bound to the invocation, prints a transcript and forwards the message
//! to the output binding.
//!
//! Architecture:
//! - Configuration: Binding paths resolved from the environment
//! - Repositories: File access for the input, table and output bindings
//! - Services: The invocation itself, composed from the repository

pub mod config;
pub mod repository;
pub mod service;

use anyhow::Result;
use std::io::Write;
use trigger_core::domain::binding::BindingPaths;
use trigger_core::domain::queue::QueueInvocation;

use crate::repository::FileBindingStore;
use crate::service::{QueueTriggerService, StandardQueueTriggerService};

/// Runs one queue-trigger invocation against file bindings
///
/// The transcript is written to `out`; the message is written to the
/// output binding.
pub async fn run_queue_trigger(
    paths: BindingPaths,
    out: &mut (dyn Write + Send),
) -> Result<QueueInvocation> {
    let service = StandardQueueTriggerService::new(FileBindingStore::new(paths));
    service.handle(out).await
}
