//! Service layer
//!
//! Services compose repository operations into a queue-trigger invocation.
//! Services are trait-based to enable testing and dependency injection.

mod queue_trigger;

pub use queue_trigger::{QueueTriggerService, StandardQueueTriggerService};
