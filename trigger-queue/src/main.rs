//! Trigger Queue Runner
//!
//! Executes the queue-trigger sample once, with bindings supplied by the
//! hosting runtime through the `input`, `tableInput` and `output`
//! environment variables.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trigger_queue::config::Config;
use trigger_queue::run_queue_trigger;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the transcript
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trigger_queue=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = Config::from_env().context("Failed to resolve queue bindings")?;
    info!(
        "Resolved bindings: input={:?}, tableInput={:?}, output={:?}",
        config.bindings.input, config.bindings.table_input, config.bindings.output
    );

    let mut stdout = std::io::stdout();
    let invocation = run_queue_trigger(config.bindings, &mut stdout).await?;

    info!(
        "Queue trigger completed with {} table entities",
        invocation.entities.len()
    );

    Ok(())
}
