//! Trigger HTTP Host
//!
//! Serves the HTTP-trigger samples. Every registered trigger accepts any
//! request and answers with its fixed plain-text body.

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trigger_http::config::Config;
use trigger_http::{api, shutdown};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trigger_http=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting trigger HTTP host...");

    let config = load_config()?;

    // Build router with all trigger endpoints
    let app = api::create_router();

    tracing::info!("Listening on {}", config.bind_addr);
    for trigger in &trigger_core::domain::http::HTTP_TRIGGERS {
        tracing::info!("  - {}", trigger);
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind to {}", config.bind_addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await
        .context("Server terminated unexpectedly")?;

    tracing::info!("Trigger HTTP host stopped");
    Ok(())
}

/// Loads configuration from the environment with fallback to defaults
fn load_config() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
