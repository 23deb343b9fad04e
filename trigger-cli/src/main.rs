//! Trigger CLI
//!
//! Command-line interface for driving the trigger samples.

mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "trigger")]
#[command(about = "Trigger samples CLI", long_about = None)]
struct Cli {
    /// HTTP trigger host URL
    #[arg(long, env = "TRIGGER_HOST_URL", default_value = "http://localhost:7071")]
    host_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    log_subscriber().init();

    let config = Config {
        host_url: cli.host_url,
    };

    handle_command(cli.command, &config).await
}

/// Logs go to stderr; stdout carries command output
fn log_subscriber() -> impl tracing::Subscriber + Send + Sync + 'static {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trigger_queue=info,trigger_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_queue_logs_are_enabled_by_default() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }

        tracing::subscriber::with_default(log_subscriber(), || {
            assert!(tracing::enabled!(target: "trigger_queue::service", tracing::Level::INFO));
            assert!(!tracing::enabled!(target: "trigger_queue::service", tracing::Level::DEBUG));
        });
    }
}
