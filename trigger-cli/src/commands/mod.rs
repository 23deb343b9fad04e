//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod http;
mod queue;

pub use http::HttpCommands;
pub use queue::QueueCommands;

use anyhow::Result;
use clap::Subcommand;

use crate::config::Config;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// HTTP trigger samples
    Http {
        #[command(subcommand)]
        command: HttpCommands,
    },
    /// Queue trigger sample
    Queue {
        #[command(subcommand)]
        command: QueueCommands,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, config: &Config) -> Result<()> {
    match command {
        Commands::Http { command } => http::handle_http_command(command, config).await,
        Commands::Queue { command } => queue::handle_queue_command(command, config).await,
    }
}
