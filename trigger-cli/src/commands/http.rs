//! HTTP command handlers
//!
//! Lists and invokes the HTTP triggers served by the host.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use trigger_client::{TriggerClient, TriggerSummary};

use crate::config::Config;

/// HTTP subcommands
#[derive(Subcommand)]
pub enum HttpCommands {
    /// List triggers registered on the host
    Routes,
    /// Invoke a trigger and print its response
    Invoke {
        /// Function name (e.g., http_trigger)
        name: String,

        /// HTTP method to send
        #[arg(short, long, default_value = "GET")]
        method: String,

        /// Request body to send
        #[arg(short, long)]
        body: Option<String>,
    },
    /// Check that the host is up
    Health,
}

/// Handle HTTP commands
pub async fn handle_http_command(command: HttpCommands, config: &Config) -> Result<()> {
    let client = TriggerClient::new(&config.host_url);

    match command {
        HttpCommands::Routes => list_routes(&client).await,
        HttpCommands::Invoke { name, method, body } => {
            invoke_trigger(&client, &name, &method, body).await
        }
        HttpCommands::Health => check_health(&client).await,
    }
}

/// List registered triggers
async fn list_routes(client: &TriggerClient) -> Result<()> {
    let triggers = client
        .list_triggers()
        .await
        .with_context(|| format!("Failed to list triggers from {}", client.base_url()))?;

    if triggers.is_empty() {
        println!("{}", "No triggers registered.".yellow());
    } else {
        println!(
            "{}",
            format!("Found {} HTTP trigger(s):", triggers.len()).bold()
        );
        println!();
        for trigger in &triggers {
            print_trigger_summary(trigger);
        }
    }

    Ok(())
}

fn print_trigger_summary(trigger: &TriggerSummary) {
    println!("  {} {}", "▸".cyan(), trigger.name.bold());
    println!("    Route:  {}", trigger.route.dimmed());
}

/// Invoke one trigger
async fn invoke_trigger(
    client: &TriggerClient,
    name: &str,
    method: &str,
    body: Option<String>,
) -> Result<()> {
    let result = client.invoke(name, method, body).await;
    if matches!(&result, Err(e) if e.is_not_found()) {
        eprintln!(
            "Run {} to see the registered triggers",
            "trigger http routes".cyan()
        );
    }
    let response = result.with_context(|| format!("Failed to invoke trigger '{}'", name))?;

    println!("{} {}", "Status:".bold(), response.status.to_string().green());
    println!("{}", response.body);

    Ok(())
}

/// Check host health
async fn check_health(client: &TriggerClient) -> Result<()> {
    let body = client
        .health()
        .await
        .with_context(|| format!("Host at {} is not healthy", client.base_url()))?;

    println!("{} {}", "✓".green(), body);
    Ok(())
}
