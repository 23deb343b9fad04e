//! Queue command handlers
//!
//! Runs the queue-trigger sample in-process and scaffolds sample bindings.

use anyhow::{Context, Result};
use clap::Subcommand;
use colored::*;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use trigger_core::domain::binding::{BindingPaths, INPUT_VAR, OUTPUT_VAR, TABLE_INPUT_VAR};
use trigger_queue::run_queue_trigger;

use crate::config::Config;

/// Message written by `queue init`
const SAMPLE_MESSAGE: &str = "hello";

/// Table document written by `queue init`
const SAMPLE_TABLE: &str = r#"[{"a":1},{"b":2}]"#;

/// Queue subcommands
#[derive(Subcommand)]
pub enum QueueCommands {
    /// Run the queue trigger once
    Run {
        /// Queue message file (falls back to $input)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Table entities file (falls back to $tableInput)
        #[arg(long)]
        table_input: Option<PathBuf>,

        /// Output binding file (falls back to $output)
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Write sample binding files
    Init {
        /// Directory to write the files to
        #[arg(short, long, default_value = ".")]
        dir: PathBuf,
    },
}

/// Handle queue commands
pub async fn handle_queue_command(command: QueueCommands, _config: &Config) -> Result<()> {
    match command {
        QueueCommands::Run {
            input,
            table_input,
            output,
        } => {
            let paths = resolve_paths(input, table_input, output)?;
            run_queue(paths).await
        }
        QueueCommands::Init { dir } => init_bindings(&dir),
    }
}

/// Resolves binding paths, preferring flags over the environment
fn resolve_paths(
    input: Option<PathBuf>,
    table_input: Option<PathBuf>,
    output: Option<PathBuf>,
) -> Result<BindingPaths> {
    resolve_paths_with(input, table_input, output, |name| std::env::var_os(name))
}

/// Resolves binding paths, falling back to `env` for any flag not given
fn resolve_paths_with<E>(
    input: Option<PathBuf>,
    table_input: Option<PathBuf>,
    output: Option<PathBuf>,
    env: E,
) -> Result<BindingPaths>
where
    E: Fn(&str) -> Option<OsString>,
{
    BindingPaths::from_lookup(|name| {
        let flag = match name {
            INPUT_VAR => &input,
            TABLE_INPUT_VAR => &table_input,
            OUTPUT_VAR => &output,
            _ => &None,
        };
        flag.clone()
            .map(PathBuf::into_os_string)
            .or_else(|| env(name))
    })
    .context("Failed to resolve queue bindings (pass --input/--table-input/--output or set the environment)")
}

/// Run the queue trigger with stdout as the transcript sink
async fn run_queue(paths: BindingPaths) -> Result<()> {
    let output = paths.output.clone();
    let mut stdout = std::io::stdout();

    run_queue_trigger(paths, &mut stdout).await?;

    eprintln!(
        "{} wrote output binding to {}",
        "✓".green(),
        output.display().to_string().cyan()
    );
    Ok(())
}

/// Write a sample message and table file
fn init_bindings(dir: &Path) -> Result<()> {
    let paths = write_sample_bindings(dir)?;

    println!("  {} {}", "Created".green(), paths.input.display());
    println!("  {} {}", "Created".green(), paths.table_input.display());
    println!();
    println!("{}", "Export the bindings to run the sample:".bold());
    println!("  export {}={}", INPUT_VAR, paths.input.display());
    println!("  export {}={}", TABLE_INPUT_VAR, paths.table_input.display());
    println!("  export {}={}", OUTPUT_VAR, paths.output.display());
    println!();
    println!("Then run {}", "trigger queue run".cyan());

    Ok(())
}

fn write_sample_bindings(dir: &Path) -> Result<BindingPaths> {
    fs::create_dir_all(dir).with_context(|| format!("Failed to create {:?}", dir))?;

    let paths = BindingPaths::new(
        dir.join("input.txt"),
        dir.join("table.json"),
        dir.join("output.txt"),
    );

    fs::write(&paths.input, SAMPLE_MESSAGE)
        .with_context(|| format!("Failed to write {:?}", paths.input))?;
    fs::write(&paths.table_input, SAMPLE_TABLE)
        .with_context(|| format!("Failed to write {:?}", paths.table_input))?;

    Ok(paths)
}
