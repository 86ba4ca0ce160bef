mod terminal_output;

use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use cronlint_engine::{validate_batch, validate_with_runs, DEFAULT_RUN_COUNT};

use terminal_output::{print_batch_summary, print_result, supports_color};

#[derive(Parser)]
#[command(name = "cronlint")]
#[command(about = "Validate, explain, and project cron expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate one expression and show the full breakdown
    Check {
        /// The five-field cron expression, quoted
        expression: String,
        /// Emit the result as pretty-printed JSON
        #[arg(long)]
        json: bool,
        /// How many upcoming runs to project
        #[arg(long, default_value_t = DEFAULT_RUN_COUNT)]
        runs: usize,
    },
    /// Validate every non-blank line of a file (or stdin)
    Batch {
        /// File to read; stdin when omitted
        file: Option<PathBuf>,
        /// Emit all results as pretty-printed JSON
        #[arg(long)]
        json: bool,
    },
    /// Print only the human-readable description
    Explain {
        /// The five-field cron expression, quoted
        expression: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let color = supports_color();

    match cli.command {
        Commands::Check { expression, json, runs } => {
            let result = validate_with_runs(&expression, runs);
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                print_result(&expression, &result, color);
            }
            if !result.is_valid {
                std::process::exit(1);
            }
        }
        Commands::Batch { file, json } => {
            let text = read_input(file.as_deref())?;
            let entries = validate_batch(&text);
            tracing::debug!(entries = entries.len(), "batch validated");
            if json {
                println!("{}", serde_json::to_string_pretty(&entries)?);
            } else {
                print_batch_summary(&entries, color);
            }
            if entries.iter().any(|e| !e.result.is_valid) {
                std::process::exit(1);
            }
        }
        Commands::Explain { expression } => {
            let result = validate_with_runs(&expression, 0);
            println!("{}", result.human_readable);
        }
    }

    Ok(())
}

fn read_input(file: Option<&std::path::Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read stdin")?;
            Ok(buf)
        }
    }
}
