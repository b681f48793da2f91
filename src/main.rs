//! Command-line interface for textgen
//!
//! # Usage Examples
//!
//! ## Generate
//! ```bash
//! # Built-in workload (10M rows / 1 GB budget) into input.rb
//! textgen generate
//!
//! # Custom pools, smaller budgets, reproducible output
//! textgen generate \
//!   --config pools.yaml \
//!   --max-rows 100000 --max-bytes 5000000 \
//!   --seed 42 --output fixtures/input.rb
//!
//! # Validate a config and build its pools without writing anything
//! textgen generate --config pools.yaml --dry-run
//! ```
//!
//! ## Inspect
//! ```bash
//! textgen inspect fixtures/input.rb
//! textgen inspect fixtures/input.rb --json
//! ```
//!
//! ## Show Config
//! ```bash
//! # Print the built-in configuration as a starting point for a config file
//! textgen show-config > pools.yaml
//! ```

use clap::{Parser, Subcommand};
use textgen::commands::generate::{run_generate, GenerateArgs};
use textgen::commands::inspect::{format_summary, run_inspect, InspectArgs};
use textgen::commands::show_config::{run_show_config, ShowConfigArgs};

#[derive(Parser)]
#[command(name = "textgen")]
#[command(about = "Generate weighted synthetic text datasets as Arrow record batch files")]
#[command(long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a dataset from weighted string pools
    Generate {
        #[command(flatten)]
        args: GenerateArgs,
    },

    /// Summarize a generated dataset file
    Inspect {
        #[command(flatten)]
        args: InspectArgs,
    },

    /// Print the effective configuration as YAML
    ShowConfig {
        #[command(flatten)]
        args: ShowConfigArgs,
    },
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate { args } => {
            let report = run_generate(&args)?;
            println!("{}", serde_json::to_string(&report)?);
        }
        Commands::Inspect { args } => {
            let summary = run_inspect(&args)?;
            if args.json {
                println!("{}", serde_json::to_string(&summary)?);
            } else {
                println!("{}", format_summary(&summary));
            }
        }
        Commands::ShowConfig { args } => {
            print!("{}", run_show_config(&args)?);
        }
    }

    Ok(())
}
