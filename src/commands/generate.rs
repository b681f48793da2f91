//! Generate command handler.

use super::load_config;
use anyhow::Context;
use clap::Args;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use textgen_arrow::DatasetWriter;
use textgen_core::{GenerationConfig, PatternSyntax};
use textgen_generator::{DatasetAssembler, PoolBuilder, SyntaxPatternGenerator, TracingProgress};

/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "input.rb";

/// Arguments for the generate command.
#[derive(Args, Clone, Debug)]
pub struct GenerateArgs {
    /// Path to config YAML file (built-in pools when omitted)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Output Arrow IPC file
    #[arg(long, short = 'o', default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Maximum number of rows (overrides the config file)
    #[arg(long)]
    pub max_rows: Option<u64>,

    /// Byte budget; generation stops once it is reached (overrides the config file)
    #[arg(long)]
    pub max_bytes: Option<u64>,

    /// Random seed for deterministic generation (same seed = same data)
    #[arg(long, env = "TEXTGEN_SEED")]
    pub seed: Option<u64>,

    /// Cap for unbounded regex repetitions such as `*` and `+`
    #[arg(long)]
    pub max_repeat: Option<u32>,

    /// Use pool patterns verbatim instead of as regular expressions
    #[arg(long)]
    pub literal: bool,

    /// Dry-run mode: validate the configuration and build pools without writing a file
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Arguments that generate the built-in workload into `output`.
    pub fn new(output: impl Into<PathBuf>) -> Self {
        Self {
            config: None,
            output: output.into(),
            max_rows: None,
            max_bytes: None,
            seed: None,
            max_repeat: None,
            literal: false,
            dry_run: false,
        }
    }
}

/// Summary of a generate run, printed as one JSON line.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub output: PathBuf,
    pub seed: u64,
    pub pools: usize,
    pub pool_strings: usize,
    pub rows: u64,
    pub text_bytes: u64,
    pub file_size_bytes: u64,
    pub build_secs: f64,
    pub assemble_secs: f64,
    pub write_secs: f64,
    pub total_secs: f64,
    pub dry_run: bool,
}

impl GenerateReport {
    /// Calculate assembled rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.assemble_secs > 0.0 {
            self.rows as f64 / self.assemble_secs
        } else {
            0.0
        }
    }
}

/// Load the config named by `args` and apply the command-line overrides.
pub fn effective_config(args: &GenerateArgs) -> anyhow::Result<GenerationConfig> {
    let mut config = load_config(args.config.as_deref())?;

    if let Some(max_rows) = args.max_rows {
        config.budgets.max_rows = max_rows;
    }
    if let Some(max_bytes) = args.max_bytes {
        config.budgets.max_bytes = max_bytes;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(max_repeat) = args.max_repeat {
        config.max_repeat = max_repeat;
    }
    if args.literal {
        config.syntax = PatternSyntax::Literal;
    }

    Ok(config)
}

/// Run the generate command.
pub fn run_generate(args: &GenerateArgs) -> anyhow::Result<GenerateReport> {
    let start_time = Instant::now();

    let config = effective_config(args)?;
    config.validate().context("Invalid configuration")?;

    let seed = config.seed.unwrap_or_else(|| rand::rng().random());
    tracing::info!(
        "Generating up to {} rows / {} bytes from {} pools (seed={})",
        config.budgets.max_rows,
        config.budgets.max_bytes,
        config.pools.len(),
        seed
    );

    let mut rng = StdRng::seed_from_u64(seed);

    let build_start = Instant::now();
    let generator = SyntaxPatternGenerator::new(config.syntax, config.max_repeat);
    let pools = PoolBuilder::new(generator)
        .build(&config.pools, &mut rng)
        .context("Failed to build string pools")?;
    let build_duration = build_start.elapsed();

    let mut report = GenerateReport {
        output: args.output.clone(),
        seed,
        pools: pools.len(),
        pool_strings: pools.total_strings(),
        rows: 0,
        text_bytes: 0,
        file_size_bytes: 0,
        build_secs: build_duration.as_secs_f64(),
        assemble_secs: 0.0,
        write_secs: 0.0,
        total_secs: 0.0,
        dry_run: args.dry_run,
    };

    if args.dry_run {
        tracing::info!(
            "Dry run: built {} pools with {} strings in {:?}; nothing written",
            report.pools,
            report.pool_strings,
            build_duration
        );
        report.total_secs = start_time.elapsed().as_secs_f64();
        return Ok(report);
    }

    let assemble_start = Instant::now();
    let dataset = DatasetAssembler::new(config.budgets)
        .assemble(&pools, &mut rng, &mut TracingProgress::default())
        .context("Failed to assemble dataset")?;
    let assemble_duration = assemble_start.elapsed();

    let metrics = DatasetWriter::new()
        .write(&dataset, &args.output)
        .with_context(|| format!("Failed to write dataset to {:?}", args.output))?;

    report.rows = dataset.len() as u64;
    report.text_bytes = dataset.byte_total();
    report.file_size_bytes = metrics.file_size_bytes;
    report.assemble_secs = assemble_duration.as_secs_f64();
    report.write_secs = metrics.total_duration.as_secs_f64();
    report.total_secs = start_time.elapsed().as_secs_f64();

    tracing::info!(
        "Generated {:?}: {} rows, {} bytes in {:?} ({:.2} rows/sec)",
        report.output,
        report.rows,
        report.text_bytes,
        Duration::from_secs_f64(report.total_secs),
        report.rows_per_second()
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const CONFIG: &str = r#"
seed: 3
budgets:
  max_rows: 50
  max_bytes: 1000000
pools:
  - unique_count: 4
    frequency: 1
    pattern: "[a-z]{5}"
"#;

    #[test]
    fn test_effective_config_defaults() {
        let config = effective_config(&GenerateArgs::new("out.rb")).unwrap();
        assert_eq!(config, GenerationConfig::default());
    }

    #[test]
    fn test_effective_config_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("pools.yaml");
        std::fs::write(&config_path, CONFIG).unwrap();

        let args = GenerateArgs {
            config: Some(config_path),
            max_rows: Some(7),
            max_bytes: Some(99),
            seed: Some(11),
            max_repeat: Some(4),
            literal: true,
            ..GenerateArgs::new("out.rb")
        };
        let config = effective_config(&args).unwrap();

        assert_eq!(config.budgets.max_rows, 7);
        assert_eq!(config.budgets.max_bytes, 99);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.max_repeat, 4);
        assert_eq!(config.syntax, PatternSyntax::Literal);
        assert_eq!(config.pools.len(), 1);
    }

    #[test]
    fn test_missing_config_file() {
        let args = GenerateArgs {
            config: Some(PathBuf::from("/nonexistent/pools.yaml")),
            ..GenerateArgs::new("out.rb")
        };
        assert!(effective_config(&args).is_err());
    }

    #[test]
    fn test_report_rows_per_second() {
        let report = GenerateReport {
            output: PathBuf::from("input.rb"),
            seed: 1,
            pools: 1,
            pool_strings: 1,
            rows: 500,
            text_bytes: 0,
            file_size_bytes: 0,
            build_secs: 0.0,
            assemble_secs: 2.0,
            write_secs: 0.0,
            total_secs: 0.0,
            dry_run: false,
        };
        assert_eq!(report.rows_per_second(), 250.0);
    }
}
