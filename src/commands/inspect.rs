//! Inspect command handler.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use textgen_arrow::{DatasetReader, DatasetSummary};

/// Arguments for the inspect command.
#[derive(Args, Clone, Debug)]
pub struct InspectArgs {
    /// Arrow IPC file produced by `textgen generate`
    pub path: PathBuf,

    /// Print the summary as a single JSON line
    #[arg(long)]
    pub json: bool,
}

/// Run the inspect command.
pub fn run_inspect(args: &InspectArgs) -> anyhow::Result<DatasetSummary> {
    let summary = DatasetReader::new()
        .summarize(&args.path)
        .with_context(|| format!("Failed to read dataset from {:?}", args.path))?;

    tracing::info!(
        "{:?}: {} rows in {} batch(es), {} text bytes, {} distinct values, longest row {} bytes",
        args.path,
        summary.rows,
        summary.batches,
        summary.text_bytes,
        summary.distinct_values,
        summary.max_row_bytes
    );

    Ok(summary)
}

/// Render `summary` as human-readable lines.
pub fn format_summary(summary: &DatasetSummary) -> String {
    format!(
        "batches:         {}\n\
         rows:            {}\n\
         text bytes:      {}\n\
         distinct values: {}\n\
         longest row:     {} bytes\n\
         file size:       {} bytes",
        summary.batches,
        summary.rows,
        summary.text_bytes,
        summary.distinct_values,
        summary.max_row_bytes,
        summary.file_size_bytes
    )
}
