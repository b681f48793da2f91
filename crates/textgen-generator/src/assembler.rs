//! Dataset assembly under row and byte budgets.

use crate::error::GeneratorError;
use crate::pool::Pools;
use crate::sampler::WeightedSampler;
use rand::Rng;
use textgen_core::Budgets;
use tracing::{debug, info};

/// Number of appended rows between progress reports.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Generated rows and the running total of their UTF-8 byte lengths.
///
/// Rows are only ever appended, one at a time, by [`DatasetAssembler`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<String>,
    byte_total: u64,
}

impl Dataset {
    fn push(&mut self, row: &str) {
        self.byte_total += row.len() as u64;
        self.rows.push(row.to_string());
    }

    pub fn rows(&self) -> &[String] {
        &self.rows
    }

    /// Sum of the UTF-8 byte lengths of all rows.
    pub fn byte_total(&self) -> u64 {
        self.byte_total
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Snapshot reported while a dataset is being assembled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    /// Rows appended so far
    pub rows: u64,
    /// Bytes appended so far
    pub bytes: u64,
    /// Completion in `[0, 100]` against whichever budget is closer
    pub percent: f64,
}

/// Receives progress reports from [`DatasetAssembler`].
///
/// Observers only watch; they cannot affect when assembly stops.
pub trait ProgressObserver {
    fn on_progress(&mut self, progress: Progress);
}

impl<F: FnMut(Progress)> ProgressObserver for F {
    fn on_progress(&mut self, progress: Progress) {
        self(progress)
    }
}

/// Observer that ignores every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    fn on_progress(&mut self, _progress: Progress) {}
}

/// Observer that logs progress through `tracing`.
///
/// Every report is logged at debug level; a report is promoted to info level
/// each time the whole-number percentage advances.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress {
    last_percent: Option<u64>,
}

impl ProgressObserver for TracingProgress {
    fn on_progress(&mut self, progress: Progress) {
        let whole = progress.percent.floor() as u64;
        if self.last_percent != Some(whole) {
            self.last_percent = Some(whole);
            info!(
                "{:.1}%... ({} rows, {} bytes)",
                progress.percent, progress.rows, progress.bytes
            );
        } else {
            debug!(
                "{:.1}%... ({} rows, {} bytes)",
                progress.percent, progress.rows, progress.bytes
            );
        }
    }
}

/// Draws rows from pools until a budget is reached.
#[derive(Debug, Clone, Copy)]
pub struct DatasetAssembler {
    budgets: Budgets,
    progress_interval: u64,
}

impl DatasetAssembler {
    /// Create an assembler for the given budgets.
    pub fn new(budgets: Budgets) -> Self {
        Self {
            budgets,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Set how many appended rows pass between progress reports (0 disables them).
    pub fn with_progress_interval(mut self, progress_interval: u64) -> Self {
        self.progress_interval = progress_interval;
        self
    }

    /// Assemble a dataset from `pools`.
    ///
    /// Each iteration draws a uniform number in `[0, 1)`, samples a string,
    /// appends it and then checks both budgets. The row that crosses the byte
    /// budget is kept; the row budget is never exceeded.
    ///
    /// Zero budgets are rejected before anything is drawn.
    pub fn assemble<R, O>(
        &self,
        pools: &Pools,
        rng: &mut R,
        observer: &mut O,
    ) -> Result<Dataset, GeneratorError>
    where
        R: Rng,
        O: ProgressObserver + ?Sized,
    {
        self.budgets.validate()?;
        let sampler = WeightedSampler::new(pools)?;
        let mut dataset = Dataset::default();

        info!(
            "Constructing dataset (max {} rows, max {} bytes)...",
            self.budgets.max_rows, self.budgets.max_bytes
        );

        loop {
            let draw: f64 = rng.random();
            let row = sampler.sample(draw, rng)?;
            dataset.push(row);

            let rows = dataset.len() as u64;
            let bytes = dataset.byte_total();

            if self.progress_interval > 0 && rows % self.progress_interval == 0 {
                observer.on_progress(Progress {
                    rows,
                    bytes,
                    percent: self.budgets.progress_percent(rows, bytes),
                });
            }

            if self.budgets.is_exhausted(rows, bytes) {
                break;
            }
        }

        info!(
            "Constructed dataset: {} rows, {} bytes",
            dataset.len(),
            dataset.byte_total()
        );

        Ok(dataset)
    }
}
