//! Error types for pool building and sampling.

use crate::generators::PatternError;
use textgen_core::ConfigError;

/// Error type for generator operations.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// Pool specifications or budgets are invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A pool pattern could not be turned into strings
    #[error("Pool {index}: {source}")]
    Pattern {
        index: usize,
        #[source]
        source: PatternError,
    },

    /// Sampling hit an internal invariant breach
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),
}

/// Internal invariant breaches detected while sampling.
///
/// These indicate a defect in pool construction rather than bad user input.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SamplingError {
    /// There are no pools to sample from
    #[error("Cannot sample from an empty pool collection")]
    EmptyPools,

    /// The final cumulative threshold stops short of 1
    #[error("Pools cover [0, {final_threshold}] instead of [0, 1]")]
    IncompleteCoverage { final_threshold: f64 },

    /// The final cumulative threshold does not cover the draw
    #[error("No pool covers draw {draw}; final cumulative threshold is {final_threshold}")]
    CoverageGap { draw: f64, final_threshold: f64 },

    /// The selected pool holds no strings
    #[error("Pool {index} has no strings to sample")]
    EmptyPool { index: usize },

    /// The draw is not in [0, 1)
    #[error("Draw {0} is outside [0, 1)")]
    DrawOutOfRange(f64),
}
