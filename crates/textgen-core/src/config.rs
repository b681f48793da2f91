//! Generation configuration for textgen.
//!
//! A configuration is an ordered list of pool specifications plus the two
//! budgets that stop dataset assembly. Configurations are loaded from YAML
//! and must pass [`GenerationConfig::validate`] before any string is
//! generated.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default row budget (10 million rows).
pub const DEFAULT_MAX_ROWS: u64 = 10_000_000;

/// Default byte budget (1 GB of UTF-8 text).
pub const DEFAULT_MAX_BYTES: u64 = 1_000_000_000;

/// Default cap for unbounded repetitions (`*`, `+`, `{n,}`) in regex patterns.
pub const DEFAULT_MAX_REPEAT: u32 = 100;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading configuration file
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// No pools were configured
    #[error("At least one pool must be configured")]
    NoPools,

    /// A pool asks for zero strings
    #[error("Pool {index} has unique_count 0; it must be positive")]
    NonPositiveUniqueCount { index: usize },

    /// A pool frequency is negative, NaN or infinite
    #[error("Pool {index} has invalid frequency {frequency}; it must be a finite non-negative number")]
    InvalidFrequency { index: usize, frequency: f64 },

    /// The frequencies do not add up to a usable normalizing denominator
    #[error("Total pool frequency is {total}; it must be positive and finite")]
    NonPositiveTotalFrequency { total: f64 },

    /// A budget is zero
    #[error("Budget '{name}' must be positive")]
    ZeroBudget { name: &'static str },
}

// ============================================================================
// Pool Specification
// ============================================================================

/// Specification for one pool of pre-generated strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolSpec {
    /// How many strings to pre-generate for this pool
    pub unique_count: u64,
    /// How often this pool is drawn from, relative to the other pools
    pub frequency: f64,
    /// Pattern every generated string must match
    pub pattern: String,
}

impl PoolSpec {
    /// Create a new pool specification.
    pub fn new(unique_count: u64, frequency: f64, pattern: impl Into<String>) -> Self {
        Self {
            unique_count,
            frequency,
            pattern: pattern.into(),
        }
    }
}

/// Sum of the relative frequencies of `specs`.
///
/// This is the normalizing denominator for cumulative pool thresholds.
pub fn total_frequency(specs: &[PoolSpec]) -> f64 {
    specs.iter().map(|spec| spec.frequency).sum()
}

/// Validate an ordered list of pool specifications.
pub fn validate_pools(specs: &[PoolSpec]) -> Result<(), ConfigError> {
    if specs.is_empty() {
        return Err(ConfigError::NoPools);
    }

    for (index, spec) in specs.iter().enumerate() {
        if spec.unique_count == 0 {
            return Err(ConfigError::NonPositiveUniqueCount { index });
        }
        if !spec.frequency.is_finite() || spec.frequency < 0.0 {
            return Err(ConfigError::InvalidFrequency {
                index,
                frequency: spec.frequency,
            });
        }
    }

    let total = total_frequency(specs);
    if !(total.is_finite() && total > 0.0) {
        return Err(ConfigError::NonPositiveTotalFrequency { total });
    }

    Ok(())
}

// ============================================================================
// Budgets
// ============================================================================

/// Limits that stop dataset assembly. Whichever is reached first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Budgets {
    /// Maximum number of rows in the dataset
    pub max_rows: u64,
    /// Byte total at which assembly stops (the crossing row is kept)
    pub max_bytes: u64,
}

impl Budgets {
    /// Create validated budgets. Zero budgets are rejected.
    pub fn new(max_rows: u64, max_bytes: u64) -> Result<Self, ConfigError> {
        let budgets = Self {
            max_rows,
            max_bytes,
        };
        budgets.validate()?;
        Ok(budgets)
    }

    /// Check that both budgets are positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_rows == 0 {
            return Err(ConfigError::ZeroBudget { name: "max_rows" });
        }
        if self.max_bytes == 0 {
            return Err(ConfigError::ZeroBudget { name: "max_bytes" });
        }
        Ok(())
    }

    /// Returns true once either budget has been reached.
    pub fn is_exhausted(&self, rows: u64, bytes: u64) -> bool {
        bytes >= self.max_bytes || rows >= self.max_rows
    }

    /// Completion percentage in `[0, 100]`, driven by whichever budget is closer.
    pub fn progress_percent(&self, rows: u64, bytes: u64) -> f64 {
        let by_bytes = bytes as f64 / self.max_bytes as f64;
        let by_rows = rows as f64 / self.max_rows as f64;
        by_bytes.max(by_rows).min(1.0) * 100.0
    }
}

impl Default for Budgets {
    fn default() -> Self {
        Self {
            max_rows: DEFAULT_MAX_ROWS,
            max_bytes: DEFAULT_MAX_BYTES,
        }
    }
}

// ============================================================================
// Generation Config
// ============================================================================

/// How pool patterns are turned into strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternSyntax {
    /// Patterns are regular expressions; strings are random matches
    #[default]
    Regex,
    /// Patterns are used verbatim as the generated string
    Literal,
}

/// Full generation configuration loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Seed for pool generation and sampling (random when absent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Cap for unbounded regex repetitions
    #[serde(default = "default_max_repeat")]
    pub max_repeat: u32,

    /// Pattern syntax used by every pool
    #[serde(default)]
    pub syntax: PatternSyntax,

    /// Row and byte budgets
    #[serde(default)]
    pub budgets: Budgets,

    /// Pools in declaration order
    pub pools: Vec<PoolSpec>,
}

fn default_max_repeat() -> u32 {
    DEFAULT_MAX_REPEAT
}

impl GenerationConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize the configuration back to YAML.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate pools and budgets. Must succeed before sampling begins.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_pools(&self.pools)?;
        self.budgets.validate()
    }

    /// Sum of all pool frequencies.
    pub fn total_frequency(&self) -> f64 {
        total_frequency(&self.pools)
    }
}

impl Default for GenerationConfig {
    /// The built-in workload: two rare keyword pools and two dominant pools
    /// of arbitrary long and short strings.
    fn default() -> Self {
        Self {
            seed: None,
            max_repeat: DEFAULT_MAX_REPEAT,
            syntax: PatternSyntax::Regex,
            budgets: Budgets::default(),
            pools: vec![
                PoolSpec::new(
                    100,
                    1.0,
                    r".*[tT][eE][rR][aA][tT][iI][dD][eE][ \t\n]+[dD][iI][vV][iI][nN][gG][ \t\n]+([sS][uU][bB])+[sS][uU][rR][fF][aA][cC][eE].*",
                ),
                PoolSpec::new(100, 3.0, r".*[Tt][Aa][Xx][Ii].*"),
                // long random strings
                PoolSpec::new(300, 20.0, r".*.*.*"),
                // short random strings
                PoolSpec::new(500, 20.0, r".*"),
            ],
        }
    }
}
