//! Core types for the textgen dataset generator.
//!
//! This crate provides the configuration model shared by the other textgen
//! crates:
//!
//! - [`PoolSpec`] - One pool of pre-generated strings and its relative frequency
//! - [`Budgets`] - Row and byte limits that stop dataset assembly
//! - [`GenerationConfig`] - Full configuration loaded from YAML
//!
//! # Architecture
//!
//! ```text
//! textgen-core (this crate)
//!    │
//!    ├─── textgen-generator  (builds pools, samples and assembles datasets)
//!    │
//!    └─── textgen-arrow      (writes datasets as Arrow IPC files)
//! ```
//!
//! # Example
//!
//! ```rust
//! use textgen_core::GenerationConfig;
//!
//! let config = GenerationConfig::from_yaml(r#"
//! seed: 42
//! budgets:
//!   max_rows: 1000
//!   max_bytes: 65536
//! pools:
//!   - unique_count: 10
//!     frequency: 1
//!     pattern: "[a-z]{8}"
//! "#).unwrap();
//!
//! config.validate().unwrap();
//! assert_eq!(config.pools.len(), 1);
//! ```

pub mod config;

// Re-exports for convenience
pub use config::{
    Budgets, ConfigError, GenerationConfig, PatternSyntax, PoolSpec, DEFAULT_MAX_BYTES,
    DEFAULT_MAX_REPEAT, DEFAULT_MAX_ROWS,
};
