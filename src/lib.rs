//! textgen library
//!
//! Generates synthetic text datasets for exercising data-processing
//! pipelines. Strings are drawn from weighted pools of pre-generated values
//! until a row or byte budget is reached, then written as a single-column
//! Arrow IPC record batch file.
//!
//! # Crates
//!
//! - `textgen_core` - Configuration model (pools, budgets, YAML loading)
//! - `textgen_generator` - Pool building, weighted sampling, dataset assembly
//! - `textgen_arrow` - Arrow IPC writer and reader
//!
//! # CLI Usage
//!
//! ```bash
//! # Generate the built-in workload into input.rb
//! textgen generate
//!
//! # Generate from a config file with a smaller row budget
//! textgen generate --config pools.yaml --max-rows 100000 --output small.rb
//!
//! # Inspect a generated file
//! textgen inspect small.rb
//! ```

pub mod commands;

// Re-export workspace crates for convenience
pub use textgen_arrow as arrow;
pub use textgen_core as config;
pub use textgen_generator as generator;
