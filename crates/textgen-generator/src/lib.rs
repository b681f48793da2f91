//! Weighted multi-pool text generator for textgen.
//!
//! This crate turns a list of [`PoolSpec`](textgen_core::PoolSpec)s into a
//! [`Dataset`] of text rows. Every pool is materialized once, then rows are
//! drawn from the pools in proportion to their configured frequencies until
//! the row or byte budget is reached.
//!
//! # Architecture
//!
//! ```text
//! Vec<PoolSpec>
//!        │
//!        ▼
//! ┌─────────────────┐      ┌──────────────────┐
//! │   PoolBuilder   │◄─────│ PatternGenerator │
//! └────────┬────────┘      └──────────────────┘
//!          │ Pools
//!          ▼
//! ┌─────────────────┐      ┌──────────────────┐
//! │DatasetAssembler │─────►│ WeightedSampler  │
//! └────────┬────────┘      └──────────────────┘
//!          │
//!          ▼
//!    Dataset { rows, byte_total }
//! ```
//!
//! # Example
//!
//! ```rust
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//! use textgen_core::{Budgets, PoolSpec};
//! use textgen_generator::{DatasetAssembler, LiteralPatternGenerator, NoProgress, PoolBuilder};
//!
//! let specs = vec![PoolSpec::new(2, 1.0, "A"), PoolSpec::new(2, 3.0, "B")];
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! let pools = PoolBuilder::new(LiteralPatternGenerator)
//!     .build(&specs, &mut rng)
//!     .unwrap();
//! let assembler = DatasetAssembler::new(Budgets::new(10, 1_000_000).unwrap());
//! let dataset = assembler.assemble(&pools, &mut rng, &mut NoProgress).unwrap();
//!
//! assert_eq!(dataset.len(), 10);
//! ```

pub mod assembler;
pub mod error;
pub mod generators;
pub mod pool;
pub mod sampler;

// Re-exports for convenience
pub use assembler::{
    Dataset, DatasetAssembler, NoProgress, Progress, ProgressObserver, TracingProgress,
    DEFAULT_PROGRESS_INTERVAL,
};
pub use error::{GeneratorError, SamplingError};
pub use generators::{
    LiteralPatternGenerator, PatternError, PatternGenerator, RegexPatternGenerator,
    SyntaxPatternGenerator,
};
pub use pool::{Pool, PoolBuilder, Pools};
pub use sampler::WeightedSampler;
