//! Pool construction.
//!
//! Each [`PoolSpec`] becomes a [`Pool`]: a fixed set of strings generated up
//! front, tagged with the upper bound of its range on the `[0, 1]` selection
//! line. The ranges are laid out in declaration order, so a pool's range is
//! `(previous threshold, own threshold]`.

use crate::error::GeneratorError;
use crate::generators::PatternGenerator;
use rand::Rng;
use std::ops::Index;
use textgen_core::config::{total_frequency, validate_pools};
use textgen_core::PoolSpec;
use tracing::{debug, info, warn};

/// A pool of pre-generated strings sharing one pattern.
#[derive(Debug, Clone, PartialEq)]
pub struct Pool {
    pub(crate) pattern: String,
    pub(crate) cumulative_threshold: f64,
    pub(crate) strings: Vec<String>,
}

impl Pool {
    /// Pattern the strings were generated from.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Upper bound of this pool's range on the selection line.
    pub fn cumulative_threshold(&self) -> f64 {
        self.cumulative_threshold
    }

    /// Pre-generated strings, in generation order.
    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

/// Ordered pools with non-decreasing thresholds ending at exactly 1.
///
/// Only [`PoolBuilder`] constructs this type, which keeps the coverage
/// post-condition in one place.
#[derive(Debug, Clone, PartialEq)]
pub struct Pools {
    pub(crate) pools: Vec<Pool>,
}

impl Pools {
    pub fn len(&self) -> usize {
        self.pools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pools.is_empty()
    }

    /// Threshold of the last pool. Always `Some(1.0)` for built pools.
    pub fn final_threshold(&self) -> Option<f64> {
        self.pools.last().map(|pool| pool.cumulative_threshold)
    }

    /// Cumulative thresholds in declaration order.
    pub fn thresholds(&self) -> Vec<f64> {
        self.pools
            .iter()
            .map(|pool| pool.cumulative_threshold)
            .collect()
    }

    /// Total number of pre-generated strings across all pools.
    pub fn total_strings(&self) -> usize {
        self.pools.iter().map(Pool::len).sum()
    }
}

impl Index<usize> for Pools {
    type Output = Pool;

    fn index(&self, index: usize) -> &Pool {
        &self.pools[index]
    }
}

/// Builds [`Pools`] from pool specifications using a [`PatternGenerator`].
pub struct PoolBuilder<G> {
    generator: G,
}

impl<G: PatternGenerator> PoolBuilder<G> {
    /// Create a builder around the given pattern generator.
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    /// Get a reference to the pattern generator.
    pub fn generator(&self) -> &G {
        &self.generator
    }

    /// Materialize every pool and assign cumulative thresholds.
    ///
    /// Fails before generating anything if the specs are invalid (no pools,
    /// zero `unique_count`, negative frequency, or a total frequency that is
    /// not positive). The last pool with a non-zero frequency, and every pool
    /// after it, gets a threshold of exactly `1.0`, so every draw in `[0, 1)`
    /// maps to a reachable pool.
    pub fn build<R: Rng>(
        &mut self,
        specs: &[PoolSpec],
        rng: &mut R,
    ) -> Result<Pools, GeneratorError> {
        validate_pools(specs)?;

        let frequency_norm = total_frequency(specs);
        let mut cumulative_frequency = 0.0;
        let mut pools = Vec::with_capacity(specs.len());

        for (index, spec) in specs.iter().enumerate() {
            cumulative_frequency += spec.frequency / frequency_norm;

            if spec.frequency == 0.0 {
                warn!(
                    "Pool {} (/{}/) has frequency 0 and will never be sampled",
                    index, spec.pattern
                );
            }

            info!(
                "Creating {} random strings for /{}/...",
                spec.unique_count, spec.pattern
            );

            let strings = (0..spec.unique_count)
                .map(|_| self.generator.generate(&spec.pattern, rng))
                .collect::<Result<Vec<_>, _>>()
                .map_err(|source| GeneratorError::Pattern { index, source })?;

            debug!(
                "Pool {}: {} strings, cumulative threshold {}",
                index,
                strings.len(),
                cumulative_frequency
            );

            pools.push(Pool {
                pattern: spec.pattern.clone(),
                cumulative_threshold: cumulative_frequency.min(1.0),
                strings,
            });
        }

        // The last reachable pool and any zero-frequency pools after it end at exactly 1.
        if let Some(last_reachable) = specs.iter().rposition(|spec| spec.frequency > 0.0) {
            for pool in &mut pools[last_reachable..] {
                if pool.cumulative_threshold != 1.0 {
                    debug!(
                        "Clamping cumulative threshold {} to 1",
                        pool.cumulative_threshold
                    );
                }
                pool.cumulative_threshold = 1.0;
            }
        }

        Ok(Pools { pools })
    }
}
