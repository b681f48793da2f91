//! Weighted pool selection.

use crate::error::SamplingError;
use crate::pool::Pools;
use rand::Rng;

/// Picks strings from [`Pools`] according to their cumulative thresholds.
///
/// A draw in `[0, 1)` selects the first pool whose threshold is `>=` the
/// draw. When thresholds tie (a zero-frequency pool sitting after another
/// pool), the earlier pool wins, so zero-frequency pools are never selected.
#[derive(Debug, Clone, Copy)]
pub struct WeightedSampler<'a> {
    pools: &'a Pools,
}

impl<'a> WeightedSampler<'a> {
    /// Create a sampler over `pools`.
    ///
    /// Fails if there are no pools or the final threshold does not reach 1.
    pub fn new(pools: &'a Pools) -> Result<Self, SamplingError> {
        match pools.final_threshold() {
            None => Err(SamplingError::EmptyPools),
            Some(final_threshold) if final_threshold < 1.0 => {
                Err(SamplingError::IncompleteCoverage { final_threshold })
            }
            Some(_) => Ok(Self { pools }),
        }
    }

    /// Index of the pool selected by `draw`.
    pub fn select_pool(&self, draw: f64) -> Result<usize, SamplingError> {
        if !(0.0..1.0).contains(&draw) {
            return Err(SamplingError::DrawOutOfRange(draw));
        }

        // Thresholds never decrease, so this finds the first pool with
        // threshold >= draw. Leading pools with threshold 0 have an empty
        // range and are skipped even for a draw of exactly 0.
        let index = self.pools.pools.partition_point(|pool| {
            pool.cumulative_threshold < draw || pool.cumulative_threshold == 0.0
        });

        if index == self.pools.len() {
            return Err(SamplingError::CoverageGap {
                draw,
                final_threshold: self.pools.final_threshold().unwrap_or(0.0),
            });
        }

        Ok(index)
    }

    /// Select a pool with `draw`, then return one of its strings uniformly at random.
    pub fn sample<R: Rng>(&self, draw: f64, rng: &mut R) -> Result<&'a str, SamplingError> {
        let index = self.select_pool(draw)?;
        let pools: &'a Pools = self.pools;
        let pool = &pools.pools[index];

        if pool.strings.is_empty() {
            return Err(SamplingError::EmptyPool { index });
        }

        let choice = rng.random_range(0..pool.strings.len());
        Ok(&pool.strings[choice])
    }
}
