//! Literal pattern generator.

use super::{PatternError, PatternGenerator};
use rand::Rng;

/// Generator that returns the pattern itself.
///
/// Useful for fixtures where every pool holds one known string.
#[derive(Debug, Clone, Copy, Default)]
pub struct LiteralPatternGenerator;

impl PatternGenerator for LiteralPatternGenerator {
    fn generate<R: Rng>(&mut self, pattern: &str, _rng: &mut R) -> Result<String, PatternError> {
        Ok(pattern.to_string())
    }
}
