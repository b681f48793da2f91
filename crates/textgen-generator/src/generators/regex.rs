//! Regular-expression pattern generator.
//!
//! Produces random strings matching a regular expression. Repetitions without
//! an upper bound (`*`, `+`, `{n,}`) are capped at `max_repeat` extra
//! iterations.

use super::{PatternError, PatternGenerator};
use rand::Rng;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Generator for random strings matching a regular expression.
///
/// Each distinct pattern is compiled once and cached, so generating many
/// strings for the same pool does not re-parse the expression.
#[derive(Debug)]
pub struct RegexPatternGenerator {
    max_repeat: u32,
    compiled: HashMap<String, rand_regex::Regex>,
}

impl RegexPatternGenerator {
    /// Create a generator capping unbounded repetitions at `max_repeat`.
    pub fn new(max_repeat: u32) -> Self {
        Self {
            max_repeat,
            compiled: HashMap::new(),
        }
    }

    fn compiled(&mut self, pattern: &str) -> Result<&rand_regex::Regex, PatternError> {
        match self.compiled.entry(pattern.to_string()) {
            Entry::Occupied(entry) => Ok(entry.into_mut()),
            Entry::Vacant(entry) => {
                let regex = rand_regex::Regex::compile(pattern, self.max_repeat).map_err(
                    |source| PatternError::InvalidRegex {
                        pattern: pattern.to_string(),
                        source,
                    },
                )?;
                Ok(entry.insert(regex))
            }
        }
    }
}

impl PatternGenerator for RegexPatternGenerator {
    fn generate<R: Rng>(&mut self, pattern: &str, rng: &mut R) -> Result<String, PatternError> {
        let regex = self.compiled(pattern)?;
        Ok(rng.sample::<String, _>(regex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_character_classes() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut generator = RegexPatternGenerator::new(100);

        for _ in 0..50 {
            let value = generator.generate("[0-9]{4}-[A-F]{2}", &mut rng).unwrap();
            assert_eq!(value.len(), 7);
            assert!(value[..4].chars().all(|c| c.is_ascii_digit()));
            assert_eq!(&value[4..5], "-");
            assert!(value[5..].chars().all(|c| ('A'..='F').contains(&c)));
        }
    }

    #[test]
    fn test_generate_contains_keyword() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut generator = RegexPatternGenerator::new(20);

        for _ in 0..50 {
            let value = generator.generate(".*[Tt][Aa][Xx][Ii].*", &mut rng).unwrap();
            assert!(value.to_lowercase().contains("taxi"), "{value:?}");
        }
    }

    #[test]
    fn test_max_repeat_bounds_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut generator = RegexPatternGenerator::new(5);

        for _ in 0..100 {
            let value = generator.generate("a*", &mut rng).unwrap();
            assert!(value.len() <= 5, "{value:?}");
            assert!(value.chars().all(|c| c == 'a'));
        }
    }

    #[test]
    fn test_invalid_pattern() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut generator = RegexPatternGenerator::new(10);

        let result = generator.generate("[unclosed", &mut rng);
        assert!(matches!(
            result,
            Err(PatternError::InvalidRegex { ref pattern, .. }) if pattern == "[unclosed"
        ));
    }

    #[test]
    fn test_compiled_once_per_pattern() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut generator = RegexPatternGenerator::new(10);

        generator.generate("[a-z]", &mut rng).unwrap();
        generator.generate("[a-z]", &mut rng).unwrap();
        generator.generate("[0-9]", &mut rng).unwrap();

        assert_eq!(generator.compiled.len(), 2);
    }

    #[test]
    fn test_deterministic_for_seed() {
        let mut gen1 = RegexPatternGenerator::new(30);
        let mut gen2 = RegexPatternGenerator::new(30);
        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);

        for _ in 0..10 {
            assert_eq!(
                gen1.generate(".*", &mut rng1).unwrap(),
                gen2.generate(".*", &mut rng2).unwrap()
            );
        }
    }
}
