//! Pattern-to-string generators.
//!
//! Pool construction only needs one capability: given a pattern, produce one
//! string that matches it. [`PatternGenerator`] is that seam; the pool builder
//! does not care how patterns are interpreted.

pub mod literal;
pub mod regex;

pub use literal::LiteralPatternGenerator;
pub use regex::RegexPatternGenerator;

use rand::Rng;
use textgen_core::PatternSyntax;

/// Error produced when a pattern cannot be turned into strings.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    /// The pattern is not a usable regular expression
    #[error("Invalid pattern '{pattern}': {source}")]
    InvalidRegex {
        pattern: String,
        #[source]
        source: rand_regex::Error,
    },
}

/// Trait for generating strings from patterns.
pub trait PatternGenerator {
    /// Generate one string matching `pattern` using the given RNG.
    ///
    /// Successive calls are independent; no uniqueness across calls is promised.
    fn generate<R: Rng>(&mut self, pattern: &str, rng: &mut R) -> Result<String, PatternError>;
}

/// Generator selected by the configured [`PatternSyntax`].
#[derive(Debug)]
pub enum SyntaxPatternGenerator {
    Regex(RegexPatternGenerator),
    Literal(LiteralPatternGenerator),
}

impl SyntaxPatternGenerator {
    /// Create the generator for `syntax`.
    ///
    /// `max_repeat` caps unbounded repetitions and is ignored for literals.
    pub fn new(syntax: PatternSyntax, max_repeat: u32) -> Self {
        match syntax {
            PatternSyntax::Regex => Self::Regex(RegexPatternGenerator::new(max_repeat)),
            PatternSyntax::Literal => Self::Literal(LiteralPatternGenerator),
        }
    }
}

impl PatternGenerator for SyntaxPatternGenerator {
    fn generate<R: Rng>(&mut self, pattern: &str, rng: &mut R) -> Result<String, PatternError> {
        match self {
            Self::Regex(generator) => generator.generate(pattern, rng),
            Self::Literal(generator) => generator.generate(pattern, rng),
        }
    }
}
