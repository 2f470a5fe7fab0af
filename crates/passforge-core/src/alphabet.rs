//! Character pools for character-based generators.

use std::fmt;

use rand::{Rng, RngCore};

use crate::error::GeneratorError;

/// ASCII letters, lowercase first.
pub const ASCII_LETTERS: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Decimal digits.
pub const DIGITS: &str = "0123456789";

/// The 32 ASCII punctuation characters, in code-point order.
pub const PUNCTUATION: &str = r##"!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~"##;

/// An immutable, non-empty pool of characters sampled uniformly with replacement.
///
/// Duplicate characters are kept and weight the draw accordingly.
#[derive(Clone, PartialEq, Eq)]
pub struct Alphabet {
    chars: Box<[char]>,
}

impl Alphabet {
    /// Build an alphabet from an arbitrary set of characters.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyAlphabet`] if `chars` is empty.
    pub fn new(chars: impl AsRef<str>) -> Result<Self, GeneratorError> {
        let chars: Box<[char]> = chars.as_ref().chars().collect();
        if chars.is_empty() {
            return Err(GeneratorError::EmptyAlphabet);
        }
        Ok(Self { chars })
    }

    /// Letters, then digits if `include_numbers`, then punctuation if `include_symbols`.
    #[must_use]
    pub fn from_flags(include_numbers: bool, include_symbols: bool) -> Self {
        let mut pool = String::from(ASCII_LETTERS);
        if include_numbers {
            pool.push_str(DIGITS);
        }
        if include_symbols {
            pool.push_str(PUNCTUATION);
        }
        Self {
            chars: pool.chars().collect(),
        }
    }

    /// The decimal digits `0`-`9`.
    #[must_use]
    pub fn digits() -> Self {
        Self {
            chars: DIGITS.chars().collect(),
        }
    }

    /// Number of characters in the pool (never zero).
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// The characters in pool order.
    #[must_use]
    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Whether `c` can appear in a password drawn from this alphabet.
    #[must_use]
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Draw one character uniformly at random.
    pub fn sample(&self, rng: &mut dyn RngCore) -> char {
        self.chars[rng.gen_range(0..self.chars.len())]
    }

    /// Draw `count` characters independently into a new string.
    pub fn sample_string(&self, count: usize, rng: &mut dyn RngCore) -> String {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("len", &self.chars.len())
            .finish()
    }
}
