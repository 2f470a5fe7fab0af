//! Random character passwords.

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::alphabet::Alphabet;
use crate::generator::PasswordGenerator;

/// Default random password length.
pub const DEFAULT_PASSWORD_LENGTH: usize = 8;

/// Which characters a random password may contain. Letters are always included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RandomOptions {
    /// Number of characters (default: 8).
    #[serde(default = "default_length")]
    pub length: usize,
    /// Append the decimal digits to the pool.
    #[serde(default)]
    pub include_numbers: bool,
    /// Append ASCII punctuation to the pool.
    #[serde(default)]
    pub include_symbols: bool,
}

const fn default_length() -> usize {
    DEFAULT_PASSWORD_LENGTH
}

impl Default for RandomOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_PASSWORD_LENGTH,
            include_numbers: false,
            include_symbols: false,
        }
    }
}

/// Generates fixed-length strings drawn uniformly from an [`Alphabet`].
#[derive(Debug, Clone)]
pub struct RandomPasswordGenerator {
    length: usize,
    alphabet: Alphabet,
}

impl RandomPasswordGenerator {
    /// Build the alphabet once from `options`.
    #[must_use]
    pub fn new(options: &RandomOptions) -> Self {
        let alphabet = Alphabet::from_flags(options.include_numbers, options.include_symbols);
        Self::with_alphabet(options.length, alphabet)
    }

    /// Use a caller-supplied character pool.
    #[must_use]
    pub fn with_alphabet(length: usize, alphabet: Alphabet) -> Self {
        tracing::debug!(length, pool = alphabet.len(), "random generator configured");
        Self { length, alphabet }
    }

    /// Number of characters per password.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// The pool characters are drawn from.
    #[must_use]
    pub const fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl Default for RandomPasswordGenerator {
    fn default() -> Self {
        Self::new(&RandomOptions::default())
    }
}

impl PasswordGenerator for RandomPasswordGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        self.alphabet.sample_string(self.length, rng)
    }
}
