//! Numeric PIN codes.

use rand::RngCore;

use crate::alphabet::Alphabet;
use crate::generator::PasswordGenerator;

/// Default PIN length.
pub const DEFAULT_PIN_LENGTH: usize = 4;

/// Generates fixed-length strings of decimal digits.
#[derive(Debug, Clone)]
pub struct PinGenerator {
    length: usize,
    digits: Alphabet,
}

impl PinGenerator {
    /// A generator producing PINs of exactly `length` digits.
    #[must_use]
    pub fn new(length: usize) -> Self {
        tracing::debug!(length, "PIN generator configured");
        Self {
            length,
            digits: Alphabet::digits(),
        }
    }

    /// Number of digits per PIN.
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }
}

impl Default for PinGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_PIN_LENGTH)
    }
}

impl PasswordGenerator for PinGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        self.digits.sample_string(self.length, rng)
    }
}
