//! The capability shared by every password strategy.

use std::fmt::Debug;

use rand::rngs::OsRng;
use rand::RngCore;

/// A configured password strategy.
///
/// Implementors hold only immutable configuration, so a single generator can
/// be shared across threads and called concurrently.
pub trait PasswordGenerator: Send + Sync + Debug {
    /// Generate a password drawing all randomness from `rng`.
    ///
    /// Passing a seeded generator makes the output reproducible.
    fn generate_with(&self, rng: &mut dyn RngCore) -> String;

    /// Generate a password from the operating system's randomness source.
    fn generate(&self) -> String {
        self.generate_with(&mut OsRng)
    }
}
