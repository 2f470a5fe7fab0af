//! `passforge-core` — password generation strategies for PASSFORGE.
//!
//! Three interchangeable generators share the [`PasswordGenerator`] capability:
//! - [`PinGenerator`] — fixed-length numeric PINs
//! - [`RandomPasswordGenerator`] — fixed-length strings from an [`Alphabet`]
//! - [`MemorablePasswordGenerator`] — separator-joined words from a [`Vocabulary`]
//!
//! Configuration is fixed at construction; generation is infallible and takes
//! an injectable randomness source.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;
pub mod generator;

pub mod alphabet;
pub mod pin;
pub mod random;

pub mod memorable;
pub mod vocabulary;

pub mod config;

pub use alphabet::Alphabet;
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use generator::PasswordGenerator;
pub use memorable::{MemorableOptions, MemorablePasswordGenerator, DEFAULT_WORD_COUNT};
pub use pin::{PinGenerator, DEFAULT_PIN_LENGTH};
pub use random::{RandomOptions, RandomPasswordGenerator, DEFAULT_PASSWORD_LENGTH};
pub use vocabulary::{EmbeddedWordList, SystemDictionary, Vocabulary, WordSource};
