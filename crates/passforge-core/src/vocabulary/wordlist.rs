//! Embedded English wordlist.
//!
//! The list is compiled in via `include_str!` and parsed once on first access
//! using `OnceLock`.

use std::sync::OnceLock;

use super::WordSource;
use crate::error::GeneratorError;

/// Number of words in the embedded list.
pub const EMBEDDED_WORDLIST_SIZE: usize = 442;

const ENGLISH_RAW: &str = include_str!("wordlists/english.txt");

static ENGLISH_LOCK: OnceLock<Box<[&'static str]>> = OnceLock::new();

/// Returns the parsed embedded wordlist.
///
/// # Panics
///
/// Panics if the embedded list does not contain exactly
/// [`EMBEDDED_WORDLIST_SIZE`] words.
#[must_use]
pub fn english() -> &'static [&'static str] {
    ENGLISH_LOCK.get_or_init(|| {
        let words: Vec<&'static str> = ENGLISH_RAW.lines().filter(|l| !l.is_empty()).collect();
        assert!(
            words.len() == EMBEDDED_WORDLIST_SIZE,
            "embedded wordlist must contain exactly {EMBEDDED_WORDLIST_SIZE} words, got {}",
            words.len()
        );
        words.into_boxed_slice()
    })
}

/// [`WordSource`] backed by the compiled-in English list. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmbeddedWordList;

impl WordSource for EmbeddedWordList {
    fn words(&self) -> Result<Vec<String>, GeneratorError> {
        Ok(english().iter().map(|w| (*w).to_string()).collect())
    }
}
