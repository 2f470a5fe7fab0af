//! Word lists for memorable passwords.
//!
//! A [`Vocabulary`] is the validated, shared word pool a generator samples
//! from. Where the words come from is abstracted behind [`WordSource`]:
//! - [`SystemDictionary`] — newline-delimited dictionary file on disk (the default)
//! - [`EmbeddedWordList`] — English list compiled into the binary, used when
//!   the host has no dictionary

pub mod wordlist;

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rand::{Rng, RngCore};

use crate::error::GeneratorError;

pub use wordlist::EmbeddedWordList;

/// Conventional location of the system dictionary on Unix-like hosts.
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

// ── Word sources ───────────────────────────────────────────────────

/// Supplies the candidate words for a [`Vocabulary`].
pub trait WordSource {
    /// Return the words in their source order.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::WordList`] if the words cannot be read.
    fn words(&self) -> Result<Vec<String>, GeneratorError>;
}

/// Reads a newline-delimited dictionary file, one word per line.
///
/// Lines are trimmed and blank lines skipped.
#[derive(Debug, Clone)]
pub struct SystemDictionary {
    path: PathBuf,
}

impl SystemDictionary {
    /// Read words from `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file this source reads.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for SystemDictionary {
    fn default() -> Self {
        Self::new(DEFAULT_DICTIONARY_PATH)
    }
}

impl WordSource for SystemDictionary {
    fn words(&self) -> Result<Vec<String>, GeneratorError> {
        let raw = fs::read_to_string(&self.path).map_err(|e| {
            GeneratorError::WordList(format!("cannot read {}: {e}", self.path.display()))
        })?;
        let words: Vec<String> = raw
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(String::from)
            .collect();
        tracing::debug!(path = %self.path.display(), count = words.len(), "dictionary loaded");
        Ok(words)
    }
}

// ── Vocabulary ─────────────────────────────────────────────────────

/// A non-empty, read-only word pool.
///
/// Cloning is cheap: clones share the same underlying list.
#[derive(Clone, PartialEq, Eq)]
pub struct Vocabulary {
    words: Arc<[String]>,
}

impl Vocabulary {
    /// Build a vocabulary from explicit words, preserving order.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyVocabulary`] if `words` yields nothing.
    pub fn new<I, S>(words: I) -> Result<Self, GeneratorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let words: Arc<[String]> = words.into_iter().map(Into::into).collect();
        if words.is_empty() {
            return Err(GeneratorError::EmptyVocabulary);
        }
        Ok(Self { words })
    }

    /// Fetch words from `source` and validate them.
    ///
    /// # Errors
    ///
    /// Propagates source failures, and returns
    /// [`GeneratorError::EmptyVocabulary`] if the source supplied no words.
    pub fn load(source: &dyn WordSource) -> Result<Self, GeneratorError> {
        Self::new(source.words()?)
    }

    /// Load from `primary`, or from `fallback` if `primary` fails or is empty.
    ///
    /// # Errors
    ///
    /// Returns the fallback's error when both sources fail.
    pub fn load_or_fallback(
        primary: &dyn WordSource,
        fallback: &dyn WordSource,
    ) -> Result<Self, GeneratorError> {
        Self::load(primary).or_else(|e| {
            tracing::debug!(error = %e, "primary word list unavailable, using fallback");
            Self::load(fallback)
        })
    }

    /// The default pool: the system dictionary at [`DEFAULT_DICTIONARY_PATH`],
    /// or the embedded English list when the host has none.
    ///
    /// # Errors
    ///
    /// Only fails if the embedded list is empty.
    pub fn system_default() -> Result<Self, GeneratorError> {
        Self::load_or_fallback(&SystemDictionary::default(), &EmbeddedWordList)
    }

    /// Number of words (never zero).
    #[allow(clippy::len_without_is_empty)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// The words in source order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Whether `word` is in the pool (exact match).
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    /// Draw one word uniformly at random.
    pub fn sample(&self, rng: &mut dyn RngCore) -> &str {
        &self.words[rng.gen_range(0..self.words.len())]
    }
}

impl std::fmt::Debug for Vocabulary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vocabulary")
            .field("len", &self.words.len())
            .finish()
    }
}
