//! Error types for `passforge-core`.

use thiserror::Error;

/// Errors produced while configuring a password generator.
///
/// Generation itself never fails: every precondition is checked when a
/// generator is constructed.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A character-based generator was given no characters to draw from.
    #[error("alphabet must contain at least one character")]
    EmptyAlphabet,

    /// A word-based generator was given no words to draw from.
    #[error("vocabulary must contain at least one word")]
    EmptyVocabulary,

    /// The word-list provider could not supply its words (missing file, bad encoding).
    #[error("word list error: {0}")]
    WordList(String),

    /// A serialized generator configuration could not be parsed.
    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),
}
