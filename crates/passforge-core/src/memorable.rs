//! Word-based passphrases.

use rand::{Rng, RngCore};
use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use crate::generator::PasswordGenerator;
use crate::vocabulary::{Vocabulary, WordSource};

/// Default number of words per passphrase.
pub const DEFAULT_WORD_COUNT: usize = 4;

/// Default separator between words.
pub const DEFAULT_SEPARATOR: &str = "-";

/// Shape of a memorable password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemorableOptions {
    /// Number of words (default: 4).
    #[serde(default = "default_word_count")]
    pub num_of_words: usize,
    /// Inserted between words (default: `"-"`).
    #[serde(default = "default_separator")]
    pub separator: String,
    /// Render each word fully upper- or lowercase at random.
    #[serde(default)]
    pub capitalize: bool,
}

const fn default_word_count() -> usize {
    DEFAULT_WORD_COUNT
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.into()
}

impl Default for MemorableOptions {
    fn default() -> Self {
        Self {
            num_of_words: DEFAULT_WORD_COUNT,
            separator: default_separator(),
            capitalize: false,
        }
    }
}

/// Joins words sampled from a [`Vocabulary`] with a separator.
#[derive(Debug, Clone)]
pub struct MemorablePasswordGenerator {
    options: MemorableOptions,
    vocabulary: Vocabulary,
}

impl MemorablePasswordGenerator {
    /// Create a generator over `vocabulary`, or [`Vocabulary::system_default`] when `None`.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyVocabulary`] if no default list is available.
    pub fn new(
        options: MemorableOptions,
        vocabulary: Option<Vocabulary>,
    ) -> Result<Self, GeneratorError> {
        let vocabulary = match vocabulary {
            Some(v) => v,
            None => Vocabulary::system_default()?,
        };
        Ok(Self::with_vocabulary(options, vocabulary))
    }

    /// Create a generator whose words come from `source`.
    ///
    /// # Errors
    ///
    /// Propagates the source's error, or [`GeneratorError::EmptyVocabulary`]
    /// if it supplied no words.
    pub fn from_source(
        options: MemorableOptions,
        source: &dyn WordSource,
    ) -> Result<Self, GeneratorError> {
        Ok(Self::with_vocabulary(options, Vocabulary::load(source)?))
    }

    fn with_vocabulary(options: MemorableOptions, vocabulary: Vocabulary) -> Self {
        tracing::debug!(
            words = options.num_of_words,
            capitalize = options.capitalize,
            vocabulary = vocabulary.len(),
            "memorable generator configured"
        );
        Self {
            options,
            vocabulary,
        }
    }

    /// The configured shape.
    #[must_use]
    pub const fn options(&self) -> &MemorableOptions {
        &self.options
    }

    /// The word pool.
    #[must_use]
    pub const fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }
}

impl PasswordGenerator for MemorablePasswordGenerator {
    fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        let words: Vec<String> = (0..self.options.num_of_words)
            .map(|_| {
                let word = self.vocabulary.sample(rng);
                if !self.options.capitalize {
                    word.to_string()
                } else if rng.gen_bool(0.5) {
                    word.to_uppercase()
                } else {
                    word.to_lowercase()
                }
            })
            .collect();
        words.join(&self.options.separator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn fruit() -> Vocabulary {
        Vocabulary::new(["apple", "tree", "river"]).unwrap()
    }

    fn options(num_of_words: usize, separator: &str, capitalize: bool) -> MemorableOptions {
        MemorableOptions {
            num_of_words,
            separator: separator.to_string(),
            capitalize,
        }
    }

    #[test]
    fn three_words_from_vocabulary() {
        let generator =
            MemorablePasswordGenerator::new(options(3, "-", false), Some(fruit())).unwrap();
        let pw = generator.generate();
        let tokens: Vec<&str> = pw.split('-').collect();
        assert_eq!(tokens.len(), 3, "wrong token count in: {pw}");
        for token in tokens {
            assert!(fruit().contains(token), "'{token}' not in vocabulary");
        }
    }

    #[test]
    fn absent_vocabulary_uses_system_default() {
        let generator = MemorablePasswordGenerator::new(options(4, "\t", false), None).unwrap();
        assert_eq!(
            generator.vocabulary().len(),
            Vocabulary::system_default().unwrap().len()
        );
        let pw = generator.generate();
        let tokens: Vec<&str> = pw.split('\t').collect();
        assert_eq!(tokens.len(), DEFAULT_WORD_COUNT);
        for token in tokens {
            assert!(generator.vocabulary().contains(token), "'{token}' not in default list");
        }
    }

    #[test]
    fn zero_words_is_empty() {
        let generator =
            MemorablePasswordGenerator::new(options(0, "-", true), Some(fruit())).unwrap();
        assert_eq!(generator.generate(), "");
    }

    #[test]
    fn multi_char_separator() {
        let generator =
            MemorablePasswordGenerator::new(options(5, " :: ", false), Some(fruit())).unwrap();
        assert_eq!(generator.generate().split(" :: ").count(), 5);
    }

    #[test]
    fn empty_separator_concatenates() {
        let vocabulary = Vocabulary::new(["ab"]).unwrap();
        let generator =
            MemorablePasswordGenerator::new(options(3, "", false), Some(vocabulary)).unwrap();
        assert_eq!(generator.generate(), "ababab");
    }

    #[test]
    fn without_capitalize_words_are_verbatim() {
        let vocabulary = Vocabulary::new(["MiXeD"]).unwrap();
        let generator =
            MemorablePasswordGenerator::new(options(2, "-", false), Some(vocabulary)).unwrap();
        assert_eq!(generator.generate(), "MiXeD-MiXeD");
    }

    #[test]
    fn capitalize_folds_every_word() {
        let vocabulary = Vocabulary::new(["MiXeD"]).unwrap();
        let generator =
            MemorablePasswordGenerator::new(options(64, "-", true), Some(vocabulary)).unwrap();
        let pw = generator.generate_with(&mut StdRng::seed_from_u64(11));
        let mut saw_upper = false;
        let mut saw_lower = false;
        for token in pw.split('-') {
            match token {
                "MIXED" => saw_upper = true,
                "mixed" => saw_lower = true,
                other => panic!("word left in mixed case: {other}"),
            }
        }
        assert!(saw_upper && saw_lower, "64 coin flips all landed the same way");
    }

    #[test]
    fn empty_source_rejected() {
        struct Nothing;
        impl WordSource for Nothing {
            fn words(&self) -> Result<Vec<String>, GeneratorError> {
                Ok(Vec::new())
            }
        }
        let result =
            MemorablePasswordGenerator::from_source(MemorableOptions::default(), &Nothing);
        assert!(matches!(result, Err(GeneratorError::EmptyVocabulary)));
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: MemorableOptions = serde_json::from_str(r#"{"capitalize": true}"#).unwrap();
        assert_eq!(options.num_of_words, DEFAULT_WORD_COUNT);
        assert_eq!(options.separator, DEFAULT_SEPARATOR);
        assert!(options.capitalize);
    }
}
