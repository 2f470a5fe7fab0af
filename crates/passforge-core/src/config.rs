//! Serializable generator selection.
//!
//! A [`GeneratorConfig`] names one strategy plus its parameters, so callers
//! can keep generator choices in JSON and build them at runtime:
//!
//! ```json
//! { "kind": "memorable", "numOfWords": 3, "separator": ".", "capitalize": true }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::GeneratorError;
use crate::generator::PasswordGenerator;
use crate::memorable::{MemorableOptions, MemorablePasswordGenerator};
use crate::pin::{PinGenerator, DEFAULT_PIN_LENGTH};
use crate::random::{RandomOptions, RandomPasswordGenerator};
use crate::vocabulary::Vocabulary;

/// One generator strategy and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum GeneratorConfig {
    /// Numeric PIN.
    Pin {
        /// Number of digits (default: 4).
        #[serde(default = "default_pin_length")]
        length: usize,
    },
    /// Random characters.
    Random(RandomOptions),
    /// Separator-joined words.
    Memorable {
        /// Word count, separator and capitalization.
        #[serde(flatten)]
        options: MemorableOptions,
        /// Explicit word pool; the system default vocabulary when absent.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        vocabulary: Option<Vec<String>>,
    },
}

const fn default_pin_length() -> usize {
    DEFAULT_PIN_LENGTH
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::Random(RandomOptions::default())
    }
}

impl GeneratorConfig {
    /// Parse a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] for malformed JSON, an unknown
    /// `kind`, or a count that is negative or not an integer.
    pub fn from_json(json: &str) -> Result<Self, GeneratorError> {
        serde_json::from_str(json).map_err(|e| GeneratorError::InvalidConfig(e.to_string()))
    }

    /// Serialize this configuration to JSON.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::InvalidConfig`] if serialization fails.
    pub fn to_json(&self) -> Result<String, GeneratorError> {
        serde_json::to_string(self).map_err(|e| GeneratorError::InvalidConfig(e.to_string()))
    }

    /// Construct the configured generator.
    ///
    /// # Errors
    ///
    /// Returns [`GeneratorError::EmptyVocabulary`] if an explicit vocabulary is empty.
    pub fn build(&self) -> Result<Box<dyn PasswordGenerator>, GeneratorError> {
        Ok(match self {
            Self::Pin { length } => Box::new(PinGenerator::new(*length)),
            Self::Random(options) => Box::new(RandomPasswordGenerator::new(options)),
            Self::Memorable {
                options,
                vocabulary,
            } => {
                let vocabulary = vocabulary
                    .as_ref()
                    .map(|words| Vocabulary::new(words.iter().cloned()))
                    .transpose()?;
                Box::new(MemorablePasswordGenerator::new(options.clone(), vocabulary)?)
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pin_from_json() {
        let config = GeneratorConfig::from_json(r#"{"kind": "pin", "length": 6}"#).unwrap();
        assert_eq!(config, GeneratorConfig::Pin { length: 6 });
        let pin = config.build().unwrap().generate();
        assert_eq!(pin.len(), 6);
        assert!(pin.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn pin_length_defaults() {
        let config = GeneratorConfig::from_json(r#"{"kind": "pin"}"#).unwrap();
        assert_eq!(config, GeneratorConfig::Pin { length: DEFAULT_PIN_LENGTH });
    }

    #[test]
    fn random_from_json() {
        let json = r#"{"kind": "random", "length": 12, "includeNumbers": true}"#;
        let config = GeneratorConfig::from_json(json).unwrap();
        let pw = config.build().unwrap().generate();
        assert_eq!(pw.len(), 12);
        assert!(pw.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn memorable_with_vocabulary() {
        let json = r#"{
            "kind": "memorable",
            "numOfWords": 3,
            "separator": "_",
            "vocabulary": ["apple", "tree", "river"]
        }"#;
        let config = GeneratorConfig::from_json(json).unwrap();
        let pw = config.build().unwrap().generate();
        let tokens: Vec<&str> = pw.split('_').collect();
        assert_eq!(tokens.len(), 3);
        assert!(tokens.iter().all(|t| ["apple", "tree", "river"].contains(t)));
    }

    #[test]
    fn memorable_empty_vocabulary_fails_build() {
        let config =
            GeneratorConfig::from_json(r#"{"kind": "memorable", "vocabulary": []}"#).unwrap();
        let err = config.build().unwrap_err();
        assert!(matches!(err, GeneratorError::EmptyVocabulary));
    }

    #[test]
    fn negative_length_rejected() {
        let err = GeneratorConfig::from_json(r#"{"kind": "pin", "length": -1}"#).unwrap_err();
        assert!(matches!(err, GeneratorError::InvalidConfig(_)));
    }

    #[test]
    fn negative_word_count_rejected() {
        let result = GeneratorConfig::from_json(r#"{"kind": "memorable", "numOfWords": -3}"#);
        assert!(matches!(result, Err(GeneratorError::InvalidConfig(_))));
    }

    #[test]
    fn unknown_kind_rejected() {
        let err = GeneratorConfig::from_json(r#"{"kind": "banana"}"#).unwrap_err();
        assert!(err.to_string().starts_with("invalid generator configuration"));
    }

    #[test]
    fn default_is_random() {
        let config = GeneratorConfig::default();
        insta::assert_json_snapshot!(config, @r#"
        {
          "kind": "random",
          "length": 8,
          "includeNumbers": false,
          "includeSymbols": false
        }
        "#);
    }

    #[test]
    fn memorable_serializes_flat() {
        let config = GeneratorConfig::Memorable {
            options: MemorableOptions::default(),
            vocabulary: None,
        };
        insta::assert_json_snapshot!(config, @r#"
        {
          "kind": "memorable",
          "numOfWords": 4,
          "separator": "-",
          "capitalize": false
        }
        "#);
    }

    #[test]
    fn json_roundtrip() {
        let config = GeneratorConfig::Memorable {
            options: MemorableOptions {
                num_of_words: 2,
                separator: " ".into(),
                capitalize: true,
            },
            vocabulary: Some(vec!["a".into(), "b".into()]),
        };
        let parsed = GeneratorConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }
}
