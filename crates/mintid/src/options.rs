//! Caller-facing configuration.
//!
//! [`MintIdOptions`] can be built in code with chained setters or
//! deserialized from JSON with camelCase keys:
//!
//! ```rust
//! use mintid::MintIdOptions;
//!
//! let options = MintIdOptions::from_json(r#"{"model": ["gpt-4o", "claude-opus-4"], "minEntropy": 96}"#)?;
//! assert_eq!(options.model, vec!["gpt-4o", "claude-opus-4"]);
//! assert_eq!(options.min_entropy, Some(96.0));
//! # Ok::<(), mintid::MintIdError>(())
//! ```

use mintid_core::{Result, Selector};
use serde::{Deserialize, Deserializer, Serialize};

/// Default delimiter between words.
pub const DEFAULT_DELIMITER: &str = "_";

/// Options for minting identifiers, computing entropy or listing words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct MintIdOptions {
    /// Number of words. Ignored when `min_entropy` is set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<usize>,
    /// Minimum bits of entropy; overrides `words` unless zero or NaN
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_entropy: Option<f64>,
    /// Delimiter between words
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<String>,
    /// Model(s) to optimize for. Ignored when `tokenizer` is non-empty.
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub model: Vec<String>,
    /// Tokenizer names or aliases to optimize for
    #[serde(deserialize_with = "one_or_many", skip_serializing_if = "Vec::is_empty")]
    pub tokenizer: Vec<String>,
    /// Per-word token budget (extended wordlist only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

impl MintIdOptions {
    /// Options with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the word count.
    pub fn words(mut self, words: usize) -> Self {
        self.words = Some(words);
        self
    }

    /// Set the minimum entropy in bits.
    pub fn min_entropy(mut self, bits: f64) -> Self {
        self.min_entropy = Some(bits);
        self
    }

    /// Set the delimiter.
    pub fn delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = Some(delimiter.into());
        self
    }

    /// Add a model to optimize for.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model.push(model.into());
        self
    }

    /// Add a tokenizer name or alias to optimize for.
    pub fn tokenizer(mut self, tokenizer: impl Into<String>) -> Self {
        self.tokenizer.push(tokenizer.into());
        self
    }

    /// Set the per-word token budget.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    /// Tokenizer selection, with tokenizers taking precedence over models.
    pub fn selector(&self) -> Selector {
        Selector::from_parts(self.tokenizer.as_slice(), self.model.as_slice())
    }

    /// Entropy target, if one is in effect.
    ///
    /// Zero and NaN targets count as unset. A negative target stays in
    /// effect and derives a zero word count.
    pub fn entropy_target(&self) -> Option<f64> {
        self.min_entropy.filter(|bits| !bits.is_nan() && *bits != 0.0)
    }

    /// Delimiter in effect.
    pub fn delimiter_or_default(&self) -> &str {
        self.delimiter.as_deref().unwrap_or(DEFAULT_DELIMITER)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(name) => vec![name],
        OneOrMany::Many(names) => names,
    })
}
