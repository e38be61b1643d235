//! Error types for identifier minting.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the mintid libraries.
///
/// Every variant is a caller or fixture problem; nothing here is transient
/// and nothing is retried.
#[derive(Error, Debug)]
pub enum MintIdError {
    /// Tokenizer selector is neither a canonical name nor an alias
    #[error("Unknown tokenizer: \"{name}\". Valid tokenizers: {}", valid.join(", "))]
    UnknownTokenizer { name: String, valid: Vec<String> },

    /// Model selector is not in the model table
    #[error("Unknown model: \"{0}\". See metadata.json for supported models.")]
    UnknownModel(String),

    /// The filter criterion matched no words
    #[error("Cannot generate ID from empty wordlist")]
    EmptyWordlist,

    /// Requested or derived word count is below one
    #[error("Word count must be at least 1 (got {0})")]
    InvalidCount(usize),

    /// A pool of one word carries no entropy, so no word count reaches the target
    #[error("Cannot reach {target_bits} bits of entropy with a pool of {pool_size} word(s)")]
    UnsatisfiableEntropy { pool_size: usize, target_bits: f64 },

    /// Malformed line in a word table fixture
    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Metadata table violates one of its invariants
    #[error("Invalid metadata: {0}")]
    InvalidMetadata(String),

    /// I/O error with file context
    #[error("I/O error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for mintid operations.
pub type Result<T> = std::result::Result<T, MintIdError>;
