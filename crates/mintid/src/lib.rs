//! Mintid - human-readable, tokenizer-safe random identifiers
//!
//! This crate puts the pieces from `mintid-core` behind a configuration
//! object: resolve the model/tokenizer selection, filter and cache the word
//! pool, size the identifier by word count or target entropy, and draw the
//! words from the operating system's secure random source.
//!
//! # Variants
//!
//! - [`SimpleMintId`]: words that encode as a single token under every
//!   selected tokenizer. Defaults to 6 words.
//! - [`ExtendedMintId`]: words that encode within `max_tokens` tokens under
//!   every selected tokenizer. Defaults to 12 words and a budget of 1.
//!
//! # Example
//!
//! ```rust,no_run
//! use mintid::{DatasetLoader, MintIdOptions};
//! use std::path::Path;
//!
//! let dataset = DatasetLoader::load(Path::new("data"))?;
//! let mint = dataset.simple()?;
//!
//! let id = mint.mint_id(&MintIdOptions::new().model("claude-opus-4-6"))?;
//! println!("{}", id);
//!
//! let info = mint.entropy(&MintIdOptions::new().min_entropy(128.0))?;
//! println!("{} words, {:.1} bits", info.words, info.bits);
//! # Ok::<(), mintid::MintIdError>(())
//! ```

// Re-export core types
pub use mintid_core::{
    CostTable, EntropyInfo, Metadata, MintIdError, Result, Selector, TokenizerMask, WordTable,
};

pub mod options;
pub use options::{MintIdOptions, DEFAULT_DELIMITER};

pub mod variant;
pub use variant::{Extended, Simple, Variant, WordlistProvider, DEFAULT_MAX_TOKENS};

pub mod mint;
pub use mint::{ExtendedMintId, MintId, SimpleMintId};

// IO
pub mod io;
pub use io::{Dataset, DatasetLoader};

// Utilities
pub mod utils;
pub use utils::{CacheStats, Pool};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
