//! Mintid-core - tokenizer-aware wordlists and identifier primitives
//!
//! This crate provides the pieces behind human-readable random identifiers
//! such as `alpha_bravo_charlie`, where every word is known to encode as a
//! bounded number of tokens under one or more LLM tokenizers.
//!
//! # Features
//!
//! - Metadata tables mapping tokenizer names, aliases and models to bits
//! - Word tables carrying either per-tokenizer safety flags or token costs
//! - Selector resolution to bitmask or cost-column criteria
//! - Order-preserving parallel filters over the word tables
//! - Entropy arithmetic and unbiased draws from a secure random source
//!
//! # Example
//!
//! ```rust
//! use mintid_core::{filter_by_mask, generate_secure, Metadata, Resolver, Selector, WordTable};
//!
//! let meta = Metadata::builtin()?;
//! let table = WordTable::parse("alpha\t15\nbravo\t1\ncharlie\t15\n")?;
//!
//! let mask = Resolver::new(&meta).mask(&Selector::Universal)?;
//! let pool = filter_by_mask(&table, mask);
//! assert_eq!(pool, vec!["alpha", "charlie"]);
//!
//! let id = generate_secure(&pool, 3, "_")?;
//! assert_eq!(id.split('_').count(), 3);
//! # Ok::<(), mintid_core::MintIdError>(())
//! ```

pub mod error;
pub use error::{MintIdError, Result};

// Lookup tables
pub mod data;
pub use data::{
    CostEntry, CostTable, Metadata, MetadataRecord, TokenizerMask, WordEntry, WordTable,
};

pub mod entropy;
pub use entropy::{bits_per_word, entropy_info, words_for_entropy, EntropyInfo};

pub mod resolve;
pub use resolve::{Resolver, Selector};

pub mod filter;
pub use filter::{filter_by_cost, filter_by_mask, CostCriterion};

pub mod generate;
pub use generate::{generate, generate_secure};
