//! Read-only lookup tables.
//!
//! This module holds the metadata tables (tokenizers, aliases, models) and
//! the two word tables the wordlist variants filter.

pub mod metadata;
pub mod words;

pub use metadata::{Metadata, MetadataRecord, TokenizerMask, BUILTIN_METADATA, MAX_TOKENIZERS};
pub use words::{CostEntry, CostTable, WordEntry, WordTable};
