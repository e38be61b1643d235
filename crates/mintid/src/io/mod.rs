//! Dataset loading.
//!
//! This module reads the metadata and word table fixtures from a dataset
//! directory.

pub mod load;

pub use load::{Dataset, DatasetLoader, EXTENDED_WORDS_FILE, METADATA_FILE, WORDS_FILE};
