//! Tokenizer, alias and model tables.
//!
//! Canonical tokenizers are kept in a fixed order. The tokenizer at
//! position `i` owns bit `1 << i` in a [`TokenizerMask`] and cost column `i`
//! in an extended word table, so one ordering drives both wordlist variants.

use crate::error::{MintIdError, Result};
use ahash::AHashMap;
use compact_str::CompactString;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{BitOr, BitOrAssign};

/// Reference metadata shipped with the crate.
pub const BUILTIN_METADATA: &str = include_str!("../../data/metadata.json");

/// Maximum number of canonical tokenizers a mask can address.
pub const MAX_TOKENIZERS: usize = u32::BITS as usize;

/// Set of tokenizers a word must be safe for, one bit per tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TokenizerMask(pub u32);

impl TokenizerMask {
    /// Mask requiring no tokenizer at all.
    pub const EMPTY: Self = Self(0);

    /// Mask for the tokenizer at `index`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        Self(1 << index)
    }

    /// Raw bits.
    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    /// True when every bit of `self` is also set in `flags`.
    #[inline]
    pub fn is_satisfied_by(self, flags: u32) -> bool {
        flags & self.0 == self.0
    }
}

impl BitOr for TokenizerMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for TokenizerMask {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for TokenizerMask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#06b}", self.0)
    }
}

/// On-disk shape of the metadata fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Canonical tokenizer names, in bit/column order
    pub tokenizers: Vec<String>,
    /// Alias -> canonical tokenizer
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// Model -> canonical tokenizer
    #[serde(default)]
    pub models: BTreeMap<String, String>,
}

/// Validated, read-only lookup tables for tokenizer and model names.
#[derive(Debug, Clone)]
pub struct Metadata {
    /// Canonical names; position is the tokenizer index
    tokenizers: Vec<CompactString>,
    /// Canonical name -> index
    index: AHashMap<CompactString, usize>,
    /// Alias -> index of its canonical tokenizer
    aliases: AHashMap<CompactString, usize>,
    /// Model -> index of its canonical tokenizer
    models: AHashMap<CompactString, usize>,
}

impl Metadata {
    /// Build the tables from a fixture record.
    ///
    /// Either every invariant holds and a complete table is returned, or
    /// nothing is.
    pub fn from_record(record: MetadataRecord) -> Result<Self> {
        if record.tokenizers.is_empty() {
            return Err(MintIdError::InvalidMetadata(
                "at least one tokenizer is required".to_string(),
            ));
        }
        if record.tokenizers.len() > MAX_TOKENIZERS {
            return Err(MintIdError::InvalidMetadata(format!(
                "{} tokenizers exceed the mask width of {}",
                record.tokenizers.len(),
                MAX_TOKENIZERS
            )));
        }

        let mut tokenizers = Vec::with_capacity(record.tokenizers.len());
        let mut index = AHashMap::with_capacity(record.tokenizers.len());
        for (i, name) in record.tokenizers.iter().enumerate() {
            let name = CompactString::new(name);
            if index.insert(name.clone(), i).is_some() {
                return Err(MintIdError::InvalidMetadata(format!(
                    "duplicate tokenizer \"{}\"",
                    name
                )));
            }
            tokenizers.push(name);
        }

        let mut aliases = AHashMap::with_capacity(record.aliases.len());
        for (alias, target) in &record.aliases {
            if index.contains_key(alias.as_str()) {
                return Err(MintIdError::InvalidMetadata(format!(
                    "alias \"{}\" shadows a canonical tokenizer",
                    alias
                )));
            }
            let &i = index.get(target.as_str()).ok_or_else(|| {
                MintIdError::InvalidMetadata(format!(
                    "alias \"{}\" targets unknown tokenizer \"{}\"",
                    alias, target
                ))
            })?;
            aliases.insert(CompactString::new(alias), i);
        }

        let mut models = AHashMap::with_capacity(record.models.len());
        for (model, target) in &record.models {
            let &i = index.get(target.as_str()).ok_or_else(|| {
                MintIdError::InvalidMetadata(format!(
                    "model \"{}\" targets unknown tokenizer \"{}\"",
                    model, target
                ))
            })?;
            models.insert(CompactString::new(model), i);
        }

        Ok(Self {
            tokenizers,
            index,
            aliases,
            models,
        })
    }

    /// Parse and validate a JSON metadata document.
    pub fn from_json(json: &str) -> Result<Self> {
        let record: MetadataRecord = serde_json::from_str(json)?;
        Self::from_record(record)
    }

    /// The reference dataset: claude, cl100k_base, o200k_base and gpt2.
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_METADATA)
    }

    /// Number of canonical tokenizers.
    #[inline]
    pub fn len(&self) -> usize {
        self.tokenizers.len()
    }

    /// Check if there are no tokenizers.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokenizers.is_empty()
    }

    /// Canonical tokenizer names in index order.
    pub fn tokenizer_names(&self) -> impl Iterator<Item = &str> {
        self.tokenizers.iter().map(|s| s.as_str())
    }

    /// Canonical name of the tokenizer at `index`.
    #[inline]
    pub fn name(&self, index: usize) -> Option<&str> {
        self.tokenizers.get(index).map(|s| s.as_str())
    }

    /// Index of a canonical tokenizer name. Aliases are not consulted.
    #[inline]
    pub fn index_of(&self, canonical: &str) -> Option<usize> {
        self.index.get(canonical).copied()
    }

    /// Bit flag of a canonical tokenizer name.
    #[inline]
    pub fn bit(&self, canonical: &str) -> Option<TokenizerMask> {
        self.index_of(canonical).map(TokenizerMask::from_index)
    }

    /// OR of every tokenizer bit.
    pub fn universal_mask(&self) -> TokenizerMask {
        (0..self.len()).fold(TokenizerMask::EMPTY, |mask, i| {
            mask | TokenizerMask::from_index(i)
        })
    }

    /// Resolve a canonical name or alias to a tokenizer index.
    pub fn resolve_tokenizer(&self, name: &str) -> Result<usize> {
        if let Some(i) = self.index_of(name) {
            return Ok(i);
        }
        self.aliases
            .get(name)
            .copied()
            .ok_or_else(|| MintIdError::UnknownTokenizer {
                name: name.to_string(),
                valid: self.tokenizer_names().map(str::to_string).collect(),
            })
    }

    /// Resolve a model name to the index of its tokenizer.
    pub fn resolve_model(&self, name: &str) -> Result<usize> {
        self.models
            .get(name)
            .copied()
            .ok_or_else(|| MintIdError::UnknownModel(name.to_string()))
    }

    /// Known models with their canonical tokenizer, sorted by model name.
    pub fn models(&self) -> Vec<(&str, &str)> {
        let mut models: Vec<_> = self
            .models
            .iter()
            .map(|(model, &i)| (model.as_str(), self.tokenizers[i].as_str()))
            .collect();
        models.sort_unstable();
        models
    }

    /// Known aliases with their canonical tokenizer, sorted by alias.
    pub fn aliases(&self) -> Vec<(&str, &str)> {
        let mut aliases: Vec<_> = self
            .aliases
            .iter()
            .map(|(alias, &i)| (alias.as_str(), self.tokenizers[i].as_str()))
            .collect();
        aliases.sort_unstable();
        aliases
    }
}
