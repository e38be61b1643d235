//! Identifier facade.
//!
//! [`MintId`] runs the full pipeline for one [`Variant`]:
//! resolve the selector, fetch the cached pool, decide the word count
//! (from `min_entropy` or `words`), then draw the words.

use crate::io::DatasetLoader;
use crate::options::MintIdOptions;
use crate::utils::{CacheStats, Pool};
use crate::variant::{Extended, Simple, Variant, WordlistProvider};
use mintid_core::{
    entropy_info, generate, words_for_entropy, EntropyInfo, Metadata, MintIdError, Resolver,
    Result,
};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use std::path::Path;
use std::sync::Arc;

/// Single-token identifiers (default 6 words).
pub type SimpleMintId = MintId<Simple>;

/// Token-budget identifiers (default 12 words, 1 token per word).
pub type ExtendedMintId = MintId<Extended>;

/// Metadata plus a cached wordlist provider for one variant.
pub struct MintId<V: Variant> {
    metadata: Arc<Metadata>,
    provider: WordlistProvider<V>,
}

impl<V: Variant> MintId<V> {
    /// Create a facade over already-loaded tables.
    pub fn new(metadata: Arc<Metadata>, table: Arc<V::Table>) -> Result<Self> {
        V::check_table(&table, &metadata)?;
        Ok(Self {
            metadata,
            provider: WordlistProvider::new(table),
        })
    }

    /// Load the metadata and this variant's word table from a dataset directory.
    pub fn from_dir(dir: &Path) -> Result<Self> {
        let metadata = DatasetLoader::load_metadata(dir)?;
        let table = V::load_table(dir)?;
        Self::new(Arc::new(metadata), Arc::new(table))
    }

    #[inline]
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    #[inline]
    pub fn table(&self) -> &V::Table {
        self.provider.table()
    }

    /// Pool cache statistics.
    pub fn cache_stats(&self) -> CacheStats {
        self.provider.cache_stats()
    }

    /// The filtered wordlist for a model/tokenizer configuration.
    pub fn wordlist(&self, options: &MintIdOptions) -> Result<Pool> {
        let resolver = Resolver::new(&self.metadata);
        let criterion = V::criterion(&resolver, &options.selector(), options)?;
        Ok(self.provider.pool(&criterion))
    }

    /// Entropy of the identifiers this configuration would produce.
    pub fn entropy(&self, options: &MintIdOptions) -> Result<EntropyInfo> {
        let pool = self.wordlist(options)?;
        let count = self.word_count(pool.len(), options)?;
        Ok(entropy_info(pool.len(), count))
    }

    /// Generate an identifier using the operating system's random source.
    pub fn mint_id(&self, options: &MintIdOptions) -> Result<String> {
        self.mint_id_with_rng(options, &mut OsRng)
    }

    /// Generate an identifier with a caller-supplied secure generator.
    pub fn mint_id_with_rng<R>(&self, options: &MintIdOptions, rng: &mut R) -> Result<String>
    where
        R: RngCore + CryptoRng + ?Sized,
    {
        let pool = self.wordlist(options)?;
        let count = self.word_count(pool.len(), options)?;
        generate(&pool[..], count, options.delimiter_or_default(), rng)
    }

    /// Word count: derived from the entropy target if set, else `words`,
    /// else the variant default. A derived count must be at least 1.
    fn word_count(&self, pool_size: usize, options: &MintIdOptions) -> Result<usize> {
        let Some(target_bits) = options.entropy_target() else {
            return Ok(options.words.unwrap_or(V::DEFAULT_WORDS));
        };
        match words_for_entropy(pool_size, target_bits) {
            Some(0) => Err(MintIdError::InvalidCount(0)),
            Some(count) => Ok(count),
            None if pool_size == 0 => Err(MintIdError::EmptyWordlist),
            None => Err(MintIdError::UnsatisfiableEntropy {
                pool_size,
                target_bits,
            }),
        }
    }
}
