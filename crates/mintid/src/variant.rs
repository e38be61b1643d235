//! Wordlist variants and their cached providers.
//!
//! A [`Variant`] fixes the word table shape, the filter criterion and the
//! default word count. [`Simple`] filters by single-token safety flags;
//! [`Extended`] filters by a per-word token budget.

use crate::io::DatasetLoader;
use crate::options::MintIdOptions;
use crate::utils::{CacheStats, Pool, PoolCache};
use compact_str::CompactString;
use mintid_core::{
    filter_by_cost, filter_by_mask, CostCriterion, CostTable, Metadata, MintIdError, Resolver,
    Result, Selector, TokenizerMask, WordTable,
};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::path::Path;
use std::sync::Arc;

/// Default per-word token budget for the extended wordlist.
pub const DEFAULT_MAX_TOKENS: u32 = 1;

/// One flavour of the resolve -> filter -> count -> generate pipeline.
pub trait Variant: Send + Sync + 'static {
    /// Word table the variant filters
    type Table: Send + Sync + Debug;
    /// Cache key for a filtered pool
    type Criterion: Clone + Eq + Hash + Debug + Display + Send + Sync;

    /// Word count when neither `words` nor `min_entropy` is given.
    const DEFAULT_WORDS: usize;

    /// Turn a selector and options into a filter criterion.
    fn criterion(
        resolver: &Resolver<'_>,
        selector: &Selector,
        options: &MintIdOptions,
    ) -> Result<Self::Criterion>;

    /// Filter the table, keeping source order.
    fn filter(table: &Self::Table, criterion: &Self::Criterion) -> Vec<CompactString>;

    /// Check that a table fits the metadata it will be resolved against.
    fn check_table(_table: &Self::Table, _metadata: &Metadata) -> Result<()> {
        Ok(())
    }

    /// Read the variant's table from a dataset directory.
    fn load_table(dir: &Path) -> Result<Self::Table>;
}

/// Single-token wordlist filtered by flag containment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Simple;

impl Variant for Simple {
    type Table = WordTable;
    type Criterion = TokenizerMask;

    const DEFAULT_WORDS: usize = 6;

    fn criterion(
        resolver: &Resolver<'_>,
        selector: &Selector,
        _options: &MintIdOptions,
    ) -> Result<TokenizerMask> {
        resolver.mask(selector)
    }

    fn filter(table: &WordTable, mask: &TokenizerMask) -> Vec<CompactString> {
        filter_by_mask(table, *mask)
    }

    fn load_table(dir: &Path) -> Result<WordTable> {
        DatasetLoader::load_words(dir)
    }
}

/// Token-budget wordlist filtered by per-tokenizer cost.
#[derive(Debug, Clone, Copy, Default)]
pub struct Extended;

impl Variant for Extended {
    type Table = CostTable;
    type Criterion = CostCriterion;

    const DEFAULT_WORDS: usize = 12;

    fn criterion(
        resolver: &Resolver<'_>,
        selector: &Selector,
        options: &MintIdOptions,
    ) -> Result<CostCriterion> {
        let budget = options.max_tokens.unwrap_or(DEFAULT_MAX_TOKENS);
        Ok(CostCriterion::new(resolver.indices(selector)?, budget))
    }

    fn filter(table: &CostTable, criterion: &CostCriterion) -> Vec<CompactString> {
        filter_by_cost(table, criterion)
    }

    fn check_table(table: &CostTable, metadata: &Metadata) -> Result<()> {
        if !table.is_empty() && table.width() != metadata.len() {
            return Err(MintIdError::InvalidMetadata(format!(
                "cost table has {} columns but metadata lists {} tokenizers",
                table.width(),
                metadata.len()
            )));
        }
        Ok(())
    }

    fn load_table(dir: &Path) -> Result<CostTable> {
        DatasetLoader::load_costs(dir)
    }
}

/// A word table plus its per-criterion pool cache.
pub struct WordlistProvider<V: Variant> {
    table: Arc<V::Table>,
    cache: PoolCache<V::Criterion>,
}

impl<V: Variant> WordlistProvider<V> {
    pub fn new(table: Arc<V::Table>) -> Self {
        Self {
            table,
            cache: PoolCache::new(),
        }
    }

    /// Pool for `criterion`, filtered on first use and cached afterwards.
    pub fn pool(&self, criterion: &V::Criterion) -> Pool {
        let pool = self.cache.get_or_compute(criterion, |c| {
            log::trace!("wordlist cache miss for {}", c);
            V::filter(&self.table, c)
        });
        log::trace!("pool for {}: {} words", criterion, pool.len());
        pool
    }

    #[inline]
    pub fn table(&self) -> &V::Table {
        &self.table
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}
