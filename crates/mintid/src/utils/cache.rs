//! Process-lifetime cache of filtered word pools.
//!
//! Pools are pure functions of their criterion, so entries are never
//! evicted or invalidated. Concurrent misses on the same criterion may
//! compute the pool twice; the first insert wins and every caller gets
//! that same shared slice.

use ahash::AHashMap;
use compact_str::CompactString;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// An immutable, shareable word pool in source-table order.
pub type Pool = Arc<[CompactString]>;

/// Cache from filter criterion to pool.
pub struct PoolCache<K> {
    /// The cache storing criterion -> pool
    pools: RwLock<AHashMap<K, Pool>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl<K: Eq + Hash + Clone> PoolCache<K> {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self {
            pools: RwLock::new(AHashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Get the cached pool for `key` or build it with `compute`.
    ///
    /// `compute` runs without holding the lock.
    pub fn get_or_compute<F>(&self, key: &K, compute: F) -> Pool
    where
        F: FnOnce(&K) -> Vec<CompactString>,
    {
        if let Some(pool) = self.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return pool;
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let computed: Pool = compute(key).into();

        let mut pools = self.pools.write().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(pools.entry(key.clone()).or_insert(computed))
    }

    /// Cached pool for `key`, if present.
    pub fn get(&self, key: &K) -> Option<Pool> {
        self.pools
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    /// Get the number of cached pools.
    pub fn len(&self) -> usize {
        self.pools
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

impl<K: Eq + Hash + Clone> Default for PoolCache<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheStats {
    /// Current number of entries
    pub entries: usize,
    /// Lookups served from the cache
    pub hits: u64,
    /// Lookups that had to filter the table
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of lookups served from the cache, if any lookup happened.
    pub fn hit_rate(&self) -> Option<f64> {
        let total = self.hits + self.misses;
        (total > 0).then(|| self.hits as f64 / total as f64)
    }
}
