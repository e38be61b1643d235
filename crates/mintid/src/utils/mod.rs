//! Utility modules for the mintid facades.

pub mod cache;

pub use cache::{CacheStats, Pool, PoolCache};
