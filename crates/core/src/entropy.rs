//! Entropy arithmetic for identifiers drawn uniformly from a pool.
//!
//! Every word position is an independent choice among `pool_size` words, so
//! an identifier of `w` words carries `w * log2(pool_size)` bits.

use serde::{Deserialize, Serialize};

/// Entropy summary for a pool size and word count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntropyInfo {
    /// Bits of entropy
    pub bits: f64,
    /// Number of words in the pool
    pub pool_size: usize,
    /// Bits per word
    pub bits_per_word: f64,
    /// Number of words used
    pub words: usize,
}

/// Bits contributed by one word drawn from a pool of `pool_size`.
///
/// An empty pool contributes nothing.
pub fn bits_per_word(pool_size: usize) -> f64 {
    if pool_size == 0 {
        return 0.0;
    }
    (pool_size as f64).log2()
}

/// Smallest word count reaching `target_bits`.
///
/// Returns `None` when the pool contributes no entropy per word (fewer than
/// two words), or when the count is infinite or does not fit in `usize`.
/// Rounds up: an under-count would weaken the guarantee.
pub fn words_for_entropy(pool_size: usize, target_bits: f64) -> Option<usize> {
    let bpw = bits_per_word(pool_size);
    if bpw <= 0.0 {
        return None;
    }
    let words = (target_bits / bpw).ceil();
    if words <= 0.0 {
        return Some(0);
    }
    if !words.is_finite() || words >= usize::MAX as f64 {
        return None;
    }
    Some(words as usize)
}

/// Entropy summary for `words` draws from a pool of `pool_size`.
///
/// `bits` is the exact product, not rounded.
pub fn entropy_info(pool_size: usize, words: usize) -> EntropyInfo {
    let bpw = bits_per_word(pool_size);
    EntropyInfo {
        bits: bpw * words as f64,
        pool_size,
        bits_per_word: bpw,
        words,
    }
}
