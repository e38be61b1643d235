//! Wordlist filters for both table variants.
//!
//! Filters keep source-table order, so the same criterion always yields the
//! same pool in the same order.

use crate::data::{CostTable, TokenizerMask, WordTable};
use compact_str::CompactString;
use rayon::prelude::*;
use std::fmt;

/// Extended-table criterion: every listed tokenizer within `budget` tokens.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CostCriterion {
    /// Cost columns, sorted and deduplicated
    indices: Vec<usize>,
    /// Maximum tokens per word
    budget: u32,
}

impl CostCriterion {
    /// Build a criterion; indices are normalized so equal sets compare equal.
    pub fn new(mut indices: Vec<usize>, budget: u32) -> Self {
        indices.sort_unstable();
        indices.dedup();
        Self { indices, budget }
    }

    #[inline]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    #[inline]
    pub fn budget(&self) -> u32 {
        self.budget
    }
}

impl fmt::Display for CostCriterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let indices: Vec<String> = self.indices.iter().map(|i| i.to_string()).collect();
        write!(f, "{}:{}", indices.join(","), self.budget)
    }
}

/// Words safe for every tokenizer bit in `mask`.
pub fn filter_by_mask(table: &WordTable, mask: TokenizerMask) -> Vec<CompactString> {
    table
        .entries()
        .par_iter()
        .filter(|entry| mask.is_satisfied_by(entry.flags))
        .map(|entry| entry.word.clone())
        .collect()
}

/// Words costing at most the budget under every tokenizer in the criterion.
pub fn filter_by_cost(table: &CostTable, criterion: &CostCriterion) -> Vec<CompactString> {
    table
        .entries()
        .par_iter()
        .filter(|entry| entry.fits(criterion.indices(), criterion.budget()))
        .map(|entry| entry.word.clone())
        .collect()
}
