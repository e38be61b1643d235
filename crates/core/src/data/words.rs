//! Word tables: per-word safety flags and per-tokenizer token costs.
//!
//! Both fixtures are tab-separated text. Empty lines and lines starting
//! with `#` are skipped; anything else must parse or the whole load fails.
//!
//! ```text
//! # word    flags
//! alpha     15
//! bravo     5
//! ```
//!
//! ```text
//! # word    claude  cl100k_base  o200k_base  gpt2
//! alpha     1       1            1           1
//! bravo     1       2            1           3
//! ```

use crate::error::{MintIdError, Result};
use compact_str::CompactString;
use std::str::FromStr;

/// A word and the tokenizers it encodes as a single token under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub word: CompactString,
    /// Bit `i` set when tokenizer `i` encodes `word` as one token
    pub flags: u32,
}

/// A word and its token cost under every tokenizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostEntry {
    pub word: CompactString,
    /// `costs[i]` = number of tokens tokenizer `i` needs for `word`
    pub costs: Box<[u32]>,
}

impl CostEntry {
    /// True when every listed tokenizer encodes the word within `budget` tokens.
    ///
    /// Indices outside the cost row never match.
    #[inline]
    pub fn fits(&self, indices: &[usize], budget: u32) -> bool {
        indices
            .iter()
            .all(|&i| self.costs.get(i).is_some_and(|&cost| cost <= budget))
    }
}

/// Flat word/flags table in source order.
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    entries: Vec<WordEntry>,
}

impl WordTable {
    /// Create a table from already-built entries.
    pub fn new(entries: Vec<WordEntry>) -> Self {
        Self { entries }
    }

    /// Parse a `word<TAB>flags` fixture.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();

        for (line_num, line) in data_lines(content) {
            let (word, flags) = line.split_once('\t').ok_or_else(|| MintIdError::Parse {
                line: line_num,
                message: format!("missing tab separator in '{}'", line),
            })?;
            let word = parse_word(word, line_num)?;
            let flags = parse_field::<u32>(flags, line_num, "flags")?;
            entries.push(WordEntry { word, flags });
        }

        log::debug!("parsed word table: {} entries", entries.len());
        Ok(Self { entries })
    }

    #[inline]
    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Word table carrying a token-cost column per tokenizer.
#[derive(Debug, Clone, Default)]
pub struct CostTable {
    entries: Vec<CostEntry>,
    /// Number of cost columns in every row
    width: usize,
}

impl CostTable {
    /// Create a table from already-built entries.
    ///
    /// Every row must have `width` cost columns.
    pub fn new(entries: Vec<CostEntry>, width: usize) -> Result<Self> {
        if let Some(pos) = entries.iter().position(|e| e.costs.len() != width) {
            return Err(MintIdError::Parse {
                line: pos + 1,
                message: format!(
                    "expected {} cost columns, found {}",
                    width,
                    entries[pos].costs.len()
                ),
            });
        }
        Ok(Self { entries, width })
    }

    /// Parse a `word<TAB>cost<TAB>cost...` fixture.
    ///
    /// The first row fixes the column count; later rows must agree.
    pub fn parse(content: &str) -> Result<Self> {
        let mut entries = Vec::new();
        let mut width = None;

        for (line_num, line) in data_lines(content) {
            let mut fields = line.split('\t');
            let word = parse_word(fields.next().unwrap_or_default(), line_num)?;
            let costs = fields
                .map(|f| parse_field::<u32>(f, line_num, "cost"))
                .collect::<Result<Box<[u32]>>>()?;

            if costs.is_empty() {
                return Err(MintIdError::Parse {
                    line: line_num,
                    message: format!("no cost columns for '{}'", word),
                });
            }
            let expected = *width.get_or_insert(costs.len());
            if costs.len() != expected {
                return Err(MintIdError::Parse {
                    line: line_num,
                    message: format!(
                        "expected {} cost columns, found {}",
                        expected,
                        costs.len()
                    ),
                });
            }

            entries.push(CostEntry { word, costs });
        }

        log::debug!(
            "parsed cost table: {} entries x {} tokenizers",
            entries.len(),
            width.unwrap_or(0)
        );
        Ok(Self {
            entries,
            width: width.unwrap_or(0),
        })
    }

    #[inline]
    pub fn entries(&self) -> &[CostEntry] {
        &self.entries
    }

    /// Number of tokenizer columns. Zero for an empty table.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Non-empty, non-comment lines with 1-based line numbers.
fn data_lines(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.is_empty() && !line.starts_with('#'))
}

fn parse_word(word: &str, line: usize) -> Result<CompactString> {
    if word.is_empty() {
        return Err(MintIdError::Parse {
            line,
            message: "empty word".to_string(),
        });
    }
    Ok(CompactString::new(word))
}

fn parse_field<T: FromStr>(field: &str, line: usize, what: &str) -> Result<T> {
    field.trim().parse().map_err(|_| MintIdError::Parse {
        line,
        message: format!("invalid {} '{}'", what, field),
    })
}
