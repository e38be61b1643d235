//! Synthetic dataset with the reference pool sizes.
//!
//! | pool                  | words |
//! |-----------------------|-------|
//! | universal (all four)  | 2220  |
//! | claude                | 7629  |
//! | cl100k_base           | 4914  |
//! | o200k_base            | 5640  |
//! | gpt2                  | 3495  |
//!
//! Every word that is single-token for a tokenizer costs 1 under it in the
//! extended table; the rest cost 2 or 3, and words unsafe everywhere cost 4.

#![allow(dead_code)]

use mintid::{CostTable, Dataset, Metadata, WordTable};
use std::fmt::Write;

pub const UNIVERSAL: usize = 2220;
pub const CLAUDE: usize = 7629;
pub const CL100K: usize = 4914;
pub const O200K: usize = 5640;
pub const GPT2: usize = 3495;
/// Words safe for no tokenizer at all
pub const UNSAFE: usize = 150;

/// (flags, how many words carry exactly those flags)
fn groups() -> [(u32, usize); 6] {
    [
        (15, UNIVERSAL),
        (1, CLAUDE - UNIVERSAL),
        (2, CL100K - UNIVERSAL),
        (4, O200K - UNIVERSAL),
        (8, GPT2 - UNIVERSAL),
        (0, UNSAFE),
    ]
}

/// Total number of words in both tables.
pub fn total_words() -> usize {
    groups().iter().map(|(_, n)| n).sum()
}

/// `word<TAB>flags` fixture text.
pub fn words_tsv() -> String {
    let mut out = String::from("# word\tflags\n");
    let mut n = 0;
    for (flags, count) in groups() {
        for _ in 0..count {
            writeln!(out, "{}\t{}", word(n), flags).unwrap();
            n += 1;
        }
    }
    out
}

/// `word<TAB>cost x4` fixture text, consistent with [`words_tsv`].
pub fn costs_tsv() -> String {
    let mut out = String::from("# word\tclaude\tcl100k_base\to200k_base\tgpt2\n");
    let mut n = 0;
    for (flags, count) in groups() {
        for _ in 0..count {
            let costs: Vec<String> = (0..4)
                .map(|bit| cost(n, flags, bit).to_string())
                .collect();
            writeln!(out, "{}\t{}", word(n), costs.join("\t")).unwrap();
            n += 1;
        }
    }
    out
}

pub fn dataset() -> Dataset {
    Dataset::new(
        Metadata::builtin().unwrap(),
        WordTable::parse(&words_tsv()).unwrap(),
        CostTable::parse(&costs_tsv()).unwrap(),
    )
    .unwrap()
}

fn word(n: usize) -> String {
    format!("word{:05}", n)
}

fn cost(n: usize, flags: u32, bit: u32) -> u32 {
    if flags == 0 {
        4
    } else if flags & (1 << bit) != 0 {
        1
    } else if n % 3 == 0 {
        3
    } else {
        2
    }
}
