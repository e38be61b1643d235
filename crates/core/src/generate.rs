//! Identifier generation from a word pool.

use crate::error::{MintIdError, Result};
use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

/// Draw `count` words uniformly from `pool`, with replacement, and join them.
///
/// Draws are independent, so each position carries `log2(pool.len())` bits
/// and a word may repeat. Only cryptographically secure generators are
/// accepted; `gen_range` samples without modulo bias.
pub fn generate<W, R>(pool: &[W], count: usize, delimiter: &str, rng: &mut R) -> Result<String>
where
    W: AsRef<str>,
    R: RngCore + CryptoRng + ?Sized,
{
    if pool.is_empty() {
        return Err(MintIdError::EmptyWordlist);
    }
    if count == 0 {
        return Err(MintIdError::InvalidCount(count));
    }

    let mut id = String::new();
    for i in 0..count {
        if i > 0 {
            id.push_str(delimiter);
        }
        id.push_str(pool[rng.gen_range(0..pool.len())].as_ref());
    }

    Ok(id)
}

/// [`generate`] with the operating system's random source.
pub fn generate_secure<W: AsRef<str>>(pool: &[W], count: usize, delimiter: &str) -> Result<String> {
    generate(pool, count, delimiter, &mut OsRng)
}
