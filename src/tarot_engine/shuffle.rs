//! Seeded Fisher–Yates shuffling.
//!
//! ## Generator contract
//!
//! A seeded draw uses `ChaCha8Rng::seed_from_u64(seed)`. ChaCha's output
//! stream is fully defined by the algorithm, so a given seed yields the same
//! permutation on every platform and in every process. Swap targets are
//! sampled as `u64` so the consumed stream does not depend on pointer width.
//!
//! Text seeds are reduced to a `u64` first: the SHA-256 digest of the UTF-8
//! bytes, first eight bytes read big-endian.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use sha2::{Digest, Sha256};

/// Generator type used for every draw.
pub type DrawRng = ChaCha8Rng;

/// Build the generator for one draw: seeded when `seed` is `Some`,
/// OS entropy otherwise.
pub fn draw_rng(seed: Option<u64>) -> DrawRng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None       => ChaCha8Rng::from_entropy(),
    }
}

/// Map a text seed (e.g. a user id) to the integer seed a draw uses:
/// the first 8 bytes of its SHA-256 digest, read big-endian.
pub fn seed_from_text(text: &str) -> u64 {
    let digest = Sha256::digest(text.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    u64::from_be_bytes(head)
}

/// Return a uniformly shuffled copy of `items`; the input is left untouched.
///
/// For `i` from the last index down to 1, swap `i` with `j` drawn uniformly
/// from `0..=i`. Consumes exactly `len - 1` values from `rng`.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut out = items.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.gen_range(0..=i as u64) as usize;
        out.swap(i, j);
    }
    out
}

/// Shuffle with a fresh generator built from `seed`.
pub fn shuffle_with_seed<T: Clone>(items: &[T], seed: Option<u64>) -> Vec<T> {
    let mut rng = draw_rng(seed);
    shuffle(items, &mut rng)
}
