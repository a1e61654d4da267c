//! ## Hash layer
//! Maps an item's bytes to two statistically independent 32-bit hashes:
//! - bucket hash (xxHash32), used to select a register;
//! - bits hash (wyhash, low 32 bits), used for the rank statistic.
//!
//! Using two different hash algorithms keeps register selection uncorrelated
//! with the rank observed for an item.

use wyhash::wyhash;
use xxhash_rust::xxh32::xxh32;

/// Default seed of the bucket hash
const DEFAULT_BUCKET_SEED: u32 = 0x9e37_79b9;
/// Default seed of the bits hash
const DEFAULT_BITS_SEED: u64 = 0x2545_f491_4f6c_dd1d;

/// Pair of seeded hash functions owned by an estimator.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HashLayer {
    bucket_seed: u32,
    bits_seed: u64,
}

impl HashLayer {
    /// Create hash layer with explicit seeds
    #[inline]
    pub const fn with_seeds(bucket_seed: u32, bits_seed: u64) -> Self {
        Self {
            bucket_seed,
            bits_seed,
        }
    }

    /// Derive both seeds from a single trial number.
    ///
    /// Handy for repeated experiments where each trial needs an independent layer.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        let mixed = wyhash(&seed.to_le_bytes(), DEFAULT_BITS_SEED);
        Self::with_seeds((mixed >> 32) as u32 ^ DEFAULT_BUCKET_SEED, mixed)
    }

    /// Hash used for register selection, uniform over `[0, 2^32)`
    #[inline]
    pub fn hash_bucket(&self, item: &[u8]) -> u32 {
        xxh32(item, self.bucket_seed)
    }

    /// Hash used for the rank statistic, uniform over `[0, 2^32)`
    #[inline]
    pub fn hash_bits(&self, item: &[u8]) -> u32 {
        wyhash(item, self.bits_seed) as u32
    }

    /// Register index of `item` among `m` registers
    #[inline]
    pub(crate) fn bucket(&self, item: &[u8], m: u32) -> usize {
        (self.hash_bucket(item) % m) as usize
    }

    pub fn bucket_seed(&self) -> u32 {
        self.bucket_seed
    }

    pub fn bits_seed(&self) -> u64 {
        self.bits_seed
    }
}

impl Default for HashLayer {
    fn default() -> Self {
        Self::with_seeds(DEFAULT_BUCKET_SEED, DEFAULT_BITS_SEED)
    }
}
