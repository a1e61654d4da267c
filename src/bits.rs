//! ## Bit-pattern statistics
//! Pure functions over 32-bit hashes used by every probabilistic estimator.
//!
//! For a hash `x`, the rank `r(x)` is the number of consecutive `1` bits starting
//! at bit 0. For uniformly distributed `x`, `P(r(x) >= k) = 2^-k`, which makes the
//! rank a proxy for how rare a hash value is.

/// Flajolet-Martin bias correction constant.
///
/// The same constant is used by PCSA, stochastic averaging, LogLog and HyperLogLog.
pub const PHI: f64 = 0.77351;

/// Number of set bits in `x`.
#[inline]
pub fn population_count(x: u32) -> u32 {
    x.count_ones()
}

/// Value with exactly one bit set, at the position of the lowest `0` bit of `x`,
/// i.e. `2^r(x)`.
///
/// `x + 1` wraps for `x = u32::MAX`, so the indicator of the all-ones pattern is `0`.
#[inline]
pub fn lowest_zero_indicator(x: u32) -> u32 {
    !x & x.wrapping_add(1)
}

/// Number of consecutive `1` bits of `x` starting at bit 0.
///
/// Computed as `population_count(lowest_zero_indicator(x) - 1)` with wrapping
/// subtraction, which yields 32 for the all-ones pattern.
#[inline]
pub fn trailing_one_run(x: u32) -> u32 {
    population_count(lowest_zero_indicator(x).wrapping_sub(1))
}
