//! ## PCSA estimator
//! Probabilistic counting with a single 32-bit sketch.
//!
//! Every observed item sets bit `r` of the sketch, where `r` is the rank of its
//! bits hash. After `n` distinct items the lowest bit never set sits around
//! `log2(φ·n)`, so the estimate is `2^R / φ` where `R` is that bit position.
//! A single sketch is noisy; `StochasticAveraging` averages many of them.

use std::fmt::{Debug, Formatter};
use std::mem::size_of;

use crate::bits::{lowest_zero_indicator, PHI};
use crate::estimator::EstimatorTrait;
use crate::hash::HashLayer;
use crate::kind::EstimatorKind;

#[derive(Clone, Default, PartialEq, Eq)]
pub struct Pcsa {
    hasher: HashLayer,
    sketch: u32,
}

impl Pcsa {
    #[inline]
    pub fn new() -> Self {
        Self::with_hasher(HashLayer::default())
    }

    #[inline]
    pub fn with_hasher(hasher: HashLayer) -> Self {
        Self { hasher, sketch: 0 }
    }

    /// Return accumulated sketch bitmask
    #[inline]
    pub fn sketch(&self) -> u32 {
        self.sketch
    }
}

impl EstimatorTrait for Pcsa {
    #[inline]
    fn observe(&mut self, item: &[u8]) {
        self.sketch |= lowest_zero_indicator(self.hasher.hash_bits(item));
    }

    /// Return `2^R / φ`; `0` once every bit of the sketch is set.
    #[inline]
    fn estimate(&self) -> f64 {
        f64::from(lowest_zero_indicator(self.sketch)) / PHI
    }

    fn size_of(&self) -> usize {
        size_of::<Self>()
    }

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::Pcsa
    }
}

impl Debug for Pcsa {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} sketch: {:#034b}", self.summary(), self.sketch)
    }
}
