//! ## HyperLogLog estimator
//! Same registers and update rule as LogLog, combined via a harmonic mean which
//! makes the estimate far less sensitive to outlier registers.
//!
//! [Original HyperLogLog paper](https://algo.inria.fr/flajolet/Publications/FlFuGaMe07.pdf)
//!
//! The estimate is `M² * φ / Σ 2^(-1 - register_k)`.
//!
//! Note: the HyperLogLog paper uses an `M`-dependent constant `α_M ≈ 0.72134`
//! in place of `φ`. With `φ` estimates carry a small constant upward bias (≈ 7%).
//!
//! The harmonic sum is updated whenever a register grows, making `estimate` a
//! constant time operation. Its terms are powers of two in `[2^-33, 2^-1]`, so for
//! up to `2^20` registers every partial sum is exactly representable in `f64` and
//! the running sum never drifts from a full recomputation.

use std::fmt::{Debug, Formatter};
use std::mem::size_of;

use crate::bits::PHI;
use crate::error::EstimatorError;
use crate::estimator::EstimatorTrait;
use crate::hash::HashLayer;
use crate::kind::EstimatorKind;
use crate::registers::RankRegisters;

#[derive(Clone, PartialEq)]
pub struct HyperLogLog {
    registers: RankRegisters,
    /// `Σ 2^(-1 - register_k)` over all registers
    harmonic_sum: f64,
}

impl HyperLogLog {
    /// Creates new estimator with `m` registers
    #[inline]
    pub fn new(m: usize) -> Result<Self, EstimatorError> {
        Self::with_hasher(m, HashLayer::default())
    }

    pub fn with_hasher(m: usize, hasher: HashLayer) -> Result<Self, EstimatorError> {
        let registers = RankRegisters::new(m, hasher)?;
        let harmonic_sum = registers.len() as f64 * harmonic_term(0);
        Ok(Self {
            registers,
            harmonic_sum,
        })
    }

    /// Return register ranks
    #[inline]
    pub fn registers(&self) -> &[u8] {
        self.registers.ranks()
    }
}

impl EstimatorTrait for HyperLogLog {
    #[inline]
    fn observe(&mut self, item: &[u8]) {
        if let Some((old, new)) = self.registers.observe(item) {
            self.harmonic_sum -= harmonic_term(old);
            self.harmonic_sum += harmonic_term(new);
        }
    }

    #[inline]
    fn estimate(&self) -> f64 {
        let m = self.registers.len() as f64;
        m * m * PHI / self.harmonic_sum
    }

    fn size_of(&self) -> usize {
        self.registers.size_of() + size_of::<f64>()
    }

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::HyperLogLog {
            registers: self.registers.len(),
        }
    }
}

impl Debug for HyperLogLog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Contribution `2^(-1 - rank)` of a register to the harmonic sum
#[inline]
fn harmonic_term(rank: u8) -> f64 {
    1.0 / ((1u64 << (u64::from(rank) + 1)) as f64)
}
