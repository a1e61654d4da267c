//! ## LogLog estimator
//! `M` registers, each holding the maximum rank observed among items routed to it.
//! Storing only the maximum rank takes `O(log log n)` bits per register instead of
//! the `O(log n)` bits of a PCSA sketch.
//!
//! The estimate combines the arithmetic mean of the registers with a power of two:
//! `M * 2^(mean + 1) * φ`.

use std::fmt::{Debug, Formatter};
use std::mem::size_of;

use crate::bits::PHI;
use crate::error::EstimatorError;
use crate::estimator::EstimatorTrait;
use crate::hash::HashLayer;
use crate::kind::EstimatorKind;
use crate::registers::RankRegisters;

#[derive(Clone, PartialEq, Eq)]
pub struct LogLog {
    registers: RankRegisters,
    /// Sum of all register ranks
    rank_sum: u64,
}

impl LogLog {
    /// Creates new estimator with `m` registers
    #[inline]
    pub fn new(m: usize) -> Result<Self, EstimatorError> {
        Self::with_hasher(m, HashLayer::default())
    }

    pub fn with_hasher(m: usize, hasher: HashLayer) -> Result<Self, EstimatorError> {
        Ok(Self {
            registers: RankRegisters::new(m, hasher)?,
            rank_sum: 0,
        })
    }

    /// Return register ranks
    #[inline]
    pub fn registers(&self) -> &[u8] {
        self.registers.ranks()
    }
}

impl EstimatorTrait for LogLog {
    #[inline]
    fn observe(&mut self, item: &[u8]) {
        if let Some((old, new)) = self.registers.observe(item) {
            self.rank_sum += u64::from(new - old);
        }
    }

    #[inline]
    fn estimate(&self) -> f64 {
        let m = self.registers.len() as f64;
        let mean = self.rank_sum as f64 / m;
        m * (mean + 1.0).exp2() * PHI
    }

    fn size_of(&self) -> usize {
        self.registers.size_of() + size_of::<u64>()
    }

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::LogLog {
            registers: self.registers.len(),
        }
    }
}

impl Debug for LogLog {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
