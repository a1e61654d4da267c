//! ## Stochastic averaging estimator
//! `M` independent PCSA sketches. The bucket hash routes each item to one sketch
//! and the bits hash sets the sketch bit at the item's rank.
//!
//! The estimate averages the lowest unset bit position `R_k` of every sketch:
//! `M * 2^mean(R_k) / φ`. Splitting the stream reduces the variance of a single
//! sketch roughly by a factor of `M` at the cost of `M` times more memory.

use std::fmt::{Debug, Formatter};
use std::mem::{size_of, size_of_val};

use crate::bits::{lowest_zero_indicator, trailing_one_run, PHI};
use crate::error::EstimatorError;
use crate::estimator::EstimatorTrait;
use crate::hash::HashLayer;
use crate::kind::EstimatorKind;
use crate::registers::register_count;

#[derive(Clone, PartialEq, Eq)]
pub struct StochasticAveraging {
    hasher: HashLayer,
    m: u32,
    sketches: Vec<u32>,
    /// Sum of `trailing_one_run` over all sketches
    run_sum: u64,
}

impl StochasticAveraging {
    /// Creates new estimator with `m` sketches
    #[inline]
    pub fn new(m: usize) -> Result<Self, EstimatorError> {
        Self::with_hasher(m, HashLayer::default())
    }

    pub fn with_hasher(m: usize, hasher: HashLayer) -> Result<Self, EstimatorError> {
        let m = register_count(m)?;
        Ok(Self {
            hasher,
            m,
            sketches: vec![0; m as usize],
            run_sum: 0,
        })
    }

    /// Return sketch bitmasks, one per register
    #[inline]
    pub fn registers(&self) -> &[u32] {
        &self.sketches
    }
}

impl EstimatorTrait for StochasticAveraging {
    #[inline]
    fn observe(&mut self, item: &[u8]) {
        let k = self.hasher.bucket(item, self.m);
        let bit = lowest_zero_indicator(self.hasher.hash_bits(item));
        let sketch = &mut self.sketches[k];
        let old = *sketch;
        let new = old | bit;
        if new != old {
            *sketch = new;
            // setting more bits never shortens the run of trailing ones
            self.run_sum += u64::from(trailing_one_run(new) - trailing_one_run(old));
        }
    }

    #[inline]
    fn estimate(&self) -> f64 {
        let m = f64::from(self.m);
        let mean = self.run_sum as f64 / m;
        m * mean.exp2() / PHI
    }

    fn size_of(&self) -> usize {
        size_of::<Self>() + size_of_val(self.sketches.as_slice())
    }

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::StochasticAveraging {
            registers: self.sketches.len(),
        }
    }
}

impl Debug for StochasticAveraging {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
