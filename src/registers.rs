//! ## Rank registers
//! Register array shared by LogLog and HyperLogLog.
//!
//! Register `k` stores the maximum rank (trailing-one run of the bits hash)
//! observed among items routed to bucket `k`. A rank never exceeds 32, so each
//! register fits into a single byte.

use std::mem::{size_of, size_of_val};

use crate::bits::trailing_one_run;
use crate::error::EstimatorError;
use crate::hash::HashLayer;

/// Validate register count `m` and convert it into the bucket modulus.
#[inline]
pub(crate) fn register_count(m: usize) -> Result<u32, EstimatorError> {
    match u32::try_from(m) {
        Ok(m) if m > 0 => Ok(m),
        _ => Err(EstimatorError::InvalidRegisterCount(m)),
    }
}

#[derive(Clone, PartialEq, Eq)]
pub(crate) struct RankRegisters {
    hasher: HashLayer,
    m: u32,
    ranks: Vec<u8>,
}

impl RankRegisters {
    pub(crate) fn new(m: usize, hasher: HashLayer) -> Result<Self, EstimatorError> {
        let m = register_count(m)?;
        Ok(Self {
            hasher,
            m,
            ranks: vec![0; m as usize],
        })
    }

    /// Route `item` to its register and raise the register to the item's rank.
    ///
    /// Returns `(old_rank, new_rank)` when the register changed.
    #[inline]
    pub(crate) fn observe(&mut self, item: &[u8]) -> Option<(u8, u8)> {
        let k = self.hasher.bucket(item, self.m);
        // rank is at most 32
        let rank = trailing_one_run(self.hasher.hash_bits(item)) as u8;
        // SAFETY: `bucket` returns an index below `m`, which is the length of `ranks`.
        let register = unsafe { self.ranks.get_unchecked_mut(k) };
        let old = *register;
        if rank > old {
            *register = rank;
            Some((old, rank))
        } else {
            None
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.ranks.len()
    }

    #[inline]
    pub(crate) fn ranks(&self) -> &[u8] {
        &self.ranks
    }

    pub(crate) fn size_of(&self) -> usize {
        size_of::<Self>() + size_of_val(self.ranks.as_slice())
    }
}
