//! ## Exact estimator
//! Stores every distinct item and reports the exact number of distinct items.
//! Memory grows with the number of distinct items, so it only serves as ground truth.

use std::mem::size_of;

use hashbrown::HashSet;

use crate::estimator::EstimatorTrait;
use crate::kind::EstimatorKind;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Exact {
    items: HashSet<Box<[u8]>>,
    /// Total number of bytes held by stored items
    bytes: usize,
}

impl Exact {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return whether `item` was observed before
    #[inline]
    pub fn contains(&self, item: &[u8]) -> bool {
        self.items.contains(item)
    }
}

impl EstimatorTrait for Exact {
    #[inline]
    fn observe(&mut self, item: &[u8]) {
        if !self.items.contains(item) {
            self.bytes += item.len();
            self.items.insert(item.into());
        }
    }

    #[inline]
    fn estimate(&self) -> f64 {
        self.items.len() as f64
    }

    fn size_of(&self) -> usize {
        size_of::<Self>() + self.items.capacity() * size_of::<Box<[u8]>>() + self.bytes
    }

    fn kind(&self) -> EstimatorKind {
        EstimatorKind::Exact
    }
}
