//! Cardinality estimator allows to estimate number of distinct items
//! in a stream and is one of the following variants:
//! - `Exact`: stores every distinct item, used as ground truth.
//! - `Pcsa`: single 32-bit Flajolet-Martin sketch.
//! - `StochasticAveraging`: `M` PCSA sketches selected by the bucket hash.
//! - `LogLog`: `M` registers holding the maximum rank, combined via arithmetic mean.
//! - `HyperLogLog`: `M` registers holding the maximum rank, combined via harmonic mean.
//!
//! # Pipeline
//!
//! Every item flows `item -> HashLayer -> (bucket index, bits hash) -> register update`.
//! Estimates flow `registers -> bit statistics -> f64`.
//!
//! # Expected behaviour
//! - Estimates are deterministic for a given `HashLayer` and sequence of items.
//! - Observing an already seen item never changes any register or the estimate.
//! - Register-based estimators keep running sums of their register statistics,
//!   so `estimate` is a constant time operation.
//! - Estimates of an empty register-based estimator are finite and positive:
//!   `1/φ` for PCSA, `M/φ` for stochastic averaging, `2·M·φ` for LogLog and HyperLogLog.

use std::fmt::{Debug, Formatter};

use enum_dispatch::enum_dispatch;
use tracing::debug;

use crate::error::EstimatorError;
use crate::exact::Exact;
use crate::hash::HashLayer;
use crate::hyperloglog::HyperLogLog;
use crate::kind::EstimatorKind;
use crate::loglog::LogLog;
use crate::pcsa::Pcsa;
use crate::stochastic::StochasticAveraging;

/// Estimator trait which must be implemented by all estimator variants.
#[enum_dispatch(Estimator)]
pub trait EstimatorTrait {
    /// Feed one item into the estimator
    fn observe(&mut self, item: &[u8]);
    /// Return approximate number of distinct items observed so far
    fn estimate(&self) -> f64;
    /// Return memory size of the estimator in bytes
    fn size_of(&self) -> usize;
    /// Return configuration the estimator was created with
    fn kind(&self) -> EstimatorKind;
    fn summary(&self) -> String {
        format!(
            "{{ kind: {}, estimate: {:.4}, size: {} }}",
            self.kind(),
            self.estimate(),
            self.size_of()
        )
    }
}

/// Closed set of estimator variants
#[enum_dispatch]
#[derive(Clone, PartialEq)]
pub enum Estimator {
    Exact(Exact),
    Pcsa(Pcsa),
    StochasticAveraging(StochasticAveraging),
    LogLog(LogLog),
    HyperLogLog(HyperLogLog),
}

impl Estimator {
    /// Creates new estimator of given `kind` with default hash layer
    #[inline]
    pub fn new(kind: EstimatorKind) -> Result<Self, EstimatorError> {
        Self::with_hasher(kind, HashLayer::default())
    }

    /// Creates new estimator of given `kind` using provided hash layer
    pub fn with_hasher(kind: EstimatorKind, hasher: HashLayer) -> Result<Self, EstimatorError> {
        let estimator: Estimator = match kind {
            EstimatorKind::Exact => Exact::new().into(),
            EstimatorKind::Pcsa => Pcsa::with_hasher(hasher).into(),
            EstimatorKind::StochasticAveraging { registers } => {
                StochasticAveraging::with_hasher(registers, hasher)?.into()
            }
            EstimatorKind::LogLog { registers } => LogLog::with_hasher(registers, hasher)?.into(),
            EstimatorKind::HyperLogLog { registers } => {
                HyperLogLog::with_hasher(registers, hasher)?.into()
            }
        };

        debug!(
            kind = %kind,
            bucket_seed = hasher.bucket_seed(),
            bits_seed = hasher.bits_seed(),
            size = estimator.size_of(),
            "created estimator"
        );

        Ok(estimator)
    }
}

impl Debug for Estimator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.summary())
    }
}
