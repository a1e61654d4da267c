//! `stream-cardinality` is a Rust crate implementing the classic streaming cardinality estimators:
//! probabilistic counting (PCSA), stochastic averaging, LogLog and HyperLogLog,
//! together with an exact baseline used as ground truth.
//!
//! ```
//! use stream_cardinality::{Estimator, EstimatorKind, EstimatorTrait};
//!
//! let mut estimator = Estimator::new("hll_257".parse().unwrap()).unwrap();
//! for fruit in ["apple", "banana", "apple", "cherry"] {
//!     estimator.observe(fruit.as_bytes());
//! }
//! assert!(estimator.estimate().is_finite());
//! assert_eq!(estimator.kind(), EstimatorKind::HyperLogLog { registers: 257 });
//! ```
pub mod bits;
mod error;
pub mod estimator;
mod exact;
pub mod hash;
mod hyperloglog;
mod kind;
mod loglog;
mod pcsa;
mod registers;
mod stochastic;

pub use error::EstimatorError;
pub use estimator::{Estimator, EstimatorTrait};
pub use exact::Exact;
pub use hash::HashLayer;
pub use hyperloglog::HyperLogLog;
pub use kind::EstimatorKind;
pub use loglog::LogLog;
pub use pcsa::Pcsa;
pub use stochastic::StochasticAveraging;
