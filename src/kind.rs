//! ## Estimator configuration
//! `EstimatorKind` names an estimator variant together with its register count.
//!
//! Kinds are written as short labels:
//! - `exact`, `pcsa`
//! - `sa_<M>` for stochastic averaging
//! - `ll_<M>` for LogLog
//! - `hll_<M>` for HyperLogLog

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::EstimatorError;
use crate::registers::register_count;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "with_serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum EstimatorKind {
    Exact,
    Pcsa,
    StochasticAveraging { registers: usize },
    LogLog { registers: usize },
    HyperLogLog { registers: usize },
}

impl EstimatorKind {
    /// Register counts of the reference configurations
    pub const REFERENCE_REGISTER_COUNTS: [usize; 5] = [5, 29, 73, 257, 1531];

    /// Return number of registers, if the kind is register-based
    #[inline]
    pub fn registers(&self) -> Option<usize> {
        match *self {
            Self::Exact | Self::Pcsa => None,
            Self::StochasticAveraging { registers }
            | Self::LogLog { registers }
            | Self::HyperLogLog { registers } => Some(registers),
        }
    }

    /// Return the 17 reference configurations: exact, pcsa and every register-based
    /// family for each of `REFERENCE_REGISTER_COUNTS`.
    pub fn reference_suite() -> Vec<EstimatorKind> {
        let counts = Self::REFERENCE_REGISTER_COUNTS;
        [Self::Exact, Self::Pcsa]
            .into_iter()
            .chain(counts.map(|registers| Self::StochasticAveraging { registers }))
            .chain(counts.map(|registers| Self::LogLog { registers }))
            .chain(counts.map(|registers| Self::HyperLogLog { registers }))
            .collect()
    }
}

impl Display for EstimatorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exact => f.write_str("exact"),
            Self::Pcsa => f.write_str("pcsa"),
            Self::StochasticAveraging { registers } => write!(f, "sa_{}", registers),
            Self::LogLog { registers } => write!(f, "ll_{}", registers),
            Self::HyperLogLog { registers } => write!(f, "hll_{}", registers),
        }
    }
}

impl FromStr for EstimatorKind {
    type Err = EstimatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim();
        match label {
            "exact" => return Ok(Self::Exact),
            "pcsa" => return Ok(Self::Pcsa),
            _ => {}
        }

        let (family, registers) = label
            .split_once('_')
            .filter(|(family, _)| matches!(*family, "sa" | "ll" | "hll"))
            .ok_or_else(|| EstimatorError::UnknownKind(label.to_string()))?;
        let registers = registers
            .parse::<usize>()
            .map_err(|e| EstimatorError::InvalidLabel {
                label: label.to_string(),
                reason: e.to_string(),
            })?;
        register_count(registers)?;

        Ok(match family {
            "sa" => Self::StochasticAveraging { registers },
            "ll" => Self::LogLog { registers },
            _ => Self::HyperLogLog { registers },
        })
    }
}

impl TryFrom<String> for EstimatorKind {
    type Error = EstimatorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EstimatorKind> for String {
    fn from(kind: EstimatorKind) -> Self {
        kind.to_string()
    }
}
