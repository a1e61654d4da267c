use thiserror::Error;

/// Errors raised while configuring an estimator.
///
/// Observing items and reading estimates never fail; only construction does.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EstimatorError {
    #[error("register count must be in [1..={max}], got {0}", max = u32::MAX)]
    InvalidRegisterCount(usize),

    #[error("unknown estimator kind: {0:?}")]
    UnknownKind(String),

    #[error("invalid estimator label {label:?}: {reason}")]
    InvalidLabel { label: String, reason: String },
}
