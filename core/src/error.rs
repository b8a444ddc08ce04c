use math::MathError;
use num_bigint::BigInt;
use thiserror::Error;

/// Result type specialized for secret recovery.
pub type RecoveryResult<T> = std::result::Result<T, RecoveryError>;

/// Structural problems with the set of points handed to the interpolator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShareSetError {
    #[error("duplicate x-coordinate {0}")]
    DuplicateX(BigInt),
    #[error("no points supplied")]
    Empty,
}

/// Hard failures that abort a reconstruction.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RecoveryError {
    #[error(transparent)]
    Math(#[from] MathError),
    #[error("Insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("Invalid share set: {0}")]
    InvalidShareSet(#[from] ShareSetError),
    #[error("Invalid encoding: {value:?} is not a base-{base} number")]
    InvalidEncoding { value: String, base: u32 },
    #[error("Invalid base {0}: expected a value in 2..=36")]
    InvalidBase(u32),
    #[error("Invalid threshold {0}: at least one share is required")]
    InvalidThreshold(usize),
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl RecoveryError {
    /// True for failures caused by a zero denominator or divisor.
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, RecoveryError::Math(MathError::DivisionByZero))
    }
}

impl From<serde_json::Error> for RecoveryError {
    fn from(value: serde_json::Error) -> Self {
        RecoveryError::InvalidDocument(value.to_string())
    }
}
