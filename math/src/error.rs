use thiserror::Error;

/// Common result type used across this crate.
pub type MathResult<T, E = MathError> = core::result::Result<T, E>;

/// Errors raised by the exact arithmetic primitives.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("cannot parse rational from {0:?}")]
    ParseRational(String),
}
