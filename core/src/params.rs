use std::fmt;

use crate::error::{RecoveryError, RecoveryResult};

/// Smallest threshold that still describes a polynomial (a constant).
pub const MIN_THRESHOLD: usize = 1;

/// Check whether `threshold` can drive a reconstruction.
pub fn validate_threshold(threshold: usize) -> bool {
    threshold >= MIN_THRESHOLD
}

/// Number of shares needed to pin down the secret polynomial.
///
/// A threshold of `k` describes a polynomial of degree `k - 1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Threshold(usize);

impl Threshold {
    pub fn new(threshold: usize) -> RecoveryResult<Self> {
        if !validate_threshold(threshold) {
            return Err(RecoveryError::InvalidThreshold(threshold));
        }
        Ok(Self(threshold))
    }

    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// Degree of the polynomial this threshold determines.
    #[inline]
    pub const fn degree(self) -> usize {
        self.0 - 1
    }
}

impl TryFrom<usize> for Threshold {
    type Error = RecoveryError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Threshold::new(value)
    }
}

impl From<Threshold> for usize {
    fn from(value: Threshold) -> Self {
        value.0
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
