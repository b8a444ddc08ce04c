use std::fmt;

use math::Rational;
use num_bigint::BigInt;
use serde::{Serialize, Serializer};
use tracing::debug;

use crate::error::RecoveryResult;
use crate::lagrange::{interpolate_at, interpolate_constant, select_points};
use crate::params::Threshold;
use crate::traits::PointSource;

/// Soft conditions reported next to a completed reconstruction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecoveryWarning {
    /// The interpolated constant is a proper fraction.
    NonIntegerResult { value: Rational },
    /// A share left out of the computation does not lie on the polynomial.
    InconsistentShare {
        #[serde(serialize_with = "serialize_decimal")]
        x: BigInt,
    },
}

fn serialize_decimal<S: Serializer>(
    value: &BigInt,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

impl fmt::Display for RecoveryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecoveryWarning::NonIntegerResult { value } => {
                write!(f, "Result is not an integer. Fraction = {value}")
            }
            RecoveryWarning::InconsistentShare { x } => {
                write!(f, "Share {x} does not lie on the reconstructed polynomial")
            }
        }
    }
}

/// Outcome of a reconstruction that did not hit a hard error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Reconstruction {
    value: Rational,
    selected: usize,
    available: usize,
    warnings: Vec<RecoveryWarning>,
}

impl Reconstruction {
    /// The recovered secret: the numerator of the reduced constant term.
    ///
    /// When [`is_integer`](Self::is_integer) is false this is a best-effort
    /// value and a [`RecoveryWarning::NonIntegerResult`] is present.
    pub fn secret(&self) -> &BigInt {
        self.value.numer()
    }

    /// The exact constant term.
    pub fn value(&self) -> &Rational {
        &self.value
    }

    pub fn is_integer(&self) -> bool {
        self.value.is_integer()
    }

    /// Number of points that went into the interpolation.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Number of points that were offered.
    pub fn available(&self) -> usize {
        self.available
    }

    pub fn warnings(&self) -> &[RecoveryWarning] {
        &self.warnings
    }
}

/// Reconstructs the constant term from the first `k` supplied shares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SecretRecovery {
    threshold: Threshold,
    cross_check: bool,
}

impl SecretRecovery {
    pub fn new(threshold: Threshold) -> Self {
        Self {
            threshold,
            cross_check: false,
        }
    }

    /// Shortcut for `SecretRecovery::new(Threshold::new(k)?)`.
    pub fn with_threshold(threshold: usize) -> RecoveryResult<Self> {
        Threshold::new(threshold).map(Self::new)
    }

    /// Also test every share beyond the first `k` against the result.
    ///
    /// Mismatches are reported as [`RecoveryWarning::InconsistentShare`]; the
    /// secret is still taken from the first `k` shares.
    pub fn with_cross_check(mut self, enabled: bool) -> Self {
        self.cross_check = enabled;
        self
    }

    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    pub fn cross_check(&self) -> bool {
        self.cross_check
    }

    /// Recover `f(0)` from `points`, using the first `k` in supplied order.
    pub fn reconstruct<S: PointSource>(
        &self,
        points: &[S],
    ) -> RecoveryResult<Reconstruction> {
        let selected = select_points(points, self.threshold)?;
        let value = interpolate_constant(selected)?;

        // Integral results are reported in canonical `n/1` form.
        let mut warnings = Vec::new();
        let value = match value.to_integer() {
            Some(integer) => Rational::from(integer),
            None => {
                debug!(fraction = %value, "reconstructed constant is not an integer");
                warnings.push(RecoveryWarning::NonIntegerResult {
                    value: value.clone(),
                });
                value
            }
        };

        if self.cross_check {
            let excess = &points[selected.len()..];
            warnings.extend(Self::check_excess(selected, excess)?);
        }

        Ok(Reconstruction {
            value,
            selected: selected.len(),
            available: points.len(),
            warnings,
        })
    }

    fn check_excess<S: PointSource>(
        selected: &[S],
        excess: &[S],
    ) -> RecoveryResult<Vec<RecoveryWarning>> {
        let mut warnings = Vec::new();
        for point in excess {
            let expected = interpolate_at(selected, point.x())?;
            if expected != Rational::from(point.y()) {
                debug!(x = %point.x(), expected = %expected, found = %point.y(),
                    "redundant share disagrees with reconstruction");
                warnings.push(RecoveryWarning::InconsistentShare {
                    x: point.x().clone(),
                });
            }
        }
        Ok(warnings)
    }
}
