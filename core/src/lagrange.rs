//! Exact Lagrange interpolation over the rationals.

use std::collections::HashSet;

use math::{MathError, Rational};
use num_bigint::BigInt;
use num_traits::{One, Zero};
use tracing::debug;

use crate::error::{RecoveryError, RecoveryResult, ShareSetError};
use crate::params::Threshold;
use crate::traits::PointSource;

/// Take the first `threshold` points in supplied order.
///
/// Points beyond the threshold are left out of the computation. Fewer points
/// than the threshold is an error since the polynomial would be
/// underdetermined.
pub fn select_points<S: PointSource>(
    points: &[S],
    threshold: Threshold,
) -> RecoveryResult<&[S]> {
    let required = threshold.get();
    if points.len() < required {
        return Err(RecoveryError::InsufficientShares {
            required,
            provided: points.len(),
        });
    }

    debug!(
        required,
        available = points.len(),
        discarded = points.len() - required,
        "selected points for interpolation"
    );
    Ok(&points[..required])
}

/// Reject empty input and repeated x-coordinates.
pub fn ensure_distinct_x<S: PointSource>(points: &[S]) -> RecoveryResult<()> {
    if points.is_empty() {
        return Err(ShareSetError::Empty.into());
    }

    let mut seen = HashSet::with_capacity(points.len());
    for point in points {
        if !seen.insert(point.x()) {
            return Err(ShareSetError::DuplicateX(point.x().clone()).into());
        }
    }
    Ok(())
}

/// A zero denominator inside a basis term means two points share `x`.
fn duplicate_x(err: MathError, x: &BigInt) -> RecoveryError {
    match err {
        MathError::DivisionByZero => ShareSetError::DuplicateX(x.clone()).into(),
        other => other.into(),
    }
}

/// Basis polynomial `l_i` evaluated at `x`:
/// `Π_{j≠i} (x − x_j) / (x_i − x_j)`.
fn basis_at<S: PointSource>(
    points: &[S],
    i: usize,
    x: &BigInt,
) -> RecoveryResult<Rational> {
    let xi = points[i].x();
    points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .try_fold(Rational::one(), |acc, (_, point)| {
            let xj = point.x();
            let term = Rational::new(x - xj, xi - xj)
                .map_err(|err| duplicate_x(err, xi))?;
            Ok(&acc * &term)
        })
}

/// Lagrange basis values `l_i(x)` for every point, in input order.
pub fn lagrange_coefficients_at<S: PointSource>(
    points: &[S],
    x: &BigInt,
) -> RecoveryResult<Vec<Rational>> {
    ensure_distinct_x(points)?;
    (0..points.len()).map(|i| basis_at(points, i, x)).collect()
}

/// Lagrange basis values at zero, the weights applied to each `y_i`.
pub fn lagrange_coefficients_at_zero<S: PointSource>(
    points: &[S],
) -> RecoveryResult<Vec<Rational>> {
    lagrange_coefficients_at(points, &BigInt::zero())
}

/// Value at `x` of the unique minimal-degree polynomial through `points`.
pub fn interpolate_at<S: PointSource>(
    points: &[S],
    x: &BigInt,
) -> RecoveryResult<Rational> {
    let weights = lagrange_coefficients_at(points, x)?;
    Ok(weights
        .iter()
        .zip(points)
        .map(|(weight, point)| weight * &Rational::from(point.y()))
        .sum())
}

/// Value at zero, the constant term, of the polynomial through `points`.
pub fn interpolate_constant<S: PointSource>(
    points: &[S],
) -> RecoveryResult<Rational> {
    interpolate_at(points, &BigInt::zero())
}
