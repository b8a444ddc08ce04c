//! Literal-friendly constructors for rationals and integer polynomials.

/// Simplifies constructing [`Rational`](crate::rational::Rational)s.
///
/// With one argument the value is integral and construction cannot fail.
/// With two arguments the result is a [`MathResult`](crate::error::MathResult)
/// because the denominator may be zero.
///
/// ```
/// use math::prelude::*;
///
/// let half = rat!(4, 8).unwrap();
/// assert_eq!(half.to_string(), "1/2");
/// assert_eq!(rat!(3).to_string(), "3");
/// assert!(rat!(1, 0).is_err());
/// ```
#[macro_export]
macro_rules! rat {
    ($value:expr) => {
        $crate::rational::Rational::from($value)
    };
    ($numerator:expr, $denominator:expr) => {
        $crate::rational::Rational::new(
            $crate::num_bigint::BigInt::from($numerator),
            $crate::num_bigint::BigInt::from($denominator),
        )
    };
}

/// Construct an [`IntPolynomial`](crate::polynomial::IntPolynomial) from
/// coefficients, constant term first.
///
/// ```
/// use math::prelude::*;
/// use num_bigint::BigInt;
///
/// let f = int_poly![3, 0, 1];
/// assert_eq!(f.evaluate(&BigInt::from(2)), BigInt::from(7));
/// ```
#[macro_export]
macro_rules! int_poly {
    () => {
        $crate::polynomial::IntPolynomial::default()
    };
    ($($coeff:expr),+ $(,)?) => {
        $crate::polynomial::IntPolynomial::new(vec![
            $($crate::num_bigint::BigInt::from($coeff)),+
        ])
    };
}
