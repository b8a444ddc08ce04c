use num_bigint::BigInt;
use num_traits::Zero;

/// Polynomial with arbitrary-precision integer coefficients.
///
/// Coefficients are stored constant term first, so `coefficients()[0]` is
/// the value at zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IntPolynomial {
    coefficients: Vec<BigInt>,
}

impl IntPolynomial {
    pub fn new(coefficients: Vec<BigInt>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[BigInt] {
        &self.coefficients
    }

    /// The value at `x = 0`; zero for the empty polynomial.
    pub fn constant_term(&self) -> BigInt {
        self.coefficients.first().cloned().unwrap_or_default()
    }

    /// Degree ignoring trailing zero coefficients, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.iter().rposition(|c| !c.is_zero())
    }

    /// Evaluate at `x` with Horner's rule.
    pub fn evaluate(&self, x: &BigInt) -> BigInt {
        self.coefficients
            .iter()
            .rev()
            .fold(BigInt::zero(), |acc, coeff| acc * x + coeff)
    }
}

impl From<Vec<BigInt>> for IntPolynomial {
    fn from(coefficients: Vec<BigInt>) -> Self {
        Self::new(coefficients)
    }
}

impl From<Vec<i64>> for IntPolynomial {
    fn from(coefficients: Vec<i64>) -> Self {
        Self::new(coefficients.into_iter().map(BigInt::from).collect())
    }
}
