use std::fmt;
use std::iter::{Product, Sum};
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{MathError, MathResult};

/// Exact fraction over arbitrary-precision integers.
///
/// The denominator is always strictly positive and the pair is kept in
/// lowest terms. Zero is the one exception: a zero numerator is stored with
/// whatever positive denominator it was built from, so `0/5` stays `0/5`.
/// Equality compares values, which makes `0/5 == 0/1`.
///
/// Every operation returns a fresh value; there is no mutating API.
#[derive(Debug, Clone)]
pub struct Rational {
    numerator: BigInt,
    denominator: BigInt,
}

impl Rational {
    /// Build `numerator / denominator`, reduced to lowest terms.
    ///
    /// Fails with [`MathError::DivisionByZero`] when `denominator` is zero.
    pub fn new(numerator: BigInt, denominator: BigInt) -> MathResult<Self> {
        if denominator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::reduced(numerator, denominator))
    }

    /// Build an integral rational, `value / 1`.
    pub fn from_integer(value: BigInt) -> Self {
        Self {
            numerator: value,
            denominator: BigInt::one(),
        }
    }

    /// Normalize sign and divide out the gcd. `denominator` must be nonzero.
    fn reduced(numerator: BigInt, denominator: BigInt) -> Self {
        debug_assert!(!denominator.is_zero());

        let (numerator, denominator) = if denominator.is_negative() {
            (-numerator, -denominator)
        } else {
            (numerator, denominator)
        };

        if numerator.is_zero() {
            return Self {
                numerator,
                denominator,
            };
        }

        let gcd = numerator.gcd(&denominator);
        Self {
            numerator: numerator / &gcd,
            denominator: denominator / gcd,
        }
    }

    #[inline]
    pub fn numer(&self) -> &BigInt {
        &self.numerator
    }

    #[inline]
    pub fn denom(&self) -> &BigInt {
        &self.denominator
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.numerator, self.denominator)
    }

    /// True when the value is a whole number.
    pub fn is_integer(&self) -> bool {
        self.numerator.is_zero() || self.denominator.is_one()
    }

    /// The integral value, or `None` if this is a proper fraction.
    pub fn to_integer(&self) -> Option<BigInt> {
        if self.numerator.is_zero() {
            Some(BigInt::zero())
        } else if self.denominator.is_one() {
            Some(self.numerator.clone())
        } else {
            None
        }
    }

    /// `self / other`, failing when `other` is zero.
    pub fn checked_div(&self, other: &Rational) -> MathResult<Rational> {
        if other.numerator.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self::reduced(
            &self.numerator * &other.denominator,
            &self.denominator * &other.numerator,
        ))
    }
}

macro_rules! impl_from_integer {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Rational {
                fn from(value: $t) -> Self {
                    Rational::from_integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i32, i64, i128, u32, u64, u128, usize);

impl From<BigInt> for Rational {
    fn from(value: BigInt) -> Self {
        Rational::from_integer(value)
    }
}

impl From<&BigInt> for Rational {
    fn from(value: &BigInt) -> Self {
        Rational::from_integer(value.clone())
    }
}

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        &self.numerator * &other.denominator
            == &other.numerator * &self.denominator
    }
}

impl Eq for Rational {}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator.is_one() {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parse = |part: &str| {
            BigInt::from_str(part.trim())
                .map_err(|_| MathError::ParseRational(s.to_string()))
        };

        match s.split_once('/') {
            Some((numerator, denominator)) => {
                Rational::new(parse(numerator)?, parse(denominator)?)
            }
            None => parse(s).map(Rational::from_integer),
        }
    }
}

impl Serialize for Rational {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Rational {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

impl<'a> Add<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn add(self, other: &'a Rational) -> Rational {
        Rational::reduced(
            &self.numerator * &other.denominator
                + &other.numerator * &self.denominator,
            &self.denominator * &other.denominator,
        )
    }
}

impl Add for Rational {
    type Output = Rational;

    fn add(self, other: Rational) -> Rational {
        &self + &other
    }
}

impl<'a> Mul<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn mul(self, other: &'a Rational) -> Rational {
        Rational::reduced(
            &self.numerator * &other.numerator,
            &self.denominator * &other.denominator,
        )
    }
}

impl Mul for Rational {
    type Output = Rational;

    fn mul(self, other: Rational) -> Rational {
        &self * &other
    }
}

impl Neg for &Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        Rational::reduced(-&self.numerator, self.denominator.clone())
    }
}

impl Neg for Rational {
    type Output = Rational;

    fn neg(self) -> Rational {
        -&self
    }
}

impl<'a> Sub<&'a Rational> for &'a Rational {
    type Output = Rational;

    fn sub(self, other: &'a Rational) -> Rational {
        self + &(-other)
    }
}

impl Sub for Rational {
    type Output = Rational;

    fn sub(self, other: Rational) -> Rational {
        &self - &other
    }
}

impl Zero for Rational {
    fn zero() -> Self {
        Rational::from_integer(BigInt::zero())
    }

    fn is_zero(&self) -> bool {
        self.numerator.is_zero()
    }
}

impl One for Rational {
    fn one() -> Self {
        Rational::from_integer(BigInt::one())
    }
}

impl Sum for Rational {
    fn sum<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::zero(), |acc, term| &acc + &term)
    }
}

impl Product for Rational {
    fn product<I: Iterator<Item = Rational>>(iter: I) -> Self {
        iter.fold(Rational::one(), |acc, term| &acc * &term)
    }
}
