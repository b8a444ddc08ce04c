use std::fmt;

use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::traits::PointSource;

/// One share: a point `(x, y)` on the secret polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    pub fn into_parts(self) -> (BigInt, BigInt) {
        (self.x, self.y)
    }
}

impl PointSource for Point {
    fn x(&self) -> &BigInt {
        &self.x
    }

    fn y(&self) -> &BigInt {
        &self.y
    }
}

impl<X, Y> From<(X, Y)> for Point
where
    X: Into<BigInt>,
    Y: Into<BigInt>,
{
    fn from((x, y): (X, Y)) -> Self {
        Point::new(x, y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
