//! Exact arithmetic over arbitrary-precision integers.

pub mod error;
pub mod macros;
pub mod polynomial;
pub mod prelude;
pub mod rational;

pub use error::{MathError, MathResult};
pub use polynomial::IntPolynomial;
pub use rational::Rational;

#[doc(hidden)]
pub use num_bigint;
