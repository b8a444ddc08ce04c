pub use crate::{int_poly, rat};
pub use crate::{
    error::{MathError, MathResult},
    polynomial::IntPolynomial,
    rational::Rational,
};
