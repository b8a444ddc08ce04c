//! Positional-notation codec for share values.
//!
//! Digits run `0-9` then `a-z` (either case), so bases 2 through 36 are
//! supported.

use std::ops::RangeInclusive;

use num_bigint::BigInt;

use crate::error::{RecoveryError, RecoveryResult};
use crate::point::Point;

/// Bases accepted by [`decode_value`] and [`encode_value`].
pub const SUPPORTED_BASES: RangeInclusive<u32> = 2..=36;

fn check_base(base: u32) -> RecoveryResult<()> {
    if SUPPORTED_BASES.contains(&base) {
        Ok(())
    } else {
        Err(RecoveryError::InvalidBase(base))
    }
}

/// Decode `value`, written in `base`, into a big integer.
///
/// An optional leading `+` or `-` is accepted. Any other character must be a
/// digit of `base`.
pub fn decode_value(value: &str, base: u32) -> RecoveryResult<BigInt> {
    check_base(base)?;

    let invalid = || RecoveryError::InvalidEncoding {
        value: value.to_string(),
        base,
    };

    let (negative, digits) = match value.as_bytes().first() {
        Some(b'-') => (true, &value[1..]),
        Some(b'+') => (false, &value[1..]),
        _ => (false, value),
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(base)) {
        return Err(invalid());
    }

    let magnitude =
        BigInt::parse_bytes(digits.as_bytes(), base).ok_or_else(invalid)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Render `value` in `base` using lowercase digits.
pub fn encode_value(value: &BigInt, base: u32) -> RecoveryResult<String> {
    check_base(base)?;
    Ok(value.to_str_radix(base))
}

/// A share as it arrives from a document: index plus an encoded value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EncodedShare {
    pub x: BigInt,
    pub base: u32,
    pub value: String,
}

impl EncodedShare {
    pub fn new(x: impl Into<BigInt>, base: u32, value: impl Into<String>) -> Self {
        Self {
            x: x.into(),
            base,
            value: value.into(),
        }
    }

    /// Decode the value and pair it with the share index.
    pub fn decode(&self) -> RecoveryResult<Point> {
        let y = decode_value(&self.value, self.base)?;
        Ok(Point::new(self.x.clone(), y))
    }
}
