//! # Base Converter
//!
//! Parses a numeric string in one [`Radix`] and renders the value in all four.
//!
//! Parsing is strict: after trimming, an optional sign and an optional
//! canonical prefix for the selected radix (in either order, so `-0x1f` and
//! `0x-1f` are the same value), every remaining character must belong to
//! that radix's alphabet. The value itself is arbitrary precision,
//! so any input length round-trips exactly.
//!
//! Rendering uses the canonical prefixes (`0b`, `0o`, `0x`) and lowercase
//! digits, with the sign in front of the prefix (`-0x1f`).

use crate::error::ConversionError;
use crate::radix::Radix;
use num_bigint::{BigInt, BigUint, Sign};
use serde::Serialize;
use std::fmt;

/// A single arbitrary-precision signed integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NumericValue(BigInt);

impl NumericValue {
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    pub fn is_negative(&self) -> bool {
        self.0.sign() == Sign::Minus
    }
}

impl From<BigInt> for NumericValue {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl fmt::Display for NumericValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// All four textual projections of one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Conversion {
    pub binary: String,
    pub octal: String,
    pub decimal: String,
    pub hexadecimal: String,
}

impl Conversion {
    pub fn from_value(value: &NumericValue) -> Self {
        Self {
            binary: render(value, Radix::Binary),
            octal: render(value, Radix::Octal),
            decimal: render(value, Radix::Decimal),
            hexadecimal: render(value, Radix::Hexadecimal),
        }
    }

    pub fn get(&self, radix: Radix) -> &str {
        match radix {
            Radix::Binary => &self.binary,
            Radix::Octal => &self.octal,
            Radix::Decimal => &self.decimal,
            Radix::Hexadecimal => &self.hexadecimal,
        }
    }
}

/// Parses `input` as a number written in `radix`.
pub fn parse(input: &str, radix: Radix) -> Result<NumericValue, ConversionError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConversionError::Empty);
    }

    let invalid = || ConversionError::InvalidDigits {
        radix,
        input: trimmed.to_string(),
    };

    // Sign and prefix may come in either order: `-0x1f` and `0x-1f`.
    let (sign, digits) = match split_sign(trimmed) {
        (Some(sign), rest) => (sign, radix.strip_prefix(rest)),
        (None, rest) => {
            let (sign, digits) = split_sign(radix.strip_prefix(rest));
            (sign.unwrap_or(Sign::Plus), digits)
        }
    };
    if digits.is_empty() || !digits.chars().all(|c| radix.accepts(c)) {
        return Err(invalid());
    }

    let magnitude = BigUint::parse_bytes(digits.as_bytes(), radix.value()).ok_or_else(invalid)?;
    Ok(NumericValue(BigInt::from_biguint(sign, magnitude)))
}

fn split_sign(text: &str) -> (Option<Sign>, &str) {
    if let Some(rest) = text.strip_prefix('-') {
        (Some(Sign::Minus), rest)
    } else if let Some(rest) = text.strip_prefix('+') {
        (Some(Sign::Plus), rest)
    } else {
        (None, text)
    }
}

/// Renders `value` with the canonical prefix of `radix` and lowercase digits.
pub fn render(value: &NumericValue, radix: Radix) -> String {
    let sign = if value.is_negative() { "-" } else { "" };
    let magnitude = value.0.magnitude().to_str_radix(radix.value());
    format!("{}{}{}", sign, radix.prefix(), magnitude)
}

/// Parses once and renders in every radix. Fails as a whole or not at all.
pub fn convert(input: &str, radix: Radix) -> Result<Conversion, ConversionError> {
    let value = parse(input, radix)?;
    Ok(Conversion::from_value(&value))
}
