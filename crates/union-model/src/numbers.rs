//! Arbitrary-precision numeric text with a single canonical rendering.
//!
//! Numbers cross the wire as JSON strings, never as native number tokens, so
//! independently implemented readers agree byte-for-byte and no precision is
//! lost. Reads are lenient (scientific notation, trailing zeros, signed
//! zero, legacy number tokens); writes always emit the canonical plain form:
//! no exponent, no trailing fractional zeros, zero is exactly `0`.
//!
//! Values store their canonical text directly; because the canonical form is
//! unique per numeric value, derived equality and hashing coincide with
//! numeric equality.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::errors::NumberParseError;

/// Upper bound on zero padding to either side of the point when expanding an
/// exponent into plain digits. Exponents past this cannot render at a
/// practical size and fail as [`NumberParseError::ExponentOverflow`] instead
/// of exhausting memory.
const EXPANSION_DIGITS_MAX: u64 = 65_536;

/// Arbitrary-precision integer in canonical decimal text.
///
/// Canonical form: optional `-`, no leading zeros beyond a single `0`, and
/// zero carries no sign.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigInteger(String);

impl BigInteger {
    /// Parses lenient integer text (`+` sign, leading zeros, `-0`) into the
    /// canonical form. Pure normalization; no rounding.
    pub fn parse(raw: &str) -> Result<Self, NumberParseError> {
        let re = Regex::new(r"^[+-]?[0-9]+$").expect("invalid regex");
        if !re.is_match(raw) {
            return Err(NumberParseError::Malformed {
                value: raw.to_string(),
            });
        }
        let (negative, body) = split_sign(raw);
        let digits = body.trim_start_matches('0');
        if digits.is_empty() {
            return Ok(Self("0".to_string()));
        }
        Ok(Self(if negative {
            format!("-{digits}")
        } else {
            digits.to_string()
        }))
    }

    /// Canonical decimal text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BigInteger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BigInteger {
    type Err = NumberParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl From<u64> for BigInteger {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for BigInteger {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

impl From<u32> for BigInteger {
    fn from(value: u32) -> Self {
        Self(value.to_string())
    }
}

/// Arbitrary-precision decimal in canonical plain text.
///
/// Canonical form: fully expanded digits with no exponent, no trailing
/// fractional zeros, at most one leading `0` (before the point), no trailing
/// point, and all zero values collapsed to `0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BigDecimal(String);

impl BigDecimal {
    /// Parses lenient decimal text into the canonical form.
    ///
    /// Accepts plain and scientific notation, trailing zeros, a missing
    /// integer or fraction part (`.5`, `5.`), and signs of zero; all inputs
    /// that denote the same number normalize to the same text.
    pub fn parse(raw: &str) -> Result<Self, NumberParseError> {
        let re = Regex::new(r"^[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?$")
            .expect("invalid regex");
        if !re.is_match(raw) {
            return Err(NumberParseError::Malformed {
                value: raw.to_string(),
            });
        }
        let overflow = || NumberParseError::ExponentOverflow {
            value: raw.to_string(),
        };

        let (negative, body) = split_sign(raw);
        let (mantissa, exponent) = match body.find(['e', 'E']) {
            Some(at) => {
                let exponent: i64 = body[at + 1..].parse().map_err(|_| overflow())?;
                (&body[..at], exponent)
            }
            None => (body, 0),
        };
        let (int_part, frac_part) = match mantissa.find('.') {
            Some(at) => (&mantissa[..at], &mantissa[at + 1..]),
            None => (mantissa, ""),
        };

        // Unscaled digit string plus a base-10 scale; scale > 0 means the
        // point sits `scale` digits from the right.
        let joined = [int_part, frac_part].concat();
        let stripped = joined.trim_start_matches('0');
        if stripped.is_empty() {
            return Ok(Self("0".to_string()));
        }
        let mut digits = stripped.to_string();
        let mut scale = (frac_part.len() as i64)
            .checked_sub(exponent)
            .ok_or_else(overflow)?;
        if scale.unsigned_abs() > EXPANSION_DIGITS_MAX {
            return Err(overflow());
        }

        // Minimal scale: trailing fractional zeros carry no value.
        while scale > 0 && digits.ends_with('0') {
            digits.pop();
            scale -= 1;
        }
        if scale < 0 {
            digits.push_str(&"0".repeat(scale.unsigned_abs() as usize));
            scale = 0;
        }

        let unsigned = if scale == 0 {
            digits
        } else {
            let scale = scale as usize;
            if digits.len() > scale {
                let split = digits.len() - scale;
                format!("{}.{}", &digits[..split], &digits[split..])
            } else {
                format!("0.{}{}", "0".repeat(scale - digits.len()), digits)
            }
        };
        Ok(Self(if negative {
            format!("-{unsigned}")
        } else {
            unsigned
        }))
    }

    /// Canonical decimal text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BigDecimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for BigDecimal {
    type Err = NumberParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::parse(raw)
    }
}

impl From<u64> for BigDecimal {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

impl From<i64> for BigDecimal {
    fn from(value: i64) -> Self {
        Self(value.to_string())
    }
}

fn split_sign(raw: &str) -> (bool, &str) {
    match raw.as_bytes().first() {
        Some(b'-') => (true, &raw[1..]),
        Some(b'+') => (false, &raw[1..]),
        _ => (false, raw),
    }
}

impl Serialize for BigInteger {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BigInteger {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigIntegerVisitor)
    }
}

struct BigIntegerVisitor;

impl Visitor<'_> for BigIntegerVisitor {
    type Value = BigInteger;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an integer string or integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        BigInteger::parse(v).map_err(E::custom)
    }

    // Legacy writers emitted native JSON numbers; keep accepting them.
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigInteger::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigInteger::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(BigInteger(v.to_string()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(BigInteger(v.to_string()))
    }
}

impl Serialize for BigDecimal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for BigDecimal {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(BigDecimalVisitor)
    }
}

struct BigDecimalVisitor;

impl Visitor<'_> for BigDecimalVisitor {
    type Value = BigDecimal;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a decimal string or number")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        BigDecimal::parse(v).map_err(E::custom)
    }

    // Legacy writers emitted native JSON numbers; keep accepting them.
    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(BigDecimal::from(v))
    }

    fn visit_u128<E: de::Error>(self, v: u128) -> Result<Self::Value, E> {
        Ok(BigDecimal(v.to_string()))
    }

    fn visit_i128<E: de::Error>(self, v: i128) -> Result<Self::Value, E> {
        Ok(BigDecimal(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        // Non-finite values fall out as Malformed.
        BigDecimal::parse(&v.to_string()).map_err(E::custom)
    }
}
