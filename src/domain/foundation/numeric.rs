//! Fail-soft numeric coercion.
//!
//! User-entered figures arrive as whatever the caller had at hand: numbers,
//! partially typed strings, blanks. None of that is an error here. Anything
//! that cannot be read as a finite number becomes zero.

use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use std::fmt;

/// Parses the leading numeric portion of a string, returning 0 when none exists.
///
/// `"12.5"` -> 12.5, `"40abc"` -> 40, `"  7e2 "` -> 700, `"abc"` -> 0, `""` -> 0.
pub fn parse_soft(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if let Ok(value) = trimmed.parse::<f64>() {
        return finite_or_zero(value);
    }

    let prefix = leading_number(trimmed);
    prefix.parse::<f64>().map(finite_or_zero).unwrap_or(0.0)
}

/// Replaces NaN and infinities with zero.
pub fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Coerces a scale or cost figure to a finite, non-negative value.
pub fn non_negative(value: f64) -> f64 {
    finite_or_zero(value).max(0.0)
}

/// Returns the value floored at 1, for use as a denominator.
pub fn floor_one(value: f64) -> f64 {
    non_negative(value).max(1.0)
}

/// Longest prefix of `s` shaped like `[+-]digits[.digits][e[+-]digits]`.
fn leading_number(s: &str) -> &str {
    let bytes = s.as_bytes();
    let mut end = 0;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return "";
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    &s[..end]
}

/// A number read without complaint from any self-describing format.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SoftNumber(pub f64);

impl From<SoftNumber> for f64 {
    fn from(value: SoftNumber) -> Self {
        value.0
    }
}

struct SoftNumberVisitor;

impl<'de> Visitor<'de> for SoftNumberVisitor {
    type Value = SoftNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(SoftNumber(finite_or_zero(v)))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(SoftNumber(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(SoftNumber(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(SoftNumber(parse_soft(v)))
    }

    fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
        Ok(SoftNumber(0.0))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SoftNumber(0.0))
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(SoftNumber(0.0))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(SoftNumberVisitor)
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        while seq.next_element::<de::IgnoredAny>()?.is_some() {}
        Ok(SoftNumber(0.0))
    }

    fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
        while map.next_entry::<de::IgnoredAny, de::IgnoredAny>()?.is_some() {}
        Ok(SoftNumber(0.0))
    }
}

impl<'de> Deserialize<'de> for SoftNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SoftNumberVisitor)
    }
}

/// `deserialize_with` helper for non-negative scale and cost fields.
pub fn deserialize_non_negative<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    SoftNumber::deserialize(deserializer).map(|n| non_negative(n.0))
}
