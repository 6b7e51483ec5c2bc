//! Rate value object (percent on a 0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::numeric::{finite_or_zero, SoftNumber};
use super::ValidationError;

/// A percentage between 0 and 100 inclusive, stored as a float.
///
/// Construction never fails: out-of-range values clamp and non-finite values
/// become zero. Use [`RatePct::try_new`] where a strict check is wanted.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(into = "f64", from = "SoftNumber")]
pub struct RatePct(f64);

impl RatePct {
    /// Zero percent.
    pub const ZERO: Self = Self(0.0);

    /// One hundred percent.
    pub const HUNDRED: Self = Self(100.0);

    /// Creates a new rate, clamping to the valid range.
    pub fn new(value: f64) -> Self {
        Self(finite_or_zero(value).clamp(0.0, 100.0))
    }

    /// Creates a rate, returning an error if out of range or not finite.
    pub fn try_new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::out_of_range("rate", 0.0, 100.0, value));
        }
        Ok(Self(value))
    }

    /// Returns the percent value.
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Returns the value as a fraction (0.0 to 1.0).
    pub fn as_fraction(&self) -> f64 {
        self.0 / 100.0
    }
}

impl From<SoftNumber> for RatePct {
    fn from(value: SoftNumber) -> Self {
        Self::new(value.0)
    }
}

impl From<RatePct> for f64 {
    fn from(value: RatePct) -> Self {
        value.0
    }
}

impl fmt::Display for RatePct {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
