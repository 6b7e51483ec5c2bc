//! UsageDistribution enum: how bad-answer exposure spreads across customers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Assumption about how evenly bad responses land across the customer base.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UsageDistribution {
    #[default]
    Uniform,
    Concentrated,
    Distributed,
}

impl UsageDistribution {
    /// Returns all distributions.
    pub fn all() -> &'static [UsageDistribution] {
        &[
            UsageDistribution::Uniform,
            UsageDistribution::Concentrated,
            UsageDistribution::Distributed,
        ]
    }

    /// Multiplier applied to the impacted-customer count.
    pub fn multiplier(&self) -> f64 {
        match self {
            UsageDistribution::Uniform => 1.0,
            UsageDistribution::Concentrated => 0.6,
            UsageDistribution::Distributed => 1.3,
        }
    }

    /// Returns true unless the distribution is uniform.
    pub fn is_adjusted(&self) -> bool {
        *self != UsageDistribution::Uniform
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            UsageDistribution::Uniform => "uniform",
            UsageDistribution::Concentrated => "concentrated",
            UsageDistribution::Distributed => "distributed",
        }
    }

    /// One-line explanation of the assumption.
    pub fn hint(&self) -> &'static str {
        match self {
            UsageDistribution::Uniform => {
                "Assumes bad responses spread evenly across users (rough estimate)"
            }
            UsageDistribution::Concentrated => {
                "Power-user skew: fewer unique customers exposed (×0.6)"
            }
            UsageDistribution::Distributed => {
                "Thin-usage base: more unique customers exposed (×1.3)"
            }
        }
    }
}

impl fmt::Display for UsageDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for UsageDistribution {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "uniform" => Ok(UsageDistribution::Uniform),
            "concentrated" => Ok(UsageDistribution::Concentrated),
            "distributed" => Ok(UsageDistribution::Distributed),
            other => Err(ValidationError::invalid_format(
                "usage_distribution",
                format!("unknown distribution '{}'", other),
            )),
        }
    }
}
