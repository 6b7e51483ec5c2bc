//! SensitivityDimension enum: the secondary axis of the sensitivity table.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// A rate that can be overridden for one cost computation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SensitivityDimension {
    Hallucination,
    Deflection,
    #[default]
    Churn,
}

impl SensitivityDimension {
    /// Returns all dimensions.
    pub fn all() -> &'static [SensitivityDimension] {
        &[
            SensitivityDimension::Hallucination,
            SensitivityDimension::Deflection,
            SensitivityDimension::Churn,
        ]
    }

    /// Upper bound for values projected along this dimension.
    pub fn cap(&self) -> f64 {
        match self {
            SensitivityDimension::Hallucination => 95.0,
            SensitivityDimension::Deflection => 80.0,
            SensitivityDimension::Churn => 80.0,
        }
    }

    /// Returns the short column label.
    pub fn label(&self) -> &'static str {
        match self {
            SensitivityDimension::Hallucination => "Hall. Rate",
            SensitivityDimension::Deflection => "Esc. Rate",
            SensitivityDimension::Churn => "Churn Rate",
        }
    }
}

impl fmt::Display for SensitivityDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SensitivityDimension {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hallucination" | "hall" => Ok(SensitivityDimension::Hallucination),
            "deflection" | "esc" | "escalation" => Ok(SensitivityDimension::Deflection),
            "churn" => Ok(SensitivityDimension::Churn),
            other => Err(ValidationError::invalid_format(
                "sensitivity_dimension",
                format!("unknown dimension '{}'", other),
            )),
        }
    }
}
