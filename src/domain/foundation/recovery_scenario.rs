//! RecoveryScenario enum: named presets of achievable cost recovery.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// Fractions of each cost category assumed recoverable by fixing the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RecoveryFractions {
    pub escalation: f64,
    pub churn: f64,
    pub rework: f64,
}

/// Named recovery preset. Selecting one is a pure lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryScenario {
    Conservative,
    #[default]
    Base,
    Aggressive,
}

impl RecoveryScenario {
    /// Returns all scenarios from least to most optimistic.
    pub fn all() -> &'static [RecoveryScenario] {
        &[
            RecoveryScenario::Conservative,
            RecoveryScenario::Base,
            RecoveryScenario::Aggressive,
        ]
    }

    /// Returns the per-category recovery fractions for this scenario.
    pub fn fractions(&self) -> RecoveryFractions {
        match self {
            RecoveryScenario::Conservative => RecoveryFractions {
                escalation: 0.50,
                churn: 0.35,
                rework: 0.50,
            },
            RecoveryScenario::Base => RecoveryFractions {
                escalation: 0.70,
                churn: 0.55,
                rework: 0.65,
            },
            RecoveryScenario::Aggressive => RecoveryFractions {
                escalation: 0.90,
                churn: 0.75,
                rework: 0.85,
            },
        }
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self {
            RecoveryScenario::Conservative => "Conservative",
            RecoveryScenario::Base => "Base Case",
            RecoveryScenario::Aggressive => "Aggressive",
        }
    }
}

impl fmt::Display for RecoveryScenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for RecoveryScenario {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "conservative" | "cons" => Ok(RecoveryScenario::Conservative),
            "base" | "base_case" => Ok(RecoveryScenario::Base),
            "aggressive" | "agg" => Ok(RecoveryScenario::Aggressive),
            other => Err(ValidationError::invalid_format(
                "recovery_scenario",
                format!("unknown scenario '{}'", other),
            )),
        }
    }
}
