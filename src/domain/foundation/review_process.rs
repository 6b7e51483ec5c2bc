//! ReviewProcessLevel enum: maturity of the knowledge-base review process.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ValidationError;

/// How articles get reviewed before publication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReviewProcessLevel {
    #[default]
    #[serde(alias = "no")]
    None,
    Informal,
    Formal,
}

impl ReviewProcessLevel {
    /// Conflict-rate modifier for this level of governance.
    pub fn conflict_factor(&self) -> f64 {
        match self {
            ReviewProcessLevel::None => 1.3,
            ReviewProcessLevel::Informal => 1.0,
            ReviewProcessLevel::Formal => 0.65,
        }
    }

    /// Returns the phrase used in derivation explanations.
    pub fn label(&self) -> &'static str {
        match self {
            ReviewProcessLevel::None => "no process",
            ReviewProcessLevel::Informal => "informal review",
            ReviewProcessLevel::Formal => "formal review",
        }
    }
}

impl fmt::Display for ReviewProcessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for ReviewProcessLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "no" => Ok(ReviewProcessLevel::None),
            "informal" | "inf" => Ok(ReviewProcessLevel::Informal),
            "formal" | "yes" => Ok(ReviewProcessLevel::Formal),
            other => Err(ValidationError::invalid_format(
                "review_process",
                format!("unknown review process '{}'", other),
            )),
        }
    }
}
