//! IndustryPreset enum: starting figures for typical company profiles.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::GuidedInputSet;
use crate::domain::foundation::{ReviewProcessLevel, ValidationError};

/// Typical company profiles used to pre-fill guided mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IndustryPreset {
    Smb,
    MidMarket,
    Enterprise,
}

impl IndustryPreset {
    /// Returns all presets from smallest to largest.
    pub fn all() -> &'static [IndustryPreset] {
        &[
            IndustryPreset::Smb,
            IndustryPreset::MidMarket,
            IndustryPreset::Enterprise,
        ]
    }

    /// Returns the display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            IndustryPreset::Smb => "SMB",
            IndustryPreset::MidMarket => "Mid-Market",
            IndustryPreset::Enterprise => "Enterprise",
        }
    }

    /// Builds the guided inputs for this profile. Review process starts at none.
    pub fn guided_inputs(&self) -> GuidedInputSet {
        match self {
            IndustryPreset::Smb => GuidedInputSet {
                total_articles: 200.0,
                stale_articles: 80.0,
                contributors: 3.0,
                review_process: ReviewProcessLevel::None,
                ai_conversations: 3000.0,
                ai_tickets: 180.0,
                wrong_tickets: 60.0,
                silent_multiplier: 7.0,
                cost_per_ticket: 35.0,
                customers: 150.0,
                account_value: 800.0,
                churn_mentions: 3.0,
                total_churned: 15.0,
                rework_hours: 20.0,
                rework_rate: 40.0,
                platform_cost: 800.0,
                setup_cost: 2000.0,
            },
            IndustryPreset::MidMarket => GuidedInputSet {
                total_articles: 600.0,
                stale_articles: 250.0,
                contributors: 10.0,
                review_process: ReviewProcessLevel::None,
                ai_conversations: 18000.0,
                ai_tickets: 1200.0,
                wrong_tickets: 420.0,
                silent_multiplier: 7.0,
                cost_per_ticket: 50.0,
                customers: 1200.0,
                account_value: 8000.0,
                churn_mentions: 18.0,
                total_churned: 80.0,
                rework_hours: 60.0,
                rework_rate: 65.0,
                platform_cost: 5000.0,
                setup_cost: 10000.0,
            },
            IndustryPreset::Enterprise => GuidedInputSet {
                total_articles: 2000.0,
                stale_articles: 900.0,
                contributors: 30.0,
                review_process: ReviewProcessLevel::None,
                ai_conversations: 80000.0,
                ai_tickets: 5600.0,
                wrong_tickets: 2000.0,
                silent_multiplier: 7.0,
                cost_per_ticket: 75.0,
                customers: 400.0,
                account_value: 60000.0,
                churn_mentions: 12.0,
                total_churned: 30.0,
                rework_hours: 200.0,
                rework_rate: 90.0,
                platform_cost: 15000.0,
                setup_cost: 25000.0,
            },
        }
    }
}

impl fmt::Display for IndustryPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for IndustryPreset {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "smb" => Ok(IndustryPreset::Smb),
            "mid" | "mid_market" | "mid-market" => Ok(IndustryPreset::MidMarket),
            "ent" | "enterprise" => Ok(IndustryPreset::Enterprise),
            other => Err(ValidationError::invalid_format(
                "industry_preset",
                format!("unknown preset '{}'", other),
            )),
        }
    }
}
