//! InputSet - the expert-mode figures a cost estimate is computed from.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::numeric::{deserialize_non_negative, non_negative};
use crate::domain::foundation::{RatePct, SensitivityDimension};

/// Scale, rate and cost inputs for one estimate.
///
/// Missing or unreadable fields deserialize to zero. Scale and cost figures
/// are additionally coerced to non-negative finite values wherever they are
/// consumed, so a struct built in code with stray values is still safe.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputSet {
    // Scale
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub daily_queries: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub customers: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub queries_per_customer: f64,

    // Rates
    pub conflict_rate: RatePct,
    pub hallucination_rate: RatePct,
    pub deflection_failure_rate: RatePct,
    pub churn_rate: RatePct,
    pub rework_caused_rate: RatePct,
    pub revenue_at_risk_pct: RatePct,
    /// Displayed alongside churn cost but not applied to it; the attribution
    /// assumption is already folded into `churn_rate`.
    pub attribution_weight_pct: RatePct,

    // Costs
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub cost_per_escalation: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub account_value: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub rework_hours_per_month: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub rework_hourly_rate: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub monthly_platform_cost: f64,
    #[serde(deserialize_with = "deserialize_non_negative")]
    pub setup_cost: f64,
}

impl InputSet {
    /// Returns the stored rate for a sensitivity dimension.
    pub fn rate_for(&self, dimension: SensitivityDimension) -> RatePct {
        match dimension {
            SensitivityDimension::Hallucination => self.hallucination_rate,
            SensitivityDimension::Deflection => self.deflection_failure_rate,
            SensitivityDimension::Churn => self.churn_rate,
        }
    }

    /// Platform subscription cost over twelve months.
    pub fn annual_platform_cost(&self) -> f64 {
        non_negative(self.monthly_platform_cost) * 12.0
    }
}
