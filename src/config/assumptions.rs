//! Estimation assumptions configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::analysis::DEFAULT_RATIO_THRESHOLD;
use crate::domain::foundation::{
    RatePct, RecoveryScenario, SensitivityDimension, UsageDistribution,
};
use crate::domain::inputs::{ProjectionDefaults, DEFAULT_QUERIES_PER_CUSTOMER};

/// Starting assumptions for an estimator session
#[derive(Debug, Clone, Deserialize)]
pub struct AssumptionsConfig {
    /// Recovery scenario applied to savings
    #[serde(default)]
    pub recovery_scenario: RecoveryScenario,

    /// How bad-answer exposure spreads across customers
    #[serde(default)]
    pub usage_distribution: UsageDistribution,

    /// Secondary axis of the sensitivity table
    #[serde(default)]
    pub sensitivity_dimension: SensitivityDimension,

    /// Ratio at which the volume consistency check warns
    #[serde(default = "default_ratio_threshold")]
    pub consistency_ratio_threshold: f64,

    /// Queries per customer assumed when projecting guided inputs
    #[serde(default = "default_queries_per_customer")]
    pub queries_per_customer: f64,

    /// Share of account value at risk on churn, when projecting guided inputs
    #[serde(default = "default_revenue_at_risk_pct")]
    pub revenue_at_risk_pct: f64,

    /// Attribution weight shown with churn cost, when projecting guided inputs
    #[serde(default = "default_attribution_weight_pct")]
    pub attribution_weight_pct: f64,
}

impl AssumptionsConfig {
    /// Expert-field defaults for the guided projection
    pub fn projection_defaults(&self) -> ProjectionDefaults {
        ProjectionDefaults {
            queries_per_customer: self.queries_per_customer,
            revenue_at_risk_pct: self.revenue_at_risk_pct,
            attribution_weight_pct: self.attribution_weight_pct,
        }
    }

    /// Validate assumption values
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.consistency_ratio_threshold.is_finite() || self.consistency_ratio_threshold < 1.0 {
            return Err(ValidationError::InvalidRatioThreshold);
        }
        if !self.queries_per_customer.is_finite() || self.queries_per_customer <= 0.0 {
            return Err(ValidationError::InvalidQueriesPerCustomer);
        }
        RatePct::try_new(self.revenue_at_risk_pct)
            .map_err(|_| ValidationError::PercentageOutOfRange("revenue_at_risk_pct"))?;
        RatePct::try_new(self.attribution_weight_pct)
            .map_err(|_| ValidationError::PercentageOutOfRange("attribution_weight_pct"))?;
        Ok(())
    }
}

impl Default for AssumptionsConfig {
    fn default() -> Self {
        Self {
            recovery_scenario: RecoveryScenario::default(),
            usage_distribution: UsageDistribution::default(),
            sensitivity_dimension: SensitivityDimension::default(),
            consistency_ratio_threshold: default_ratio_threshold(),
            queries_per_customer: default_queries_per_customer(),
            revenue_at_risk_pct: default_revenue_at_risk_pct(),
            attribution_weight_pct: default_attribution_weight_pct(),
        }
    }
}

fn default_ratio_threshold() -> f64 {
    DEFAULT_RATIO_THRESHOLD
}

fn default_queries_per_customer() -> f64 {
    DEFAULT_QUERIES_PER_CUSTOMER
}

fn default_revenue_at_risk_pct() -> f64 {
    ProjectionDefaults::default().revenue_at_risk_pct
}

fn default_attribution_weight_pct() -> f64 {
    ProjectionDefaults::default().attribution_weight_pct
}
