//! ROI Calculator - Recovered savings, return and payback from a cost breakdown.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::CostBreakdown;
use crate::domain::foundation::numeric::non_negative;
use crate::domain::foundation::RecoveryScenario;

/// Time for recovered savings to cover the total investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payback {
    /// Payback after this many months.
    Months(f64),
    /// Nothing is recovered, so the investment never pays back.
    Never,
}

impl Payback {
    /// Returns the number of months, or None when payback never happens.
    pub fn months(&self) -> Option<f64> {
        match self {
            Payback::Months(m) => Some(*m),
            Payback::Never => None,
        }
    }

    /// Returns true if the investment never pays back.
    pub fn is_never(&self) -> bool {
        matches!(self, Payback::Never)
    }
}

impl fmt::Display for Payback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payback::Months(m) => write!(f, "{:.1} months", m),
            Payback::Never => write!(f, "never"),
        }
    }
}

/// Savings recovered per cost category under a scenario.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RecoveredSavings {
    pub escalation: f64,
    pub churn: f64,
    pub rework: f64,
    pub total: f64,
}

/// Return on the platform investment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoiSummary {
    pub scenario: RecoveryScenario,
    pub recovered: RecoveredSavings,
    pub annual_platform_cost: f64,
    pub setup_cost: f64,
    pub total_investment: f64,
    pub net_benefit: f64,
    /// Return on the recurring platform cost, excluding setup.
    pub recurring_roi_pct: f64,
    /// Return in the first year, including setup.
    pub year1_roi_pct: f64,
    pub payback: Payback,
}

/// Stateless ROI computation over a cost breakdown.
pub struct RoiCalculator;

impl RoiCalculator {
    /// Applies the scenario's recovery fractions to each cost category.
    pub fn recovered_savings(cost: &CostBreakdown, scenario: RecoveryScenario) -> RecoveredSavings {
        let fractions = scenario.fractions();
        let escalation = cost.escalation_cost * fractions.escalation;
        let churn = cost.churn_cost * fractions.churn;
        let rework = cost.rework_cost * fractions.rework;

        RecoveredSavings {
            escalation,
            churn,
            rework,
            total: escalation + churn + rework,
        }
    }

    /// Computes net benefit, ROI percentages and payback.
    ///
    /// # Edge Cases
    /// - Zero annual platform cost: recurring ROI is 0
    /// - Zero total investment: year-1 ROI is 0
    /// - Zero recovered savings: payback is `Payback::Never`
    pub fn compute(
        cost: &CostBreakdown,
        scenario: RecoveryScenario,
        annual_platform_cost: f64,
        setup_cost: f64,
    ) -> RoiSummary {
        let annual_platform_cost = non_negative(annual_platform_cost);
        let setup_cost = non_negative(setup_cost);
        let total_investment = annual_platform_cost + setup_cost;

        let recovered = Self::recovered_savings(cost, scenario);
        let net_benefit = recovered.total - annual_platform_cost;

        let recurring_roi_pct = if annual_platform_cost > 0.0 {
            net_benefit / annual_platform_cost * 100.0
        } else {
            0.0
        };

        let year1_roi_pct = if total_investment > 0.0 {
            (recovered.total - total_investment) / total_investment * 100.0
        } else {
            0.0
        };

        let payback = if recovered.total > 0.0 {
            Payback::Months(total_investment / recovered.total * 12.0)
        } else {
            Payback::Never
        };

        RoiSummary {
            scenario,
            recovered,
            annual_platform_cost,
            setup_cost,
            total_investment,
            net_benefit,
            recurring_roi_pct,
            year1_roi_pct,
            payback,
        }
    }
}
