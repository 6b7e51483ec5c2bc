//! Guided Derivation Engine - Rates from operational counts.
//!
//! Each rate is a simple, interpretable heuristic over the guided inputs
//! rather than a statistical estimate. Every result is clamped to a range
//! that keeps downstream cost figures plausible.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::numeric::{floor_one, non_negative};
use crate::domain::foundation::RatePct;
use crate::domain::inputs::{
    GuidedInputSet, InputSet, ProjectionDefaults, DEFAULT_QUERIES_PER_CUSTOMER,
};

/// Scaling applied to the stale-article share when estimating conflicts.
const CONFLICT_SCALE: f64 = 0.55;

/// Scaling applied to the stale-article share when estimating rework.
const REWORK_SCALE: f64 = 0.8;

/// Churn rate used when no bad responses reach any customer.
const FALLBACK_CHURN_RATE: f64 = 5.0;

/// Guided mode observes churn mentions over six months.
const CHURN_MENTION_ANNUALIZATION: f64 = 2.0;

/// Rates derived from a guided input set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DerivedRates {
    pub conflict_rate: RatePct,
    pub deflection_failure_rate: RatePct,
    pub hallucination_rate: RatePct,
    pub churn_rate: RatePct,
    pub rework_caused_rate: RatePct,
    /// Whole queries per day, as transferred to expert mode.
    pub daily_queries: f64,
}

/// Engine for turning guided counts into the rates the cost model consumes.
pub struct GuidedDerivationEngine;

impl GuidedDerivationEngine {
    /// Derives every rate at once.
    pub fn derive(guided: &GuidedInputSet) -> DerivedRates {
        let conflict_rate = Self::derive_conflict_rate(guided);
        let hallucination_rate = Self::derive_hallucination_rate(guided);

        DerivedRates {
            conflict_rate,
            deflection_failure_rate: Self::derive_deflection_failure_rate(guided),
            hallucination_rate,
            churn_rate: Self::churn_rate_from(guided, conflict_rate, hallucination_rate),
            rework_caused_rate: Self::derive_rework_caused_rate(guided),
            daily_queries: guided.daily_queries().round(),
        }
    }

    /// Conflict rate in [3, 90].
    ///
    /// Stale-article share, scaled by contributor count and review maturity.
    pub fn derive_conflict_rate(guided: &GuidedInputSet) -> RatePct {
        let stale_pct = guided.stale_fraction() * 100.0;
        let raw = stale_pct
            * Self::contributor_factor(guided.contributors)
            * guided.review_process.conflict_factor()
            * CONFLICT_SCALE;

        RatePct::new(raw.round().clamp(3.0, 90.0))
    }

    /// More contributors means more divergent edits.
    pub fn contributor_factor(contributors: f64) -> f64 {
        let contributors = non_negative(contributors);
        if contributors <= 2.0 {
            0.8
        } else if contributors <= 5.0 {
            1.0
        } else if contributors <= 10.0 {
            1.15
        } else {
            1.3
        }
    }

    /// Deflection failure rate in [0, 80]: tickets raised after an AI conversation.
    pub fn derive_deflection_failure_rate(guided: &GuidedInputSet) -> RatePct {
        let rate = non_negative(guided.ai_tickets) / guided.conversation_base() * 100.0;
        RatePct::new(rate.round().min(80.0))
    }

    /// Hallucination rate in [10, 95].
    ///
    /// Wrong-answer tickets are scaled by the silent multiplier to account for
    /// users who got a bad answer and never said so.
    pub fn derive_hallucination_rate(guided: &GuidedInputSet) -> RatePct {
        let estimated = non_negative(guided.wrong_tickets) * guided.effective_silent_multiplier();
        let rate = estimated / guided.conversation_base() * 100.0;
        RatePct::new(rate.round().clamp(10.0, 95.0))
    }

    /// AI-attributable churn rate in [1, 80].
    pub fn derive_churn_rate(guided: &GuidedInputSet) -> RatePct {
        Self::churn_rate_from(
            guided,
            Self::derive_conflict_rate(guided),
            Self::derive_hallucination_rate(guided),
        )
    }

    /// Churn rate given already-derived conflict and hallucination rates.
    ///
    /// # Edge Cases
    /// - Customers floored at 1, so a missing count still yields a rate
    /// - No bad responses per year: falls back to 5%
    pub fn churn_rate_from(
        guided: &GuidedInputSet,
        conflict_rate: RatePct,
        hallucination_rate: RatePct,
    ) -> RatePct {
        let bad_per_year = guided.daily_queries()
            * conflict_rate.as_fraction()
            * hallucination_rate.as_fraction()
            * 365.0;
        let impacted = floor_one(guided.customers).min(bad_per_year / DEFAULT_QUERIES_PER_CUSTOMER);
        let annualized_mentions = non_negative(guided.churn_mentions) * CHURN_MENTION_ANNUALIZATION;

        let rate = if impacted > 0.0 {
            (annualized_mentions / impacted * 100.0).round().min(80.0)
        } else {
            FALLBACK_CHURN_RATE
        };

        RatePct::new(rate.max(1.0))
    }

    /// Share of rework hours caused by conflicts, in [20, 90].
    pub fn derive_rework_caused_rate(guided: &GuidedInputSet) -> RatePct {
        let rate = guided.stale_fraction() * 100.0 * REWORK_SCALE;
        RatePct::new(rate.round().clamp(20.0, 90.0))
    }

    /// Explains the conflict-rate inputs, e.g. "40% stale × no process × 3 contributors".
    ///
    /// The stale share is reported as entered, so a stale count above the
    /// article total shows as more than 100%.
    pub fn explain_conflict(guided: &GuidedInputSet) -> String {
        format!(
            "{}% stale × {} × {} contributors",
            (non_negative(guided.stale_articles) / guided.article_base() * 100.0).round(),
            guided.review_process.label(),
            non_negative(guided.contributors)
        )
    }

    /// Projects guided inputs and their derived rates into an expert input set.
    ///
    /// This is a one-time transfer; the result is an ordinary `InputSet` the
    /// caller may edit further.
    pub fn project(
        guided: &GuidedInputSet,
        derived: &DerivedRates,
        defaults: &ProjectionDefaults,
    ) -> InputSet {
        InputSet {
            daily_queries: derived.daily_queries,
            customers: non_negative(guided.customers),
            queries_per_customer: non_negative(defaults.queries_per_customer),
            conflict_rate: derived.conflict_rate,
            hallucination_rate: derived.hallucination_rate,
            deflection_failure_rate: derived.deflection_failure_rate,
            churn_rate: derived.churn_rate,
            rework_caused_rate: derived.rework_caused_rate,
            revenue_at_risk_pct: RatePct::new(defaults.revenue_at_risk_pct),
            attribution_weight_pct: RatePct::new(defaults.attribution_weight_pct),
            cost_per_escalation: non_negative(guided.cost_per_ticket),
            account_value: non_negative(guided.account_value),
            rework_hours_per_month: non_negative(guided.rework_hours),
            rework_hourly_rate: non_negative(guided.rework_rate),
            monthly_platform_cost: non_negative(guided.platform_cost),
            setup_cost: non_negative(guided.setup_cost),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ReviewProcessLevel;
    use crate::domain::inputs::IndustryPreset;

    fn stale_kb(stale: f64, total: f64, contributors: f64, process: ReviewProcessLevel) -> GuidedInputSet {
        GuidedInputSet {
            total_articles: total,
            stale_articles: stale,
            contributors,
            review_process: process,
            ..Default::default()
        }
    }

    #[test]
    fn conflict_rate_worked_example() {
        // 0.4 × 100 × 1.0 × 1.3 × 0.55 = 28.6
        let guided = stale_kb(80.0, 200.0, 3.0, ReviewProcessLevel::None);
        assert_eq!(GuidedDerivationEngine::derive_conflict_rate(&guided).value(), 29.0);
    }

    #[test]
    fn conflict_rate_floors_at_three() {
        let guided = stale_kb(0.0, 200.0, 1.0, ReviewProcessLevel::Formal);
        assert_eq!(GuidedDerivationEngine::derive_conflict_rate(&guided).value(), 3.0);
    }

    #[test]
    fn conflict_rate_caps_at_ninety() {
        // 100 × 1.3 × 1.3 × 0.55 = 92.95
        let guided = stale_kb(500.0, 500.0, 40.0, ReviewProcessLevel::None);
        assert_eq!(GuidedDerivationEngine::derive_conflict_rate(&guided).value(), 90.0);
    }

    #[test]
    fn conflict_rate_caps_stale_at_total() {
        let over = stale_kb(900.0, 100.0, 3.0, ReviewProcessLevel::Informal);
        let full = stale_kb(100.0, 100.0, 3.0, ReviewProcessLevel::Informal);
        assert_eq!(
            GuidedDerivationEngine::derive_conflict_rate(&over),
            GuidedDerivationEngine::derive_conflict_rate(&full)
        );
    }

    #[test]
    fn contributor_factor_steps() {
        assert_eq!(GuidedDerivationEngine::contributor_factor(0.0), 0.8);
        assert_eq!(GuidedDerivationEngine::contributor_factor(2.0), 0.8);
        assert_eq!(GuidedDerivationEngine::contributor_factor(3.0), 1.0);
        assert_eq!(GuidedDerivationEngine::contributor_factor(5.0), 1.0);
        assert_eq!(GuidedDerivationEngine::contributor_factor(6.0), 1.15);
        assert_eq!(GuidedDerivationEngine::contributor_factor(10.0), 1.15);
        assert_eq!(GuidedDerivationEngine::contributor_factor(11.0), 1.3);
    }

    #[test]
    fn deflection_failure_worked_example() {
        let guided = GuidedInputSet {
            ai_conversations: 3000.0,
            ai_tickets: 180.0,
            ..Default::default()
        };
        assert_eq!(GuidedDerivationEngine::derive_deflection_failure_rate(&guided).value(), 6.0);
    }

    #[test]
    fn deflection_failure_caps_at_eighty() {
        let guided = GuidedInputSet {
            ai_conversations: 0.0,
            ai_tickets: 50.0,
            ..Default::default()
        };
        assert_eq!(GuidedDerivationEngine::derive_deflection_failure_rate(&guided).value(), 80.0);
    }

    #[test]
    fn hallucination_rate_applies_silent_multiplier() {
        // 60 × 7 / 3000 = 14%
        let guided = GuidedInputSet {
            ai_conversations: 3000.0,
            wrong_tickets: 60.0,
            silent_multiplier: 7.0,
            ..Default::default()
        };
        assert_eq!(GuidedDerivationEngine::derive_hallucination_rate(&guided).value(), 14.0);
    }

    #[test]
    fn hallucination_rate_floors_multiplier_and_rate() {
        // Multiplier 0 is treated as 1; 60 / 3000 = 2% floors to 10%.
        let guided = GuidedInputSet {
            ai_conversations: 3000.0,
            wrong_tickets: 60.0,
            silent_multiplier: 0.0,
            ..Default::default()
        };
        assert_eq!(GuidedDerivationEngine::derive_hallucination_rate(&guided).value(), 10.0);
    }

    #[test]
    fn churn_rate_smb_profile_caps_at_eighty() {
        // 100/day × 0.29 × 0.14 × 365 = 1481.9 bad/yr, 7.41 impacted, 6 mentions/yr
        let guided = IndustryPreset::Smb.guided_inputs();
        assert_eq!(GuidedDerivationEngine::derive_churn_rate(&guided).value(), 80.0);
    }

    #[test]
    fn churn_rate_falls_back_without_bad_responses() {
        // No conversations means zero bad responses per year
        let guided = GuidedInputSet {
            customers: 150.0,
            ai_conversations: 0.0,
            churn_mentions: 10.0,
            ..Default::default()
        };
        assert_eq!(GuidedDerivationEngine::derive_churn_rate(&guided).value(), 5.0);
    }

    #[test]
    fn churn_rate_floors_customers_at_one() {
        // 1481.9 bad/yr reaches min(1, 7.41) = 1 customer; 20 mentions/yr caps at 80
        let guided = GuidedInputSet {
            customers: 0.0,
            churn_mentions: 10.0,
            ..IndustryPreset::Smb.guided_inputs()
        };
        assert_eq!(GuidedDerivationEngine::derive_churn_rate(&guided).value(), 80.0);
    }

    #[test]
    fn churn_rate_floors_at_one() {
        let guided = GuidedInputSet {
            total_articles: 100.0,
            stale_articles: 100.0,
            contributors: 20.0,
            ai_conversations: 300_000.0,
            wrong_tickets: 100_000.0,
            customers: 5000.0,
            churn_mentions: 0.0,
            ..Default::default()
        };
        assert_eq!(GuidedDerivationEngine::derive_churn_rate(&guided).value(), 1.0);
    }

    #[test]
    fn rework_caused_rate_bounds() {
        let none = stale_kb(0.0, 100.0, 1.0, ReviewProcessLevel::None);
        assert_eq!(GuidedDerivationEngine::derive_rework_caused_rate(&none).value(), 20.0);

        let half = stale_kb(50.0, 100.0, 1.0, ReviewProcessLevel::None);
        assert_eq!(GuidedDerivationEngine::derive_rework_caused_rate(&half).value(), 40.0);

        let all = stale_kb(100.0, 100.0, 1.0, ReviewProcessLevel::None);
        assert_eq!(GuidedDerivationEngine::derive_rework_caused_rate(&all).value(), 80.0);
    }

    #[test]
    fn derive_composes_individual_rates() {
        let guided = IndustryPreset::Smb.guided_inputs();
        let derived = GuidedDerivationEngine::derive(&guided);

        assert_eq!(derived.conflict_rate.value(), 29.0);
        assert_eq!(derived.deflection_failure_rate.value(), 6.0);
        assert_eq!(derived.hallucination_rate.value(), 14.0);
        assert_eq!(derived.churn_rate, GuidedDerivationEngine::derive_churn_rate(&guided));
        assert_eq!(derived.rework_caused_rate.value(), 32.0);
        assert_eq!(derived.daily_queries, 100.0);
    }

    #[test]
    fn daily_queries_are_rounded_for_transfer() {
        let guided = GuidedInputSet {
            ai_conversations: 1000.0,
            ..Default::default()
        };
        assert_eq!(GuidedDerivationEngine::derive(&guided).daily_queries, 33.0);
    }

    #[test]
    fn explain_conflict_describes_inputs() {
        let guided = stale_kb(80.0, 200.0, 3.0, ReviewProcessLevel::None);
        assert_eq!(
            GuidedDerivationEngine::explain_conflict(&guided),
            "40% stale × no process × 3 contributors"
        );
    }

    #[test]
    fn explain_conflict_reports_uncapped_stale_share() {
        let guided = stale_kb(900.0, 100.0, 30.0, ReviewProcessLevel::Formal);
        assert_eq!(
            GuidedDerivationEngine::explain_conflict(&guided),
            "900% stale × formal review × 30 contributors"
        );
        assert_eq!(GuidedDerivationEngine::derive_conflict_rate(&guided).value(), 46.0);
    }

    #[test]
    fn project_transfers_figures_and_defaults() {
        let guided = IndustryPreset::Smb.guided_inputs();
        let derived = GuidedDerivationEngine::derive(&guided);
        let inputs = GuidedDerivationEngine::project(&guided, &derived, &ProjectionDefaults::default());

        assert_eq!(inputs.daily_queries, 100.0);
        assert_eq!(inputs.customers, 150.0);
        assert_eq!(inputs.queries_per_customer, 200.0);
        assert_eq!(inputs.conflict_rate, derived.conflict_rate);
        assert_eq!(inputs.churn_rate, derived.churn_rate);
        assert_eq!(inputs.cost_per_escalation, 35.0);
        assert_eq!(inputs.account_value, 800.0);
        assert_eq!(inputs.rework_hours_per_month, 20.0);
        assert_eq!(inputs.rework_hourly_rate, 40.0);
        assert_eq!(inputs.monthly_platform_cost, 800.0);
        assert_eq!(inputs.setup_cost, 2000.0);
        assert_eq!(inputs.revenue_at_risk_pct.value(), 100.0);
        assert_eq!(inputs.attribution_weight_pct.value(), 15.0);
    }
}
