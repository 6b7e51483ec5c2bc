//! Cost Model - Annual exposure from rates and scale inputs.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::numeric::{floor_one, non_negative};
use crate::domain::foundation::{RatePct, SensitivityDimension, UsageDistribution};
use crate::domain::inputs::InputSet;

/// Replaces one rate of the input set for a single computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RateOverride {
    pub dimension: SensitivityDimension,
    pub value: RatePct,
}

impl RateOverride {
    /// Creates an override, clamping the value to a valid percentage.
    pub fn new(dimension: SensitivityDimension, value: f64) -> Self {
        Self {
            dimension,
            value: RatePct::new(value),
        }
    }
}

/// Annual cost exposure in three categories.
///
/// `total_cost` is always the exact sum of the three cost components.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    pub bad_responses_per_day: f64,
    pub bad_responses_per_year: f64,
    pub escalations_per_year: f64,
    pub impacted_customers: f64,
    pub churned_customers: f64,
    pub escalation_cost: f64,
    pub churn_cost: f64,
    pub rework_cost: f64,
    pub total_cost: f64,
}

/// Stateless annual cost computation.
pub struct CostModel;

impl CostModel {
    /// Computes annual cost exposure at the given conflict rate.
    ///
    /// Hallucination, deflection failure and churn rates come from `inputs`
    /// unless `rate_override` names one of them, in which case its value is
    /// used for this call only.
    ///
    /// # Edge Cases
    /// - Zero queries or zero rates: escalation and churn cost are 0
    /// - Zero queries per customer: treated as 1
    /// - Rework cost depends only on rework inputs
    pub fn compute(
        conflict_rate: RatePct,
        inputs: &InputSet,
        distribution: UsageDistribution,
        rate_override: Option<RateOverride>,
    ) -> CostBreakdown {
        let rate = |dimension: SensitivityDimension| match rate_override {
            Some(o) if o.dimension == dimension => o.value,
            _ => inputs.rate_for(dimension),
        };
        let hallucination = rate(SensitivityDimension::Hallucination).as_fraction();
        let deflection_failure = rate(SensitivityDimension::Deflection).as_fraction();
        let churn = rate(SensitivityDimension::Churn).as_fraction();

        let customers = non_negative(inputs.customers);
        let queries_per_customer = floor_one(inputs.queries_per_customer);

        let bad_per_day =
            non_negative(inputs.daily_queries) * conflict_rate.as_fraction() * hallucination;
        let bad_per_year = bad_per_day * 365.0;

        let reachable = customers.min(bad_per_year / queries_per_customer);
        let impacted = customers.min(reachable * distribution.multiplier());
        let churned = impacted * churn;

        let escalations_per_year = bad_per_year * deflection_failure;
        let escalation_cost = escalations_per_year * non_negative(inputs.cost_per_escalation);

        // Attribution weight is already reflected in the churn rate.
        let churn_cost = churned
            * non_negative(inputs.account_value)
            * inputs.revenue_at_risk_pct.as_fraction();

        let rework_cost = non_negative(inputs.rework_hours_per_month)
            * 12.0
            * non_negative(inputs.rework_hourly_rate)
            * inputs.rework_caused_rate.as_fraction();

        CostBreakdown {
            bad_responses_per_day: bad_per_day,
            bad_responses_per_year: bad_per_year,
            escalations_per_year,
            impacted_customers: impacted,
            churned_customers: churned,
            escalation_cost,
            churn_cost,
            rework_cost,
            total_cost: escalation_cost + churn_cost + rework_cost,
        }
    }

    /// Computes cost at the input set's own conflict rate with no override.
    pub fn compute_base(inputs: &InputSet, distribution: UsageDistribution) -> CostBreakdown {
        Self::compute(inputs.conflict_rate, inputs, distribution, None)
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn pct() -> impl Strategy<Value = RatePct> {
        prop_oneof![Just(0.0), 0.0f64..=100.0].prop_map(RatePct::new)
    }

    fn amount() -> impl Strategy<Value = f64> {
        prop_oneof![Just(0.0), 0.0f64..1e6]
    }

    fn distribution() -> impl Strategy<Value = UsageDistribution> {
        prop::sample::select(UsageDistribution::all().to_vec())
    }

    prop_compose! {
        fn input_set()(
            daily_queries in amount(),
            customers in amount(),
            queries_per_customer in amount(),
            rates in prop::array::uniform7(pct()),
            cost_per_escalation in amount(),
            account_value in amount(),
            rework_hours_per_month in amount(),
            rework_hourly_rate in amount(),
        ) -> InputSet {
            InputSet {
                daily_queries,
                customers,
                queries_per_customer,
                conflict_rate: rates[0],
                hallucination_rate: rates[1],
                deflection_failure_rate: rates[2],
                churn_rate: rates[3],
                rework_caused_rate: rates[4],
                revenue_at_risk_pct: rates[5],
                attribution_weight_pct: rates[6],
                cost_per_escalation,
                account_value,
                rework_hours_per_month,
                rework_hourly_rate,
                ..Default::default()
            }
        }
    }

    proptest! {
        /// Property: total is the exact sum of the three components.
        #[test]
        fn total_equals_component_sum(inputs in input_set(), dist in distribution()) {
            let cost = CostModel::compute_base(&inputs, dist);
            prop_assert_eq!(cost.total_cost, cost.escalation_cost + cost.churn_cost + cost.rework_cost);
        }

        /// Property: every output is finite and non-negative.
        #[test]
        fn outputs_are_non_negative(inputs in input_set(), dist in distribution()) {
            let c = CostModel::compute_base(&inputs, dist);
            for v in [
                c.bad_responses_per_day, c.bad_responses_per_year, c.escalations_per_year,
                c.impacted_customers, c.churned_customers, c.escalation_cost,
                c.churn_cost, c.rework_cost, c.total_cost,
            ] {
                prop_assert!(v.is_finite() && v >= 0.0);
            }
            prop_assert!(c.impacted_customers <= inputs.customers);
        }

        /// Property: identical inputs give bit-identical outputs.
        #[test]
        fn compute_is_idempotent(inputs in input_set(), dist in distribution()) {
            let a = CostModel::compute_base(&inputs, dist);
            let b = CostModel::compute_base(&inputs, dist);
            prop_assert_eq!(a.total_cost.to_bits(), b.total_cost.to_bits());
            prop_assert_eq!(a, b);
        }

        /// Property: raising the conflict rate never lowers escalation or churn cost.
        #[test]
        fn conflict_rate_is_monotonic(
            inputs in input_set(),
            dist in distribution(),
            lo in 0.0f64..=100.0,
            delta in 0.0f64..=100.0,
        ) {
            let hi = (lo + delta).min(100.0);
            let low = CostModel::compute(RatePct::new(lo), &inputs, dist, None);
            let high = CostModel::compute(RatePct::new(hi), &inputs, dist, None);
            prop_assert!(high.escalation_cost >= low.escalation_cost);
            prop_assert!(high.churn_cost >= low.churn_cost);
        }
    }
}
