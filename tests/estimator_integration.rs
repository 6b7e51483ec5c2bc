//! End-to-end tests for the estimator pipeline.
//!
//! These run guided and expert inputs through `EstimatorSession` and check
//! the figures a user would see.

use kb_roi_estimator::adapters::format::{format_currency, format_payback};
use kb_roi_estimator::adapters::input_file::load_input_set;
use kb_roi_estimator::application::EstimatorSession;
use kb_roi_estimator::domain::analysis::{AxisLevel, CostTrend, Payback};
use kb_roi_estimator::domain::foundation::{
    RatePct, RecoveryScenario, SensitivityDimension, UsageDistribution,
};
use kb_roi_estimator::domain::inputs::{IndustryPreset, InputSet};
use tempfile::TempDir;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}

// =============================================================================
// Guided pipeline
// =============================================================================

#[test]
fn smb_preset_flows_through_guided_pipeline() {
    let session = EstimatorSession::new();
    let result = session.estimate_guided(&IndustryPreset::Smb.guided_inputs());

    assert_eq!(result.derived.conflict_rate.value(), 29.0);
    assert_eq!(result.derived.deflection_failure_rate.value(), 6.0);
    assert_eq!(result.derived.hallucination_rate.value(), 14.0);
    assert_eq!(result.derived.churn_rate.value(), 80.0);
    assert_eq!(result.derived.rework_caused_rate.value(), 32.0);

    let cost = &result.estimate.cost;
    assert_close(cost.bad_responses_per_day, 4.06);
    assert_close(cost.escalation_cost, 3111.99);
    assert_close(cost.churn_cost, 4742.08);
    assert_close(cost.rework_cost, 3072.0);
    assert_close(cost.total_cost, 10926.07);

    let roi = &result.estimate.roi;
    assert_close(roi.recovered.total, 6783.337);
    assert_close(roi.net_benefit, 6783.337 - 9600.0);
    assert!(roi.recurring_roi_pct < 0.0);
    assert_eq!(format_payback(roi.payback), "1.7 yr");
}

#[test]
fn every_preset_produces_a_consistent_estimate() {
    let session = EstimatorSession::new();
    for preset in IndustryPreset::all() {
        let result = session.estimate_guided(&preset.guided_inputs());
        let cost = &result.estimate.cost;

        assert!(cost.total_cost > 0.0, "{preset} should have exposure");
        assert_close(
            cost.total_cost,
            cost.escalation_cost + cost.churn_cost + cost.rework_cost,
        );
        assert!(!result.estimate.roi.payback.is_never());
    }
}

// =============================================================================
// Expert inputs
// =============================================================================

#[test]
fn zero_daily_queries_leaves_only_rework_cost() {
    let inputs = InputSet {
        daily_queries: 0.0,
        customers: 500.0,
        conflict_rate: RatePct::new(20.0),
        hallucination_rate: RatePct::new(10.0),
        deflection_failure_rate: RatePct::new(30.0),
        churn_rate: RatePct::new(10.0),
        rework_caused_rate: RatePct::new(50.0),
        cost_per_escalation: 40.0,
        account_value: 10_000.0,
        rework_hours_per_month: 10.0,
        rework_hourly_rate: 50.0,
        ..Default::default()
    };
    let estimate = EstimatorSession::new().estimate(&inputs);

    assert_eq!(estimate.cost.bad_responses_per_day, 0.0);
    assert_eq!(estimate.cost.escalation_cost, 0.0);
    assert_eq!(estimate.cost.churn_cost, 0.0);
    assert_eq!(estimate.cost.rework_cost, 3000.0);
    assert_eq!(estimate.cost.total_cost, 3000.0);
}

#[test]
fn no_savings_means_payback_never() {
    let inputs = InputSet {
        monthly_platform_cost: 1000.0,
        ..Default::default()
    };
    let estimate = EstimatorSession::new().estimate(&inputs);

    assert_eq!(estimate.roi.total_investment, 12_000.0);
    assert_eq!(estimate.roi.payback, Payback::Never);
    assert_eq!(format_payback(estimate.roi.payback), "—");

    let json = serde_json::to_value(&estimate).unwrap();
    assert_eq!(json["roi"]["payback"], "never");
}

#[test]
fn inconsistent_volumes_warn_without_blocking() {
    let inputs = InputSet {
        daily_queries: 1000.0,
        customers: 100.0,
        queries_per_customer: 200.0,
        conflict_rate: RatePct::new(20.0),
        hallucination_rate: RatePct::new(10.0),
        ..Default::default()
    };
    let estimate = EstimatorSession::new().estimate(&inputs);

    assert_eq!(estimate.consistency.implied_annual, 365_000.0);
    assert_eq!(estimate.consistency.customer_annual, 20_000.0);
    assert_eq!(estimate.consistency.ratio, Some(18.25));
    assert!(estimate.consistency.warn);
    assert!(estimate.cost.bad_responses_per_day > 0.0);
}

#[test]
fn session_toggles_change_only_their_concern() {
    let inputs = InputSet {
        daily_queries: 1000.0,
        customers: 500.0,
        queries_per_customer: 200.0,
        conflict_rate: RatePct::new(20.0),
        hallucination_rate: RatePct::new(10.0),
        deflection_failure_rate: RatePct::new(30.0),
        churn_rate: RatePct::new(10.0),
        account_value: 10_000.0,
        revenue_at_risk_pct: RatePct::HUNDRED,
        ..Default::default()
    };
    let mut session = EstimatorSession::new();
    let base = session.estimate(&inputs);

    session.set_scenario(RecoveryScenario::Conservative);
    session.set_distribution(UsageDistribution::Distributed);
    session.set_dimension(SensitivityDimension::Deflection);
    let changed = session.estimate(&inputs);

    assert_eq!(changed.cost.escalation_cost, base.cost.escalation_cost);
    assert!(changed.cost.churn_cost >= base.cost.churn_cost);
    assert!(changed.roi.recovered.escalation < base.roi.recovered.escalation);
    assert_eq!(changed.sensitivity.dimension, SensitivityDimension::Deflection);
}

#[test]
fn sensitivity_grid_brackets_the_base_total() {
    let result = EstimatorSession::new().estimate_guided(&IndustryPreset::MidMarket.guided_inputs());
    let table = &result.estimate.sensitivity;

    let base = table.cell(AxisLevel::Base, AxisLevel::Base);
    assert_eq!(base.trend, CostTrend::Equal);
    assert_close(base.total_cost, result.estimate.cost.total_cost);

    let low = table.cell(AxisLevel::Base, AxisLevel::Low);
    let high = table.cell(AxisLevel::Base, AxisLevel::High);
    assert!(low.total_cost <= base.total_cost);
    assert!(high.total_cost >= base.total_cost);
}

// =============================================================================
// Files
// =============================================================================

#[test]
fn partially_typed_file_estimates_fail_soft() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("inputs.json");
    std::fs::write(
        &path,
        r#"{
            "daily_queries": "1000",
            "customers": null,
            "conflict_rate": "20%",
            "hallucination_rate": 10,
            "deflection_failure_rate": "30",
            "cost_per_escalation": "40abc",
            "rework_hours_per_month": "",
            "monthly_platform_cost": 500
        }"#,
    )
    .unwrap();

    let inputs = load_input_set(&path).unwrap();
    assert_eq!(inputs.conflict_rate.value(), 20.0);
    assert_eq!(inputs.cost_per_escalation, 40.0);
    assert_eq!(inputs.customers, 0.0);

    let estimate = EstimatorSession::new().estimate(&inputs);
    assert_close(estimate.cost.escalation_cost, 1000.0 * 0.2 * 0.1 * 365.0 * 0.3 * 40.0);
    assert_eq!(estimate.cost.churn_cost, 0.0);
    assert_eq!(estimate.cost.rework_cost, 0.0);
    assert_eq!(format_currency(estimate.roi.annual_platform_cost), "$6K");
}
