//! Plain-text summary of an estimate.

use std::fmt::Write;

use super::format::{
    format_count, format_currency, format_payback, format_signed_currency, format_signed_percent,
    format_thousands,
};
use crate::application::Estimate;

const RULE: &str = "─────────────────────────────────────";

/// Renders the short summary printed by the CLI.
pub fn render_summary(estimate: &Estimate) -> String {
    let roi = &estimate.roi;
    let cost = &estimate.cost;

    let mut out = String::new();
    let _ = writeln!(out, "── AI KB ROI Summary ──");
    let _ = writeln!(out);
    line(&mut out, "Annual Cost of Broken AI", format_currency(cost.total_cost));
    line(&mut out, "  Support Escalations", format_currency(cost.escalation_cost));
    line(
        &mut out,
        "  AI-Attributable Churn",
        format!(
            "{} ({} attr.)",
            format_currency(cost.churn_cost),
            estimate.attribution_weight_pct
        ),
    );
    line(&mut out, "  KB Conflict Rework", format_currency(cost.rework_cost));
    line(&mut out, "Recoverable Savings", format_currency(roi.recovered.total));
    line(&mut out, "Net Annual Benefit", format_signed_currency(roi.net_benefit));
    line(&mut out, "ROI (Recurring)", format_signed_percent(roi.recurring_roi_pct));
    line(&mut out, "ROI (Year-1)", format_signed_percent(roi.year1_roi_pct));
    line(&mut out, "Payback Period", format_payback(roi.payback));
    let _ = writeln!(out);
    line(
        &mut out,
        "Bad Responses/Day",
        format!("{}/day", format_count(cost.bad_responses_per_day)),
    );
    line(&mut out, "Escalations/Year", format_count(cost.escalations_per_year));
    line(
        &mut out,
        "Customers at Risk",
        format!("{} at risk", format_count(cost.churned_customers)),
    );
    let _ = writeln!(out);
    line(&mut out, "Recovery Scenario", estimate.scenario.label().to_string());
    let distribution = estimate.distribution;
    line(
        &mut out,
        "Usage Distribution",
        format!(
            "{} ({})",
            distribution.display_name(),
            if distribution.is_adjusted() { "adjusted" } else { "rough est." }
        ),
    );
    line(&mut out, "", distribution.hint().to_string());

    if estimate.consistency.warn {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "! Daily queries imply {} queries/yr but customers imply {} ({:.1}× apart)",
            format_count(estimate.consistency.implied_annual),
            format_count(estimate.consistency.customer_annual),
            estimate.consistency.ratio.unwrap_or_default()
        );
    }

    let _ = writeln!(out);
    render_sensitivity(&mut out, estimate);
    let _ = writeln!(out, "{}", RULE);
    out
}

fn render_sensitivity(out: &mut String, estimate: &Estimate) {
    let table = &estimate.sensitivity;
    let _ = writeln!(out, "Sensitivity: conflict rate × {}", table.dimension.label());
    let headers = table.column_labels();
    let _ = writeln!(
        out,
        "{:<18}{:>14}{:>14}{:>14}",
        "", headers[0], headers[1], headers[2]
    );
    for row in &table.rows {
        let totals = row.totals().map(format_thousands);
        let _ = writeln!(
            out,
            "{:<18}{:>14}{:>14}{:>14}",
            row.label, totals[0], totals[1], totals[2]
        );
    }
    let (lowest, highest) = table.spread();
    let _ = writeln!(
        out,
        "Range: {} to {}",
        format_thousands(lowest),
        format_thousands(highest)
    );
}

fn line(out: &mut String, label: &str, value: String) {
    let label = if label.is_empty() {
        String::new()
    } else {
        format!("{}:", label)
    };
    let _ = writeln!(out, "{:<28}{}", label, value);
}
