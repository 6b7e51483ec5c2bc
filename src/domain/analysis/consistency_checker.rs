//! Consistency Checker - Advisory comparison of two annual volume estimates.
//!
//! Daily query volume and customer count each imply an annual query volume.
//! When they disagree widely the estimate rests on shaky scale inputs, which
//! is worth telling the user. The check never blocks or alters a result.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::numeric::non_negative;
use crate::domain::inputs::DEFAULT_QUERIES_PER_CUSTOMER;

/// Ratio above which the two estimates are considered inconsistent.
pub const DEFAULT_RATIO_THRESHOLD: f64 = 3.0;

/// Outcome of a consistency check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsistencyReport {
    /// dailyQueries × 365.
    pub implied_annual: f64,
    /// customers × queriesPerCustomer.
    pub customer_annual: f64,
    /// max / min of the two; None when either is zero.
    pub ratio: Option<f64>,
    pub warn: bool,
}

/// Stateless consistency check.
pub struct ConsistencyChecker;

impl ConsistencyChecker {
    /// Checks with the default 3× threshold.
    pub fn check(daily_queries: f64, customers: f64, queries_per_customer: f64) -> ConsistencyReport {
        Self::check_with_threshold(
            daily_queries,
            customers,
            queries_per_customer,
            DEFAULT_RATIO_THRESHOLD,
        )
    }

    /// Checks against a caller-chosen ratio threshold.
    ///
    /// # Edge Cases
    /// - Queries per customer of 0: the default of 200 is assumed
    /// - Either annual figure 0: no ratio, no warning
    pub fn check_with_threshold(
        daily_queries: f64,
        customers: f64,
        queries_per_customer: f64,
        threshold: f64,
    ) -> ConsistencyReport {
        let queries_per_customer = match non_negative(queries_per_customer) {
            q if q > 0.0 => q,
            _ => DEFAULT_QUERIES_PER_CUSTOMER,
        };

        let implied_annual = non_negative(daily_queries) * 365.0;
        let customer_annual = non_negative(customers) * queries_per_customer;

        if implied_annual == 0.0 || customer_annual == 0.0 {
            return ConsistencyReport {
                implied_annual,
                customer_annual,
                ratio: None,
                warn: false,
            };
        }

        let ratio = implied_annual.max(customer_annual) / implied_annual.min(customer_annual);

        ConsistencyReport {
            implied_annual,
            customer_annual,
            ratio: Some(ratio),
            warn: ratio > threshold,
        }
    }
}
