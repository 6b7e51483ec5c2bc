//! Analysis Module - Pure domain services for cost and ROI estimation.
//!
//! This module contains stateless functions that turn input sets into
//! derived rates, cost exposure, return on investment and sensitivity grids.
//!
//! # Components
//!
//! - `GuidedDerivationEngine` - Rates from operational counts (guided mode)
//! - `CostModel` - Escalation, churn and rework cost with optional rate override
//! - `RoiCalculator` - Recovered savings, ROI percentages, payback
//! - `SensitivityProjector` - 3×3 grid of conflict rate × one secondary rate
//! - `ConsistencyChecker` - Advisory check of the two annual volume estimates
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and total. Malformed figures
//! degrade to zero and every denominator is floored, so no function here
//! returns an error. Identical inputs always yield identical outputs.

mod consistency_checker;
mod cost_model;
mod guided_derivation;
mod roi_calculator;
mod sensitivity_projector;

pub use consistency_checker::{ConsistencyChecker, ConsistencyReport, DEFAULT_RATIO_THRESHOLD};
pub use cost_model::{CostBreakdown, CostModel, RateOverride};
pub use guided_derivation::{DerivedRates, GuidedDerivationEngine};
pub use roi_calculator::{Payback, RecoveredSavings, RoiCalculator, RoiSummary};
pub use sensitivity_projector::{
    AxisLevel, AxisPoint, CostTrend, SensitivityCell, SensitivityProjector, SensitivityRow,
    SensitivityTable, CONFLICT_RATE_CAP,
};
