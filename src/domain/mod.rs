//! Domain layer containing the estimation engine and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (rates, scenarios, enums, errors)
//! - `inputs` - Expert and guided input sets, industry presets
//! - `analysis` - Pure estimation services (derivation, cost, ROI, sensitivity)

pub mod analysis;
pub mod foundation;
pub mod inputs;
