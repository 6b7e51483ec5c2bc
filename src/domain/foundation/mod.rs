//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, enums, soft numeric parsing and error types
//! that form the vocabulary of the estimator domain.

pub mod numeric;

mod errors;
mod rate;
mod recovery_scenario;
mod review_process;
mod sensitivity_dimension;
mod usage_distribution;

pub use errors::ValidationError;
pub use rate::RatePct;
pub use recovery_scenario::{RecoveryFractions, RecoveryScenario};
pub use review_process::ReviewProcessLevel;
pub use sensitivity_dimension::SensitivityDimension;
pub use usage_distribution::UsageDistribution;
