//! Application layer - composes domain services for callers.
//!
//! The domain layer is pure; this layer owns the mutable choices a user
//! makes between recalculations and is the only place that logs.

mod estimator_session;

pub use estimator_session::{Estimate, EstimatorSession, GuidedEstimate};
