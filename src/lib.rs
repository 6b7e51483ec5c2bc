//! KB ROI Estimator - Annual cost of AI answers built on a conflicting knowledge base
//!
//! This crate turns a handful of business figures into an estimated annual
//! cost exposure, the savings a knowledge-base platform could recover, and a
//! sensitivity grid showing how that cost moves with the key rates.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
