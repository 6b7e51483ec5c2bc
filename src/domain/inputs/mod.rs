//! Inputs Module - the two input representations an estimate starts from.
//!
//! - `InputSet` - expert-mode rates, scale and cost figures
//! - `GuidedInputSet` - operational counts that rates are derived from
//! - `IndustryPreset` - canned guided inputs for typical company profiles
//! - `ProjectionDefaults` - expert fields guided mode does not collect

mod guided_input_set;
mod industry_preset;
mod input_set;

pub use guided_input_set::{GuidedInputSet, ProjectionDefaults, DEFAULT_QUERIES_PER_CUSTOMER};
pub use industry_preset::IndustryPreset;
pub use input_set::InputSet;
