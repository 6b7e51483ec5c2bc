//! Adapters - Presentation and file I/O around the estimator.
//!
//! - `format` - Currency, count and duration formatting
//! - `summary` - Plain-text summary of an estimate
//! - `input_file` - Input sets from JSON or YAML files

pub mod format;
pub mod input_file;
pub mod summary;

pub use input_file::{load_guided_input_set, load_input_set, InputFileError, InputFormat};
pub use summary::render_summary;
