//! Input file loading
//!
//! Reads an `InputSet` or `GuidedInputSet` from a JSON or YAML file. The
//! format is picked from the file extension. Field values go through the
//! same fail-soft numeric handling as any other input, so only malformed
//! documents fail to load.

use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::domain::inputs::{GuidedInputSet, InputSet};

/// Errors raised while loading an input file.
#[derive(Debug, Error)]
pub enum InputFileError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {path}: {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Unsupported input format for {0} (expected .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),
}

/// Supported document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Yaml,
}

impl InputFormat {
    /// Picks the format from a path's extension.
    pub fn from_path(path: &Path) -> Result<Self, InputFileError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match extension.as_deref() {
            Some("json") => Ok(InputFormat::Json),
            Some("yaml") | Some("yml") => Ok(InputFormat::Yaml),
            _ => Err(InputFileError::UnsupportedFormat(path.to_path_buf())),
        }
    }
}

/// Loads an expert-mode input set.
pub fn load_input_set(path: impl AsRef<Path>) -> Result<InputSet, InputFileError> {
    load(path.as_ref())
}

/// Loads a guided-mode input set.
pub fn load_guided_input_set(path: impl AsRef<Path>) -> Result<GuidedInputSet, InputFileError> {
    load(path.as_ref())
}

fn load<T: DeserializeOwned>(path: &Path) -> Result<T, InputFileError> {
    let format = InputFormat::from_path(path)?;

    let contents = fs::read_to_string(path).map_err(|source| InputFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        InputFormat::Json => serde_json::from_str(&contents).map_err(|source| InputFileError::Json {
            path: path.to_path_buf(),
            source,
        }),
        InputFormat::Yaml => serde_yaml::from_str(&contents).map_err(|source| InputFileError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
    }
}
