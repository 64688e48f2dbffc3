//! Pipeline Configuration Module
//! Filesystem paths for one pipeline invocation, with optional JSON overrides.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Input location used when none is configured.
pub const DEFAULT_INPUT_FILE: &str = "data/sample_input.csv";
/// Destination of the processed table.
pub const DEFAULT_OUTPUT_FILE: &str = "data/processed_output.csv";
/// Log file appended to by every run.
pub const DEFAULT_LOG_FILE: &str = "data/data_processing.log";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Paths the pipeline reads from and writes to.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    pub input_file: PathBuf,
    pub output_file: PathBuf,
    pub log_file: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_file: PathBuf::from(DEFAULT_INPUT_FILE),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }
}

impl PipelineConfig {
    /// Load configuration from a JSON file. Keys absent from the file keep
    /// their default values.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}
