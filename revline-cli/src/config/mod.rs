//! Configuration module
//!
//! Settings come from an optional TOML file; command-line flags override
//! whatever the file says.

use crate::error::CliError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml(&content)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Processing-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Encoding label for byte sources
    pub encoding: String,

    /// Chunk size (KB); inputs below it are reversed in memory
    pub chunk_size_kb: usize,

    /// Largest accepted input (MB)
    pub max_input_mb: u64,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            encoding: "utf-8".to_string(),
            chunk_size_kb: 64,
            max_input_mb: 512,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Include the original text in JSON and markdown output
    pub include_original: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            include_original: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}
