//! High-level configuration API

use crate::error::{ApiError, Result};
use revline_engine::ProcessingOptions;

/// High-level configuration for line reversal
#[derive(Debug, Clone)]
pub struct Config {
    options: ProcessingOptions,
    upload_limit: u64,
}

impl Default for Config {
    fn default() -> Self {
        let options = ProcessingOptions::default();
        Self {
            upload_limit: options.max_input_size(),
            options,
        }
    }
}

impl Config {
    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Engine options
    pub fn options(&self) -> &ProcessingOptions {
        &self.options
    }

    /// Transport-side ceiling on uploads in bytes
    pub fn upload_limit(&self) -> u64 {
        self.upload_limit
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    encoding: Option<String>,
    chunk_size: Option<usize>,
    max_input_size: Option<u64>,
    upload_limit: Option<u64>,
}

impl ConfigBuilder {
    /// Set the encoding label
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Set the chunk size (and in-memory threshold) in bytes
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = Some(bytes);
        self
    }

    /// Set the engine's input ceiling in bytes
    pub fn max_input_size(mut self, bytes: u64) -> Self {
        self.max_input_size = Some(bytes);
        self
    }

    /// Set the upload ceiling in bytes (defaults to the input ceiling)
    pub fn upload_limit(mut self, bytes: u64) -> Self {
        self.upload_limit = Some(bytes);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        let mut builder = ProcessingOptions::builder();
        if let Some(label) = self.encoding {
            builder = builder.encoding(label);
        }
        if let Some(size) = self.chunk_size {
            builder = builder.chunk_size(size);
        }
        if let Some(max) = self.max_input_size {
            builder = builder.max_input_size(max);
        }
        let options = builder.build()?;

        let upload_limit = self.upload_limit.unwrap_or(options.max_input_size());
        if upload_limit == 0 {
            return Err(ApiError::Engine(revline_engine::EngineError::InvalidConfig(
                "upload limit must be greater than zero".to_string(),
            )));
        }

        Ok(Config {
            options,
            upload_limit,
        })
    }
}
