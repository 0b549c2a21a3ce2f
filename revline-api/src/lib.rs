//! Public API for revline line reversal
//!
//! This crate provides a stable interface over the engine: results come
//! back as serializable DTOs and failures carry machine-readable codes.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use std::path::Path;
use std::sync::Arc;

// Re-export key types
pub use config::{Config, ConfigBuilder};
pub use dto::{ErrorResponse, Metadata, Output, ReverseRequest};
pub use error::{ApiError, Result};
pub use revline_engine::{input::DIRECT_TEXT_LABEL, Input, Method, COMMON_ENCODINGS};

/// Main entry point for line reversal
///
/// Cheap to clone and safe to share; calls do not interact.
#[derive(Debug, Clone)]
pub struct Reverser {
    inner: Arc<revline_engine::LineReverser>,
    config: Config,
}

impl Reverser {
    /// Create a reverser with default configuration
    pub fn new() -> Self {
        Self::with_config(Config::default())
    }

    /// Create a reverser with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self {
            inner: Arc::new(revline_engine::LineReverser::new(config.options().clone())),
            config,
        }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Process input with automatic method selection
    pub fn process(&self, input: Input) -> Result<Output> {
        Ok(self.inner.process(input)?.into())
    }

    /// Process with an explicit method
    pub fn process_with_method(&self, input: Input, method: Method) -> Result<Output> {
        Ok(self.inner.process_with_method(input, method)?.into())
    }

    /// Process text directly (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Process an uploaded file whose size the transport already knows
    ///
    /// The upload ceiling is checked before the engine touches the file.
    pub fn process_upload<P: AsRef<Path>>(&self, path: P, size: u64) -> Result<Output> {
        if size > self.config.upload_limit() {
            log::debug!(
                "rejecting upload of {} bytes (limit {})",
                size,
                self.config.upload_limit()
            );
            return Err(ApiError::UploadTooLarge {
                size,
                limit: self.config.upload_limit(),
            });
        }
        self.process(Input::from_file(path.as_ref().to_path_buf()))
    }

    /// Process a JSON request body of the form `{"text": "...", "source": "..."}`
    #[cfg(feature = "serde")]
    pub fn process_request(&self, body: &str) -> Result<Output> {
        let request = ReverseRequest::from_json(body)?;
        let mut input = Input::from_text(request.text);
        if let Some(source) = request.source {
            input = input.with_label(source);
        }
        self.process(input)
    }
}

impl Default for Reverser {
    fn default() -> Self {
        Self::new()
    }
}

// Convenience functions

/// Reverse text with default configuration
pub fn reverse_text(text: &str) -> Result<Output> {
    Reverser::new().process_text(text)
}

/// Reverse a file with default configuration
pub fn reverse_file<P: AsRef<Path>>(path: P) -> Result<Output> {
    Reverser::new().process(Input::from_file(path.as_ref().to_path_buf()))
}
