//! Configuration types for the engine

use crate::error::{EngineError, Result};
use encoding_rs::{Encoding, UTF_8};

/// Default read unit when streaming, also the in-memory threshold
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024; // 64KB

/// Default ceiling on accepted input size
pub const DEFAULT_MAX_INPUT_SIZE: u64 = 512 * 1024 * 1024; // 512MB

/// Encoding labels commonly used for log and text files
///
/// Any WHATWG label is accepted; this list is what tools advertise.
pub const COMMON_ENCODINGS: &[&str] = &[
    "utf-8",
    "utf-16le",
    "utf-16be",
    "windows-1252",
    "iso-8859-1",
    "iso-8859-15",
    "shift_jis",
    "euc-jp",
    "iso-2022-jp",
    "euc-kr",
    "gbk",
    "gb18030",
    "big5",
    "koi8-r",
    "windows-1251",
];

/// Immutable processing options
///
/// A value of this type is passed into every call; the engine keeps no
/// options of its own between calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessingOptions {
    encoding: &'static Encoding,
    chunk_size: usize,
    max_input_size: u64,
}

impl Default for ProcessingOptions {
    fn default() -> Self {
        Self {
            encoding: UTF_8,
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_input_size: DEFAULT_MAX_INPUT_SIZE,
        }
    }
}

impl ProcessingOptions {
    /// Create a builder starting from the defaults
    pub fn builder() -> ProcessingOptionsBuilder {
        ProcessingOptionsBuilder::default()
    }

    /// Text encoding of byte sources
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Read unit in bytes, doubling as the in-memory threshold
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    /// Hard ceiling on input size in bytes
    pub fn max_input_size(&self) -> u64 {
        self.max_input_size
    }

    /// Reject sizes above the configured ceiling
    pub fn check_size(&self, size: u64) -> Result<()> {
        if size > self.max_input_size {
            return Err(EngineError::SizeExceeded {
                size,
                limit: self.max_input_size,
            });
        }
        Ok(())
    }
}

/// Builder for [`ProcessingOptions`]
#[derive(Debug, Default)]
pub struct ProcessingOptionsBuilder {
    encoding: Option<String>,
    chunk_size: Option<usize>,
    max_input_size: Option<u64>,
}

impl ProcessingOptionsBuilder {
    /// Set the encoding by WHATWG label (e.g. "utf-8", "latin1", "shift_jis")
    pub fn encoding(mut self, label: impl Into<String>) -> Self {
        self.encoding = Some(label.into());
        self
    }

    /// Set the streaming read unit and in-memory threshold in bytes
    pub fn chunk_size(mut self, bytes: usize) -> Self {
        self.chunk_size = Some(bytes);
        self
    }

    /// Set the input size ceiling in bytes
    pub fn max_input_size(mut self, bytes: u64) -> Self {
        self.max_input_size = Some(bytes);
        self
    }

    /// Validate and build the options
    pub fn build(self) -> Result<ProcessingOptions> {
        let mut options = ProcessingOptions::default();

        if let Some(label) = self.encoding {
            options.encoding = Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| {
                EngineError::InvalidConfig(format!("unknown encoding label '{label}'"))
            })?;
        }

        if let Some(size) = self.chunk_size {
            if size == 0 {
                return Err(EngineError::InvalidConfig(
                    "chunk size must be greater than zero".to_string(),
                ));
            }
            options.chunk_size = size;
        }

        if let Some(max) = self.max_input_size {
            if max == 0 {
                return Err(EngineError::InvalidConfig(
                    "maximum input size must be greater than zero".to_string(),
                ));
            }
            options.max_input_size = max;
        }

        Ok(options)
    }
}
