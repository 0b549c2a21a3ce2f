//! Data Transfer Objects for API

use revline_engine::{is_highlight, ProcessingResult};

#[cfg(feature = "serde")]
use crate::error::{ApiError, Result};

/// Result of a reversal, shaped for structured responses
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Output {
    /// Original text or a size placeholder
    pub original: String,
    /// Reversed text
    pub transformed: String,
    /// Step log
    pub steps: Vec<String>,
    /// Number of logical lines
    pub line_count: usize,
    /// Source label
    pub source: String,
    /// Processing metadata
    pub metadata: Metadata,
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Metadata {
    /// Input size in bytes under the configured encoding
    pub original_size_bytes: u64,
    /// Wall-clock time of the reversal work
    #[cfg_attr(feature = "serde", serde(rename = "processingTimeMillis"))]
    pub processing_time_ms: u64,
    /// "in-memory" or "streaming"
    pub method: String,
    /// Number of chunks processed
    pub chunks_processed: usize,
}

impl Output {
    /// Indices of steps that deserve emphasis when displayed
    pub fn highlighted_steps(&self) -> Vec<usize> {
        self.steps
            .iter()
            .enumerate()
            .filter(|(_, step)| is_highlight(step))
            .map(|(i, _)| i)
            .collect()
    }

    /// Serialize as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

impl From<ProcessingResult> for Output {
    fn from(result: ProcessingResult) -> Self {
        Self {
            metadata: Metadata {
                original_size_bytes: result.metadata.original_size_bytes,
                processing_time_ms: result.metadata.processing_time_ms(),
                method: result.metadata.method.as_str().to_string(),
                chunks_processed: result.metadata.chunks_processed,
            },
            original: result.original,
            transformed: result.transformed,
            steps: result.steps,
            line_count: result.line_count,
            source: result.source,
        }
    }
}

/// Structured error body
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ErrorResponse {
    /// Machine-readable code such as "size-exceeded"
    pub code: String,
    /// Human-readable message
    pub message: String,
}

/// Text reversal request as a transport receives it
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReverseRequest {
    /// Text to reverse
    pub text: String,
    /// Optional source label
    #[cfg_attr(feature = "serde", serde(default))]
    pub source: Option<String>,
}

#[cfg(feature = "serde")]
impl ReverseRequest {
    /// Parse a JSON request body
    ///
    /// A missing or null `text` field and a non-string `text` are both
    /// rejected as invalid input; an empty string is accepted.
    pub fn from_json(body: &str) -> Result<Self> {
        let value: serde_json::Value = serde_json::from_str(body)
            .map_err(|e| ApiError::InvalidRequest(format!("malformed JSON: {e}")))?;

        match value.get("text") {
            None | Some(serde_json::Value::Null) => {
                Err(ApiError::InvalidRequest("text is required".to_string()))
            }
            Some(serde_json::Value::String(_)) => serde_json::from_value(value)
                .map_err(|e| ApiError::InvalidRequest(e.to_string())),
            Some(_) => Err(ApiError::InvalidRequest(
                "text must be a string".to_string(),
            )),
        }
    }
}
