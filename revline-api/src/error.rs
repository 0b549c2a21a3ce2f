//! API error types

use revline_engine::{EngineError, ErrorKind};
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Engine error
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Upload is larger than the transport ceiling
    #[error("upload of {size} bytes exceeds the limit of {limit} bytes")]
    UploadTooLarge {
        /// Declared upload size in bytes
        size: u64,
        /// Configured upload ceiling in bytes
        limit: u64,
    },

    /// Request body is missing the text or is not text-shaped
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl ApiError {
    /// Machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::Engine(e) => e.kind().code(),
            ApiError::UploadTooLarge { .. } => ErrorKind::SizeExceeded.code(),
            ApiError::InvalidRequest(_) => ErrorKind::InvalidInput.code(),
            #[cfg(feature = "serde")]
            ApiError::Serde(_) => ErrorKind::Internal.code(),
        }
    }

    /// Whether the caller caused the failure
    pub fn is_client_error(&self) -> bool {
        match self {
            ApiError::Engine(e) => e.kind().is_client_error(),
            ApiError::UploadTooLarge { .. } | ApiError::InvalidRequest(_) => true,
            #[cfg(feature = "serde")]
            ApiError::Serde(_) => false,
        }
    }

    /// Structured form of this error for responses
    pub fn to_response(&self) -> crate::dto::ErrorResponse {
        crate::dto::ErrorResponse {
            code: self.code().to_string(),
            message: self.to_string(),
        }
    }
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
