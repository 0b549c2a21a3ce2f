//! Engine error types
//!
//! Every failure the engine can report carries a stable [`ErrorKind`] so that
//! transport layers can map it onto status or exit codes without parsing
//! messages.

use thiserror::Error;

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Input is missing or not text-shaped
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// The designated input source does not exist
    #[error("source not found: {name}")]
    SourceNotFound {
        /// Label or path of the missing source
        name: String,
    },

    /// The source exists but could not be read
    #[error("failed to read {name}: {reason}")]
    SourceUnreadable {
        /// Label or path of the source
        name: String,
        /// Underlying failure
        reason: String,
    },

    /// The source has zero size
    #[error("source is empty: {name}")]
    EmptySource {
        /// Label or path of the source
        name: String,
    },

    /// Input is larger than the configured ceiling
    #[error("input size {size} bytes exceeds the limit of {limit} bytes")]
    SizeExceeded {
        /// Observed size in bytes
        size: u64,
        /// Configured ceiling in bytes
        limit: u64,
    },

    /// Options failed validation
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Anything unclassified during splitting or reassembly
    #[error("internal processing error: {0}")]
    Internal(String),
}

/// Machine-readable classification of an [`EngineError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`EngineError::InvalidInput`]
    InvalidInput,
    /// See [`EngineError::SourceNotFound`]
    SourceNotFound,
    /// See [`EngineError::SourceUnreadable`]
    SourceUnreadable,
    /// See [`EngineError::EmptySource`]
    EmptySource,
    /// See [`EngineError::SizeExceeded`]
    SizeExceeded,
    /// See [`EngineError::InvalidConfig`]
    InvalidConfig,
    /// See [`EngineError::Internal`]
    Internal,
}

impl ErrorKind {
    /// Stable error code used in structured responses
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "invalid-input",
            ErrorKind::SourceNotFound => "source-not-found",
            ErrorKind::SourceUnreadable => "source-unreadable",
            ErrorKind::EmptySource => "empty-source",
            ErrorKind::SizeExceeded => "size-exceeded",
            ErrorKind::InvalidConfig => "invalid-config",
            ErrorKind::Internal => "internal-processing-error",
        }
    }

    /// Whether the caller caused the failure (as opposed to the source or the engine)
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ErrorKind::InvalidInput
                | ErrorKind::EmptySource
                | ErrorKind::SizeExceeded
                | ErrorKind::InvalidConfig
        )
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl EngineError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            EngineError::InvalidInput { .. } => ErrorKind::InvalidInput,
            EngineError::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            EngineError::SourceUnreadable { .. } => ErrorKind::SourceUnreadable,
            EngineError::EmptySource { .. } => ErrorKind::EmptySource,
            EngineError::SizeExceeded { .. } => ErrorKind::SizeExceeded,
            EngineError::InvalidConfig(_) => ErrorKind::InvalidConfig,
            EngineError::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Build a read failure for the given source
    pub fn unreadable(source: impl Into<String>, err: std::io::Error) -> Self {
        EngineError::SourceUnreadable {
            name: source.into(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn invalid_input(reason: impl Into<String>) -> Self {
        EngineError::InvalidInput {
            reason: reason.into(),
        }
    }
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(ErrorKind::InvalidInput.code(), "invalid-input");
        assert_eq!(ErrorKind::SourceNotFound.code(), "source-not-found");
        assert_eq!(ErrorKind::SourceUnreadable.code(), "source-unreadable");
        assert_eq!(ErrorKind::EmptySource.code(), "empty-source");
        assert_eq!(ErrorKind::SizeExceeded.code(), "size-exceeded");
        assert_eq!(ErrorKind::Internal.code(), "internal-processing-error");
    }

    #[test]
    fn test_client_vs_server_classification() {
        assert!(ErrorKind::InvalidInput.is_client_error());
        assert!(ErrorKind::SizeExceeded.is_client_error());
        assert!(ErrorKind::EmptySource.is_client_error());
        assert!(!ErrorKind::SourceNotFound.is_client_error());
        assert!(!ErrorKind::SourceUnreadable.is_client_error());
        assert!(!ErrorKind::Internal.is_client_error());
    }

    #[test]
    fn test_display_messages() {
        let err = EngineError::SizeExceeded {
            size: 2048,
            limit: 1024,
        };
        assert_eq!(
            err.to_string(),
            "input size 2048 bytes exceeds the limit of 1024 bytes"
        );
        assert_eq!(err.kind(), ErrorKind::SizeExceeded);

        let err = EngineError::unreadable(
            "log.txt",
            std::io::Error::new(std::io::ErrorKind::Other, "disk gone"),
        );
        assert_eq!(err.to_string(), "failed to read log.txt: disk gone");
        assert_eq!(err.kind(), ErrorKind::SourceUnreadable);
    }
}
