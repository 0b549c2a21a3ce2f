//! Error handling for the CLI application

use revline_api::ApiError;
use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Invalid file pattern
    InvalidPattern(String),
    /// A glob pattern matched no files
    NoMatches(String),
    /// Configuration error
    ConfigError(String),
    /// Some inputs of a multi-input run failed; each was already reported
    InputsFailed {
        /// Number of failed inputs
        failed: usize,
        /// Number of inputs in the run
        total: usize,
        /// Whether every failure was caused by the caller
        client_only: bool,
    },
}

impl CliError {
    /// Machine-readable error code, matching the library codes
    pub fn code(&self) -> &'static str {
        match self {
            CliError::InvalidPattern(_) | CliError::NoMatches(_) => "invalid-input",
            CliError::ConfigError(_) => "invalid-config",
            CliError::InputsFailed { .. } => "partial-failure",
        }
    }

    /// Whether the user caused the failure
    pub fn is_client_error(&self) -> bool {
        match self {
            CliError::InputsFailed { client_only, .. } => *client_only,
            _ => true,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoMatches(pattern) => write!(f, "No files match pattern: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::InputsFailed { failed, total, .. } => {
                write!(f, "{failed} of {total} inputs failed")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

/// Process exit code for a failed run: 2 when the user caused it, 1 otherwise
pub fn exit_code(err: &anyhow::Error) -> u8 {
    let client = if let Some(api) = err.downcast_ref::<ApiError>() {
        api.is_client_error()
    } else if let Some(cli) = err.downcast_ref::<CliError>() {
        cli.is_client_error()
    } else {
        false
    };

    if client {
        2
    } else {
        1
    }
}

/// One-line stderr rendering: `error[<code>]: <message>`
pub fn render(err: &anyhow::Error) -> String {
    if let Some(api) = err.downcast_ref::<ApiError>() {
        format!("error[{}]: {}", api.code(), api)
    } else if let Some(cli) = err.downcast_ref::<CliError>() {
        format!("error[{}]: {}", cli.code(), cli)
    } else {
        format!("error[internal-processing-error]: {err:#}")
    }
}
