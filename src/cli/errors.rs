//! CLI-specific error types
//!
//! All CLI errors are fatal: `main` prints them and exits non-zero.

use std::io;

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI error
#[derive(Debug, Clone, Error)]
pub enum CliError {
    /// Configuration file missing or invalid
    #[error("PBR_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// I/O error (stdout, directories)
    #[error("PBR_CLI_IO_ERROR: {0}")]
    Io(String),

    /// Server could not start or stopped with an error
    #[error("PBR_CLI_SERVE_FAILED: {0}")]
    ServeFailed(String),
}

impl CliError {
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        CliError::Io(msg.into())
    }

    pub fn serve_failed(msg: impl Into<String>) -> Self {
        CliError::ServeFailed(msg.into())
    }

    /// Message without the code prefix
    pub fn message(&self) -> &str {
        match self {
            CliError::Config(msg) | CliError::Io(msg) | CliError::ServeFailed(msg) => msg,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_code() {
        let err = CliError::config_error("pythonfilepath is required");
        assert_eq!(
            err.to_string(),
            "PBR_CLI_CONFIG_ERROR: pythonfilepath is required"
        );
        assert_eq!(err.message(), "pythonfilepath is required");
    }

    #[test]
    fn test_json_errors_are_io() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        assert!(matches!(CliError::from(json_err), CliError::Io(_)));
    }
}
