//! # Clips Errors

use thiserror::Error;

/// Result type for clips operations
pub type ClipsResult<T> = Result<T, ClipsError>;

/// Failures of the storage, runner and artifact components.
///
/// The HTTP surface collapses these into the legacy channels (silence,
/// `false`, error text), but every component returns them explicitly.
#[derive(Debug, Clone, Error)]
pub enum ClipsError {
    #[error("Placeholder creation failed for {path}: {reason}")]
    Placeholder { path: String, reason: String },

    #[error("Script launch failed for `{command}`: {reason}")]
    Launch { command: String, reason: String },

    #[error("Artifact read failed for {path}: {reason}")]
    ArtifactRead { path: String, reason: String },
}

impl ClipsError {
    /// Stable error code for machine-readable output
    pub fn code(&self) -> &'static str {
        match self {
            ClipsError::Placeholder { .. } => "PBR_PLACEHOLDER_FAILED",
            ClipsError::Launch { .. } => "PBR_SCRIPT_LAUNCH_FAILED",
            ClipsError::ArtifactRead { .. } => "PBR_ARTIFACT_READ_FAILED",
        }
    }

    pub(crate) fn placeholder(path: &str, err: std::io::Error) -> Self {
        ClipsError::Placeholder {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }

    pub(crate) fn artifact(path: &str, err: std::io::Error) -> Self {
        ClipsError::ArtifactRead {
            path: path.to_string(),
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_codes() {
        let missing = io::Error::new(io::ErrorKind::NotFound, "gone");
        assert_eq!(
            ClipsError::artifact("x", missing).code(),
            "PBR_ARTIFACT_READ_FAILED"
        );
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        assert_eq!(
            ClipsError::placeholder("x", denied).code(),
            "PBR_PLACEHOLDER_FAILED"
        );
    }

    #[test]
    fn test_display_carries_os_reason() {
        let err = ClipsError::artifact(
            "/out/alpha\\roteNode3.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let text = err.to_string();
        assert!(text.contains("/out/alpha\\roteNode3.txt"));
        assert!(text.contains("No such file or directory"));
    }
}
