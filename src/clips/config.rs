//! Clips path configuration
//!
//! The three directory prefixes are concatenated with file names as plain
//! strings. No separator is inserted and nothing is sanitized, so
//! `pythonfilepath = "/opt/rete/"` and `filename = "run.py"` yields
//! `/opt/rete/run.py`, while a prefix without a trailing slash glues the
//! two together.

use serde::{Deserialize, Serialize};

/// Paths and launch settings shared by the clips components
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipsConfig {
    /// Prefix for script invocation
    #[serde(rename = "pythonfilepath")]
    pub python_file_path: String,

    /// Prefix for uploaded-file placeholders
    #[serde(rename = "clipsfilepath")]
    pub clips_file_path: String,

    /// Prefix for artifact reads
    #[serde(rename = "outputfilepath")]
    pub output_file_path: String,

    /// Interpreter binary (default: "python")
    #[serde(default = "default_interpreter")]
    pub interpreter: String,

    /// Artifact file stem (default: "roteNode")
    #[serde(default = "default_artifact_prefix")]
    pub artifact_prefix: String,

    /// Separator placed before the artifact stem (default: "\\")
    #[serde(default = "default_artifact_separator")]
    pub artifact_separator: String,
}

fn default_interpreter() -> String {
    "python".to_string()
}

fn default_artifact_prefix() -> String {
    "roteNode".to_string()
}

fn default_artifact_separator() -> String {
    "\\".to_string()
}

impl ClipsConfig {
    /// Create a config with default interpreter and artifact naming
    pub fn new(
        python_file_path: impl Into<String>,
        clips_file_path: impl Into<String>,
        output_file_path: impl Into<String>,
    ) -> Self {
        Self {
            python_file_path: python_file_path.into(),
            clips_file_path: clips_file_path.into(),
            output_file_path: output_file_path.into(),
            interpreter: default_interpreter(),
            artifact_prefix: default_artifact_prefix(),
            artifact_separator: default_artifact_separator(),
        }
    }

    /// Override the interpreter binary
    pub fn with_interpreter(mut self, interpreter: impl Into<String>) -> Self {
        self.interpreter = interpreter.into();
        self
    }

    /// Returns the name of the first empty required setting, if any
    pub fn first_missing(&self) -> Option<&'static str> {
        [
            ("pythonfilepath", &self.python_file_path),
            ("clipsfilepath", &self.clips_file_path),
            ("outputfilepath", &self.output_file_path),
            ("interpreter", &self.interpreter),
        ]
        .into_iter()
        .find(|(_, value)| value.is_empty())
        .map(|(name, _)| name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_external_key_names() {
        let json = r#"{
            "pythonfilepath": "/opt/rete/",
            "clipsfilepath": "/var/clips/",
            "outputfilepath": "/var/out/"
        }"#;

        let config: ClipsConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.python_file_path, "/opt/rete/");
        assert_eq!(config.clips_file_path, "/var/clips/");
        assert_eq!(config.output_file_path, "/var/out/");
        assert_eq!(config.interpreter, "python");
        assert_eq!(config.artifact_prefix, "roteNode");
        assert_eq!(config.artifact_separator, "\\");
    }

    #[test]
    fn test_first_missing() {
        let config = ClipsConfig::new("/a/", "/b/", "/c/");
        assert_eq!(config.first_missing(), None);

        let config = ClipsConfig::new("/a/", "", "/c/");
        assert_eq!(config.first_missing(), Some("clipsfilepath"));

        let config = ClipsConfig::new("/a/", "/b/", "/c/").with_interpreter("");
        assert_eq!(config.first_missing(), Some("interpreter"));
    }
}
