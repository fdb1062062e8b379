//! # Artifact Reader
//!
//! Reads the text files the rule engine script leaves in the output
//! directory. Lines are concatenated with their terminators removed, so a
//! pretty-printed JSON document comes back as a single line.

use std::fs;

use super::errors::{ClipsError, ClipsResult};

/// Reader for `<output><folder><sep><stem><step>.txt` and `<output><sep><stem>.txt`
#[derive(Debug, Clone)]
pub struct ArtifactReader {
    output_prefix: String,
    separator: String,
    stem: String,
}

impl ArtifactReader {
    pub fn new(
        output_prefix: impl Into<String>,
        separator: impl Into<String>,
        stem: impl Into<String>,
    ) -> Self {
        Self {
            output_prefix: output_prefix.into(),
            separator: separator.into(),
            stem: stem.into(),
        }
    }

    /// Path of the artifact for one step of a run folder
    pub fn step_path(&self, folder: &str, step: i32) -> String {
        format!(
            "{}{}{}{}{}.txt",
            self.output_prefix, folder, self.separator, self.stem, step
        )
    }

    /// Path of the fixed, folder-less artifact
    pub fn default_path(&self) -> String {
        format!("{}{}{}.txt", self.output_prefix, self.separator, self.stem)
    }

    /// Read the artifact for `folder` at `step`
    pub fn read_folder_step(&self, folder: &str, step: i32) -> ClipsResult<String> {
        read_joined(&self.step_path(folder, step))
    }

    /// Read the fixed artifact
    pub fn read_default(&self) -> ClipsResult<String> {
        read_joined(&self.default_path())
    }
}

fn read_joined(path: &str) -> ClipsResult<String> {
    let bytes = fs::read(path).map_err(|e| ClipsError::artifact(path, e))?;
    Ok(join_lines(&String::from_utf8_lossy(&bytes)))
}

/// Concatenate lines, dropping `\n`, `\r\n` and bare `\r` terminators
fn join_lines(content: &str) -> String {
    content.chars().filter(|c| *c != '\n' && *c != '\r').collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn reader(temp: &TempDir) -> (ArtifactReader, String) {
        let prefix = format!("{}/", temp.path().display());
        (ArtifactReader::new(prefix.clone(), "\\", "roteNode"), prefix)
    }

    #[test]
    fn test_paths() {
        let reader = ArtifactReader::new("/out/", "\\", "roteNode");
        assert_eq!(reader.step_path("alpha", 3), "/out/alpha\\roteNode3.txt");
        assert_eq!(reader.step_path("alpha", -1), "/out/alpha\\roteNode-1.txt");
        assert_eq!(reader.default_path(), "/out/\\roteNode.txt");
    }

    #[test]
    fn test_join_lines() {
        assert_eq!(join_lines("{\n\"a\":1\n}"), "{\"a\":1}");
        assert_eq!(join_lines("{\r\n\"a\":1\r\n}\r\n"), "{\"a\":1}");
        assert_eq!(join_lines("a\rb"), "ab");
        assert_eq!(join_lines(""), "");
    }

    #[test]
    fn test_read_folder_step() {
        let temp = TempDir::new().unwrap();
        let (reader, prefix) = reader(&temp);
        fs::write(format!("{}alpha\\roteNode3.txt", prefix), "{\n\"a\":1\n}\n").unwrap();

        assert_eq!(reader.read_folder_step("alpha", 3).unwrap(), "{\"a\":1}");
    }

    #[test]
    fn test_read_folder_step_missing() {
        let temp = TempDir::new().unwrap();
        let (reader, _) = reader(&temp);

        let err = reader.read_folder_step("missing", 0).unwrap_err();
        assert!(matches!(err, ClipsError::ArtifactRead { .. }));
        assert!(err.to_string().contains("missing\\roteNode0.txt"));
    }

    #[test]
    fn test_read_default() {
        let temp = TempDir::new().unwrap();
        let (reader, prefix) = reader(&temp);

        assert!(reader.read_default().is_err());

        fs::write(format!("{}\\roteNode.txt", prefix), "ok\n").unwrap();
        assert_eq!(reader.read_default().unwrap(), "ok");
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let temp = TempDir::new().unwrap();
        let (reader, prefix) = reader(&temp);
        fs::write(format!("{}\\roteNode.txt", prefix), b"a\xffb\n").unwrap();

        assert_eq!(reader.read_default().unwrap(), "a\u{fffd}b");
    }
}
