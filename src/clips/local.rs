//! # Local Filesystem Clip Storage

use std::fs::OpenOptions;
use std::io::ErrorKind;

use super::backend::{ClipStorage, StoreOutcome};
use super::errors::{ClipsError, ClipsResult};

/// Clip storage rooted at a string prefix
#[derive(Debug, Clone)]
pub struct LocalClipStorage {
    prefix: String,
}

impl LocalClipStorage {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl ClipStorage for LocalClipStorage {
    fn path_for(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    fn create_placeholder(&self, name: &str) -> ClipsResult<StoreOutcome> {
        let path = self.path_for(name);

        // create_new makes the existence check and the creation one step
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(_) => Ok(StoreOutcome::Created),
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(StoreOutcome::AlreadyPresent),
            Err(e) => Err(ClipsError::placeholder(&path, e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn storage(temp: &TempDir) -> LocalClipStorage {
        LocalClipStorage::new(format!("{}/", temp.path().display()))
    }

    #[test]
    fn test_creates_empty_placeholder() {
        let temp = TempDir::new().unwrap();
        let storage = storage(&temp);

        assert!(!temp.path().join("rules.clp").exists());
        let outcome = storage.create_placeholder("rules.clp").unwrap();

        assert_eq!(outcome, StoreOutcome::Created);
        assert_eq!(fs::read(temp.path().join("rules.clp")).unwrap().len(), 0);
    }

    #[test]
    fn test_existing_file_untouched() {
        let temp = TempDir::new().unwrap();
        let storage = storage(&temp);
        fs::write(temp.path().join("rules.clp"), b"(defrule a => )").unwrap();

        let outcome = storage.create_placeholder("rules.clp").unwrap();

        assert_eq!(outcome, StoreOutcome::AlreadyPresent);
        assert_eq!(
            fs::read(temp.path().join("rules.clp")).unwrap(),
            b"(defrule a => )"
        );
    }

    #[test]
    fn test_prefix_is_concatenated_verbatim() {
        let temp = TempDir::new().unwrap();
        let storage = LocalClipStorage::new(format!("{}/up_", temp.path().display()));

        storage.create_placeholder("facts.clp").unwrap();

        assert!(temp.path().join("up_facts.clp").exists());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let storage = LocalClipStorage::new(format!("{}/nope/", temp.path().display()));

        let result = storage.create_placeholder("facts.clp");
        assert!(matches!(result, Err(ClipsError::Placeholder { .. })));
    }
}
