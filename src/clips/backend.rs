//! # Clip Storage Backend Trait

use super::errors::ClipsResult;

/// What a placeholder request did on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// An empty file was created
    Created,
    /// Something already existed at the path and was left untouched
    AlreadyPresent,
}

/// Backend for uploaded clip files
pub trait ClipStorage: Send + Sync + std::fmt::Debug {
    /// Resolve the on-disk path for a clip name
    fn path_for(&self, name: &str) -> String;

    /// Create an empty file for `name` unless one already exists
    fn create_placeholder(&self, name: &str) -> ClipsResult<StoreOutcome>;
}
