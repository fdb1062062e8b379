//! # Clips Service
//!
//! The four request-level operations. Each one has a typed counterpart
//! (`try_*` / component accessors) returning [`ClipsResult`]; the plain
//! versions reproduce the wire behaviour clients depend on:
//!
//! | Operation | Failure channel |
//! |---|---|
//! | `store_file` | logged, otherwise silent |
//! | `run_script` | `false` |
//! | `facts` / `fact` | error text returned as the content |

use super::artifacts::ArtifactReader;
use super::backend::{ClipStorage, StoreOutcome};
use super::config::ClipsConfig;
use super::errors::ClipsResult;
use super::local::LocalClipStorage;
use super::runner::{LaunchedScript, ScriptRunner};
use crate::observability::Logger;

/// Request-level clips operations
#[derive(Debug)]
pub struct ClipsService<S: ClipStorage = LocalClipStorage> {
    storage: S,
    runner: ScriptRunner,
    artifacts: ArtifactReader,
}

impl ClipsService<LocalClipStorage> {
    /// Build the filesystem-backed service from configuration
    pub fn from_config(config: &ClipsConfig) -> Self {
        Self::new(
            LocalClipStorage::new(config.clips_file_path.clone()),
            ScriptRunner::new(config.interpreter.clone(), config.python_file_path.clone()),
            ArtifactReader::new(
                config.output_file_path.clone(),
                config.artifact_separator.clone(),
                config.artifact_prefix.clone(),
            ),
        )
    }
}

impl<S: ClipStorage> ClipsService<S> {
    pub fn new(storage: S, runner: ScriptRunner, artifacts: ArtifactReader) -> Self {
        Self {
            storage,
            runner,
            artifacts,
        }
    }

    pub fn artifacts(&self) -> &ArtifactReader {
        &self.artifacts
    }

    /// Create the placeholder for an upload, reporting what happened.
    ///
    /// `data` is accepted but not written: the clips directory only ever
    /// receives empty placeholder files.
    pub fn try_store_file(&self, name: &str, data: &[u8]) -> ClipsResult<StoreOutcome> {
        let outcome = self.storage.create_placeholder(name)?;
        let path = self.storage.path_for(name);
        let size = data.len().to_string();

        match outcome {
            StoreOutcome::Created => Logger::info(
                "CLIP_PLACEHOLDER_CREATED",
                &[("path", &path), ("upload_bytes", &size)],
            ),
            StoreOutcome::AlreadyPresent => Logger::info(
                "CLIP_PLACEHOLDER_EXISTS",
                &[("path", &path), ("upload_bytes", &size)],
            ),
        }

        Ok(outcome)
    }

    /// Upload: never reports failure to the caller
    pub fn store_file(&self, name: &str, data: &[u8]) {
        if let Err(e) = self.try_store_file(name, data) {
            Logger::error("CLIP_STORE_FAILED", &[("reason", &e.to_string())]);
        }
    }

    /// Launch the script, reporting the launch record or the launch error
    pub fn launch(&self, filename: &str) -> ClipsResult<LaunchedScript> {
        let launched = self.runner.launch(filename)?;
        Logger::info(
            "SCRIPT_LAUNCHED",
            &[
                ("command", &launched.command),
                ("launch_id", &launched.id.to_string()),
                ("pid", &launched.pid.to_string()),
            ],
        );
        Ok(launched)
    }

    /// Run: `true` once the OS accepted the process, `false` otherwise
    pub fn run_script(&self, filename: &str) -> bool {
        match self.launch(filename) {
            Ok(_) => true,
            Err(e) => {
                Logger::error("SCRIPT_LAUNCH_FAILED", &[("reason", &e.to_string())]);
                false
            }
        }
    }

    /// Facts for one step of a run folder, or the read error as text
    pub fn facts(&self, folder: &str, step: i32) -> String {
        self.artifacts
            .read_folder_step(folder, step)
            .unwrap_or_else(|e| {
                Logger::warn("ARTIFACT_READ_FAILED", &[("reason", &e.to_string())]);
                e.to_string()
            })
    }

    /// The fixed fact artifact, or the read error as text
    pub fn fact(&self) -> String {
        self.artifacts.read_default().unwrap_or_else(|e| {
            Logger::warn("ARTIFACT_READ_FAILED", &[("reason", &e.to_string())]);
            e.to_string()
        })
    }
}
