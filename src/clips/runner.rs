//! # Script Runner
//!
//! Launches `<interpreter> <pythonfilepath><filename>` and returns as soon as
//! the OS accepts the process. The caller is never told when, or whether, the
//! script finishes; a detached waiter reaps the child and logs its exit
//! status so finished scripts do not linger as zombies.

use std::process::{Child, Command, Stdio};
use std::thread;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use super::errors::{ClipsError, ClipsResult};
use crate::observability::Logger;

/// Record of a successfully launched script
#[derive(Debug, Clone, Serialize)]
pub struct LaunchedScript {
    /// Launch ID, used to correlate the exit log line
    pub id: Uuid,

    /// OS process ID
    pub pid: u32,

    /// Command line as launched
    pub command: String,

    pub launched_at: DateTime<Utc>,
}

/// Fire-and-forget script launcher
#[derive(Debug, Clone)]
pub struct ScriptRunner {
    interpreter: String,
    script_prefix: String,
}

impl ScriptRunner {
    pub fn new(interpreter: impl Into<String>, script_prefix: impl Into<String>) -> Self {
        Self {
            interpreter: interpreter.into(),
            script_prefix: script_prefix.into(),
        }
    }

    /// Resolve the script argument for a file name
    pub fn script_path(&self, filename: &str) -> String {
        format!("{}{}", self.script_prefix, filename)
    }

    /// Launch the interpreter on `filename` without waiting for it
    pub fn launch(&self, filename: &str) -> ClipsResult<LaunchedScript> {
        let script = self.script_path(filename);
        let command = format!("{} {}", self.interpreter, script);

        let child = Command::new(&self.interpreter)
            .arg(&script)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| ClipsError::Launch {
                command: command.clone(),
                reason: e.to_string(),
            })?;

        let launched = LaunchedScript {
            id: Uuid::new_v4(),
            pid: child.id(),
            command,
            launched_at: Utc::now(),
        };

        reap_in_background(child, launched.id);
        Ok(launched)
    }
}

fn reap_in_background(mut child: Child, launch_id: Uuid) {
    let pid = child.id().to_string();
    let spawned = thread::Builder::new()
        .name(format!("script-reaper-{}", pid))
        .spawn(move || {
            let id = launch_id.to_string();
            let pid = child.id().to_string();
            match child.wait() {
                Ok(status) => {
                    let code = status
                        .code()
                        .map(|c| c.to_string())
                        .unwrap_or_else(|| "signal".to_string());
                    Logger::info(
                        "SCRIPT_EXITED",
                        &[("launch_id", &id), ("pid", &pid), ("exit_code", &code)],
                    );
                }
                Err(e) => {
                    Logger::warn(
                        "SCRIPT_WAIT_FAILED",
                        &[("launch_id", &id), ("pid", &pid), ("reason", &e.to_string())],
                    );
                }
            }
        });

    if let Err(e) = spawned {
        Logger::warn(
            "SCRIPT_REAPER_UNAVAILABLE",
            &[("pid", &pid), ("reason", &e.to_string())],
        );
    }
}
