//! CLI command implementations
//!
//! `serve` runs the HTTP server. `run`, `facts` and `fact` perform a single
//! clips operation and print one JSON envelope; unlike the HTTP surface they
//! report failures with an error code instead of folding them into the data.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::clips::{ClipsConfig, ClipsService};
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::Logger;

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{write_error, write_response};

/// Configuration file structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// `pythonfilepath`, `clipsfilepath`, `outputfilepath` and friends
    #[serde(flatten)]
    pub clips: ClipsConfig,

    /// HTTP bind settings (optional)
    #[serde(default)]
    pub http: HttpServerConfig,
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        Self::parse(&content)
    }

    /// Parse and validate configuration JSON
    pub fn parse(content: &str) -> CliResult<Self> {
        let config: Config = serde_json::from_str(content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> CliResult<()> {
        if let Some(name) = self.clips.first_missing() {
            return Err(CliError::config_error(format!("{} must not be empty", name)));
        }
        Ok(())
    }
}

/// Main CLI entry point
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Init { config } => init(&config),
        Command::Serve { config, port } => serve(&config, port),
        Command::Run { config, filename } => run_script(&config, &filename),
        Command::Facts {
            config,
            folder,
            step,
        } => facts(&config, &folder, step),
        Command::Fact { config } => fact(&config),
    }
}

/// Create the directories the configured prefixes point into
pub fn init(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let mut created = Vec::new();
    for prefix in [
        &config.clips.python_file_path,
        &config.clips.clips_file_path,
        &config.clips.output_file_path,
    ] {
        if let Some(dir) = prefix_dir(prefix) {
            fs::create_dir_all(dir).map_err(|e| {
                CliError::io_error(format!("Failed to create directory {:?}: {}", dir, e))
            })?;
            created.push(dir.display().to_string());
        }
    }

    write_response(json!({ "directories": created }))
}

/// Start the HTTP server
pub fn serve(config_path: &Path, port: Option<u16>) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let mut http = config.http.clone();
    if let Some(port) = port {
        http.port = port;
    }
    let server = HttpServer::new(http, &config.clips);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server.start().await.map_err(|e| {
            Logger::fatal("HTTP_SERVER_FAILED", &[("reason", &e.to_string())]);
            CliError::serve_failed(format!("HTTP server failed: {}", e))
        })
    })
}

/// Launch the script once
pub fn run_script(config_path: &Path, filename: &str) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let service = ClipsService::from_config(&config.clips);

    match service.launch(filename) {
        Ok(launched) => write_response(serde_json::to_value(&launched)?),
        Err(e) => write_error(e.code(), &e.to_string()),
    }
}

/// Print the artifact for `folder` at `step`
pub fn facts(config_path: &Path, folder: &str, step: i32) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let service = ClipsService::from_config(&config.clips);

    match service.artifacts().read_folder_step(folder, step) {
        Ok(content) => write_response(json!(content)),
        Err(e) => write_error(e.code(), &e.to_string()),
    }
}

/// Print the fixed artifact
pub fn fact(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;
    let service = ClipsService::from_config(&config.clips);

    match service.artifacts().read_default() {
        Ok(content) => write_response(json!(content)),
        Err(e) => write_error(e.code(), &e.to_string()),
    }
}

/// Directory a path prefix writes into.
///
/// `/var/clips/` names the directory itself; `/var/clips/up_` names files
/// inside `/var/clips`.
fn prefix_dir(prefix: &str) -> Option<&Path> {
    if prefix.ends_with('/') || prefix.ends_with('\\') {
        Some(Path::new(prefix))
    } else {
        Path::new(prefix)
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }
}
