//! CLI argument definitions using clap
//!
//! Commands:
//! - pbr init --config <path>
//! - pbr serve --config <path> [--port <port>]
//! - pbr run --config <path> <filename>
//! - pbr facts --config <path> --folder <folder> --step <step>
//! - pbr fact --config <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// pbr - upload CLIPS programs, launch the rule engine, read its artifacts
#[derive(Parser, Debug)]
#[command(name = "pbr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Create the configured script, clips and output directories
    Init {
        /// Path to configuration file
        #[arg(long, default_value = "./pbr.json")]
        config: PathBuf,
    },

    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./pbr.json")]
        config: PathBuf,

        /// Override the configured port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Launch the rule engine script once and exit
    Run {
        /// Path to configuration file
        #[arg(long, default_value = "./pbr.json")]
        config: PathBuf,

        /// Script file name, appended to pythonfilepath
        filename: String,
    },

    /// Print the artifact for one step of a run folder
    Facts {
        /// Path to configuration file
        #[arg(long, default_value = "./pbr.json")]
        config: PathBuf,

        #[arg(long)]
        folder: String,

        #[arg(long, allow_negative_numbers = true)]
        step: i32,
    },

    /// Print the fixed fact artifact
    Fact {
        /// Path to configuration file
        #[arg(long, default_value = "./pbr.json")]
        config: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_facts() {
        let cli = Cli::try_parse_from(["pbr", "facts", "--folder", "alpha", "--step", "3"]).unwrap();
        match cli.command {
            Command::Facts { config, folder, step } => {
                assert_eq!(config, PathBuf::from("./pbr.json"));
                assert_eq!(folder, "alpha");
                assert_eq!(step, 3);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_serve_port() {
        let cli = Cli::try_parse_from(["pbr", "serve", "--config", "/etc/pbr.json", "--port", "9000"])
            .unwrap();
        assert!(matches!(cli.command, Command::Serve { port: Some(9000), .. }));
    }

    #[test]
    fn test_run_requires_filename() {
        assert!(Cli::try_parse_from(["pbr", "run"]).is_err());
    }
}
