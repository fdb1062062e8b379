//! CLI module for pbr
//!
//! Provides command-line interface for:
//! - init: Create the configured directories
//! - serve: Run the HTTP server
//! - run / facts / fact: One-shot clips operations

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{fact, facts, init, run, run_command, run_script, serve, Config};
pub use errors::{CliError, CliResult};
pub use io::{write_error, write_response};
