//! # Clips Module
//!
//! Upload placeholders, rule engine script launches, and artifact reads.
//!
//! Components:
//! - [`LocalClipStorage`]: placeholder files under `clipsfilepath`
//! - [`ScriptRunner`]: fire-and-forget `<interpreter> <pythonfilepath><name>`
//! - [`ArtifactReader`]: text artifacts under `outputfilepath`
//! - [`ClipsService`]: the request-level operations over all three

pub mod artifacts;
pub mod backend;
pub mod config;
pub mod errors;
pub mod local;
pub mod runner;
pub mod service;

pub use artifacts::ArtifactReader;
pub use backend::{ClipStorage, StoreOutcome};
pub use config::ClipsConfig;
pub use errors::{ClipsError, ClipsResult};
pub use local::LocalClipStorage;
pub use runner::{LaunchedScript, ScriptRunner};
pub use service::ClipsService;
