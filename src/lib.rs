//! pbr - HTTP front end for a CLIPS rule engine script
//!
//! Uploads create placeholder files, `run` launches the engine script
//! without waiting for it, and the fact endpoints read back the text
//! artifacts the script writes.

pub mod cli;
pub mod clips;
pub mod http_server;
pub mod model;
pub mod observability;
