//! # HTTP Server Module
//!
//! Axum server exposing the clips operations.
//!
//! # Endpoints
//!
//! - `/health` - Health check
//! - `/clips/upload`, `/clips/run`, `/clips/facts`, `/clips/fact`

pub mod clips_routes;
pub mod config;
pub mod observability_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use server::HttpServer;
