//! Observability for the clips gateway
//!
//! Structured JSON-lines logging only. Every component logs through
//! [`Logger`]; nothing here has side effects on request handling.
//!
//! ```ignore
//! use pbr::observability::Logger;
//!
//! Logger::info("SCRIPT_LAUNCHED", &[("pid", "4242")]);
//! ```

mod logger;

pub use logger::{Logger, Severity};
