//! # Data Model
//!
//! Fact and rule records plus an in-memory store. The request surface does
//! not touch these; they exist for embedders that keep a knowledge base next
//! to the script artifacts.

pub mod fact;
pub mod rule;
pub mod store;

pub use fact::{Fact, FactView};
pub use rule::Rule;
pub use store::{Record, RecordError, RecordResult, RecordStore};
