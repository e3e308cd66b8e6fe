//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`orchestrator`]: runs a header source through the version scanner
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod orchestrator;

pub use orchestrator::ExtractVersion;
