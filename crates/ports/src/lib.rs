//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`header`]: access to the lines of a version header
//!
//! The use case layer depends on these traits only, never on a concrete
//! filesystem adapter.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod header;
