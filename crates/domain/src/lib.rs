//! # Domain
//!
//! Pure scanning rules for cairo version headers. Nothing here touches the
//! filesystem; lines are fed in by the caller.

#![allow(clippy::multiple_crate_versions)]

pub mod scanner;

pub use scanner::VersionScanner;
