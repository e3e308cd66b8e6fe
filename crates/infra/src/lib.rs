// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod layout;
pub mod persistence;

pub use filesystem::FileHeaderSource;
pub use layout::HeaderLayout;
