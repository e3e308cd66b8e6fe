// crates/shared-kernel/src/value_objects/mod.rs
pub mod component;
pub mod version;

pub use component::ComponentKind;
pub use version::{VersionComponents, VersionString};
