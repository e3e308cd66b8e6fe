// crates/ports/src/header.rs
use std::path::Path;

use cairo_version_shared_kernel::Result;

/// Port for reading a version header line by line.
pub trait HeaderSource {
    /// Directory reported to the user when the header lacks a component.
    fn search_root(&self) -> &Path;

    /// Calls `visit` with every line of the header, in order, without the line terminator.
    fn for_each_line(&self, visit: &mut dyn FnMut(&str)) -> Result<()>;
}
