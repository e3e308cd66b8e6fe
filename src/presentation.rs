// src/presentation.rs
use std::io::{self, Write};
use std::path::Path;

use cairo_version_shared_kernel::VersionString;

pub const MISSING_COMPONENT_MESSAGE: &str = "ERROR: Could not extract cairo version from cairo-version.h in ";

pub fn write_version(out: &mut impl Write, version: &VersionString) -> io::Result<()> {
    writeln!(out, "{version}")
}

pub fn write_missing_component(out: &mut impl Write, search_root: &Path) -> io::Result<()> {
    writeln!(out, "{MISSING_COMPONENT_MESSAGE}{}", search_root.display())
}

pub fn write_failure(out: &mut impl Write, err: &anyhow::Error) -> io::Result<()> {
    writeln!(out, "ERROR: {err}")
}
