// src/app.rs
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use cairo_version_infra::{FileHeaderSource, HeaderLayout};
use cairo_version_shared_kernel::{CairoVersionError, VersionString};
use cairo_version_usecase::ExtractVersion;

use crate::presentation;

/// Exit status used when the header lacks a component (`-1` as seen by the shell).
pub const MISSING_COMPONENT_EXIT: u8 = 255;

/// Result of one extraction, ready to be reported.
#[derive(Debug)]
pub enum Outcome {
    Found(VersionString),
    MissingComponent { search_root: PathBuf },
    Failed(anyhow::Error),
}

impl Outcome {
    pub fn exit_status(&self) -> u8 {
        match self {
            Self::Found(_) => 0,
            Self::MissingComponent { .. } => MISSING_COMPONENT_EXIT,
            Self::Failed(_) => 1,
        }
    }

    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    /// Writes the success line to `stdout` or the diagnostic line to `stderr`.
    pub fn report(&self, stdout: &mut impl Write, stderr: &mut impl Write) -> std::io::Result<()> {
        match self {
            Self::Found(version) => presentation::write_version(stdout, version),
            Self::MissingComponent { search_root } => presentation::write_missing_component(stderr, search_root),
            Self::Failed(err) => presentation::write_failure(stderr, err),
        }
    }
}

/// Reads the header under `layout` and classifies the result.
pub fn extract(layout: &HeaderLayout) -> Outcome {
    let source = FileHeaderSource::from_layout(layout);
    match ExtractVersion::new(&source).run() {
        Ok(version) => Outcome::Found(version),
        Err(err) if err.is_missing_component() => {
            log::debug!("{err}");
            Outcome::MissingComponent { search_root: layout.root().to_path_buf() }
        }
        Err(err) => Outcome::Failed(err.into()),
    }
}

/// Resolves the layout from the running executable, then extracts.
pub fn run() -> Outcome {
    match locate() {
        Ok(layout) => extract(&layout),
        Err(err) => Outcome::Failed(err),
    }
}

fn locate() -> Result<HeaderLayout> {
    HeaderLayout::from_current_exe().map_err(|err| CairoVersionError::from(err).into())
}
