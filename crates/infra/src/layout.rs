// crates/infra/src/layout.rs
use std::path::{Path, PathBuf};

use cairo_version_shared_kernel::{InfraResult, InfrastructureError};

/// Location of the version header relative to the search root.
pub const HEADER_RELATIVE_PATH: [&str; 2] = ["src", "cairo-version.h"];

/// Where the tool looks for `cairo-version.h`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLayout {
    root: PathBuf,
}

impl HeaderLayout {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Layout rooted at the directory holding the running executable.
    pub fn from_current_exe() -> InfraResult<Self> {
        let exe = std::env::current_exe()
            .map_err(|source| InfrastructureError::ExecutableLocation { source })?;
        let root = exe.parent().map(Path::to_path_buf).unwrap_or_default();
        log::debug!("search root: {}", root.display());
        Ok(Self::new(root))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn header_path(&self) -> PathBuf {
        HEADER_RELATIVE_PATH.iter().fold(self.root.clone(), |path, part| path.join(part))
    }
}
