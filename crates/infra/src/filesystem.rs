// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use cairo_version_ports::header::HeaderSource;
use cairo_version_shared_kernel::{InfrastructureError, Result};

use crate::layout::HeaderLayout;
use crate::persistence::FileReader;

/// [`HeaderSource`] backed by a header file on disk.
#[derive(Debug, Clone)]
pub struct FileHeaderSource {
    path: PathBuf,
    search_root: PathBuf,
}

impl FileHeaderSource {
    /// Reads `path`, reporting its parent directory as the search root.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let search_root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self { path, search_root }
    }

    pub fn from_layout(layout: &HeaderLayout) -> Self {
        Self { path: layout.header_path(), search_root: layout.root().to_path_buf() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HeaderSource for FileHeaderSource {
    fn search_root(&self) -> &Path {
        &self.search_root
    }

    fn for_each_line(&self, visit: &mut dyn FnMut(&str)) -> Result<()> {
        log::debug!("reading {}", self.path.display());
        FileReader::for_each_line(&self.path, visit).map_err(|source| {
            InfrastructureError::FileRead { path: self.path.clone(), source }.into()
        })
    }
}
