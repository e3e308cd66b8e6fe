use cairo_version_domain::VersionScanner;
use cairo_version_ports::header::HeaderSource;
use cairo_version_shared_kernel::{ErrorContext, Result, VersionString};

pub struct ExtractVersion<'a> {
    source: &'a dyn HeaderSource,
}

impl<'a> ExtractVersion<'a> {
    pub fn new(source: &'a dyn HeaderSource) -> Self {
        Self { source }
    }

    /// Scans every line of the header, then decides.
    pub fn run(&self) -> Result<VersionString> {
        let mut scanner = VersionScanner::new();
        self.source.for_each_line(&mut |line| scanner.feed(line))?;

        let missing = scanner.components().missing();
        if !missing.is_empty() {
            log::debug!("header under {} is missing {missing:?}", self.source.search_root().display());
        }
        scanner
            .finish()
            .with_context(|| format!("extracting version under {}", self.source.search_root().display()))
    }
}
