// crates/domain/src/scanner.rs
use cairo_version_shared_kernel::{ComponentKind, DomainResult, VersionComponents, VersionString};

/// Line-by-line accumulator for the three `CAIRO_VERSION_*` macros.
#[derive(Debug, Default)]
pub struct VersionScanner {
    components: VersionComponents,
}

impl VersionScanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one line of the header. Lines that do not start with a known
    /// prefix are ignored; the first non-empty value per component sticks.
    pub fn feed(&mut self, line: &str) {
        let Some((kind, rest)) = ComponentKind::split_line(line) else {
            log::trace!("ignoring line: {line:?}");
            return;
        };
        let value = rest.trim();
        if self.components.set_if_unset(kind, value) {
            log::debug!("found {kind} = {value:?}");
        } else {
            log::debug!("skipping {kind} = {value:?}; already set or empty");
        }
    }

    pub fn components(&self) -> &VersionComponents {
        &self.components
    }

    /// Ends the scan.
    pub fn finish(self) -> DomainResult<VersionString> {
        self.components.into_version()
    }
}

impl<'a> Extend<&'a str> for VersionScanner {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, lines: I) {
        for line in lines {
            self.feed(line);
        }
    }
}
