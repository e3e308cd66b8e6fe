// crates/shared-kernel/src/value_objects/component.rs
use std::fmt;

/// One of the three numeric parts of a cairo version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ComponentKind {
    Major,
    Minor,
    Micro,
}

impl ComponentKind {
    /// All kinds in output order.
    pub const ALL: [Self; 3] = [Self::Major, Self::Minor, Self::Micro];

    /// The literal macro-definition prefix, trailing space included.
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Major => "#define CAIRO_VERSION_MAJOR ",
            Self::Minor => "#define CAIRO_VERSION_MINOR ",
            Self::Micro => "#define CAIRO_VERSION_MICRO ",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Major => "major",
            Self::Minor => "minor",
            Self::Micro => "micro",
        }
    }

    /// Returns the kind whose prefix starts `line`, along with the remainder of the line.
    pub fn split_line(line: &str) -> Option<(Self, &str)> {
        Self::ALL
            .into_iter()
            .find_map(|kind| line.strip_prefix(kind.prefix()).map(|rest| (kind, rest)))
    }
}

impl fmt::Display for ComponentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
