// crates/shared-kernel/src/value_objects/version.rs
use std::fmt;

use super::ComponentKind;
use crate::error::{DomainError, DomainResult};

/// Version tokens collected while scanning a header. Tokens are kept verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VersionComponents {
    major: Option<String>,
    minor: Option<String>,
    micro: Option<String>,
}

impl VersionComponents {
    pub const fn new() -> Self {
        Self { major: None, minor: None, micro: None }
    }

    pub fn get(&self, kind: ComponentKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    /// Stores `value` for `kind` unless that component is already set.
    ///
    /// Empty values never count as set. Returns `true` when the value was stored.
    pub fn set_if_unset(&mut self, kind: ComponentKind, value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        let slot = self.slot_mut(kind);
        if slot.is_some() {
            return false;
        }
        *slot = Some(value.to_owned());
        true
    }

    pub fn is_complete(&self) -> bool {
        self.missing().is_empty()
    }

    pub fn missing(&self) -> Vec<ComponentKind> {
        ComponentKind::ALL.into_iter().filter(|kind| self.slot(*kind).is_none()).collect()
    }

    /// Converts into a [`VersionString`], failing if any component is unset.
    pub fn into_version(self) -> DomainResult<VersionString> {
        match (self.major, self.minor, self.micro) {
            (Some(major), Some(minor), Some(micro)) => Ok(VersionString { major, minor, micro }),
            (major, minor, micro) => {
                let missing = [major.is_none(), minor.is_none(), micro.is_none()]
                    .into_iter()
                    .zip(ComponentKind::ALL)
                    .filter_map(|(absent, kind)| absent.then_some(kind))
                    .collect();
                Err(DomainError::MissingComponent { missing })
            }
        }
    }

    fn slot(&self, kind: ComponentKind) -> &Option<String> {
        match kind {
            ComponentKind::Major => &self.major,
            ComponentKind::Minor => &self.minor,
            ComponentKind::Micro => &self.micro,
        }
    }

    fn slot_mut(&mut self, kind: ComponentKind) -> &mut Option<String> {
        match kind {
            ComponentKind::Major => &mut self.major,
            ComponentKind::Minor => &mut self.minor,
            ComponentKind::Micro => &mut self.micro,
        }
    }
}

/// A complete `major.minor.micro` version.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VersionString {
    major: String,
    minor: String,
    micro: String,
}

impl VersionString {
    pub fn major(&self) -> &str {
        &self.major
    }

    pub fn minor(&self) -> &str {
        &self.minor
    }

    pub fn micro(&self) -> &str {
        &self.micro
    }
}

impl fmt::Display for VersionString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.micro)
    }
}
