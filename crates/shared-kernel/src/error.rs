// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::ComponentKind;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CairoVersionError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<CairoVersionError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),
}

impl CairoVersionError {
    /// Looks through any `Context` layers for the underlying domain error.
    pub fn as_domain(&self) -> Option<&DomainError> {
        match self {
            Self::Context { source, .. } => source.as_domain(),
            Self::Domain(err) => Some(err),
            Self::Infrastructure(_) => None,
        }
    }

    pub fn is_missing_component(&self) -> bool {
        matches!(self.as_domain(), Some(DomainError::MissingComponent { .. }))
    }
}

pub type Result<T> = std::result::Result<T, CairoVersionError>;

/// Domain-layer specific errors.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Missing version components: {}", join_kinds(.missing))]
    MissingComponent { missing: Vec<ComponentKind> },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

fn join_kinds(kinds: &[ComponentKind]) -> String {
    kinds.iter().map(ComponentKind::as_str).collect::<Vec<_>>().join(", ")
}

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to locate the running executable: {source}")]
    ExecutableLocation {
        #[source]
        source: std::io::Error,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<CairoVersionError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| CairoVersionError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| CairoVersionError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
