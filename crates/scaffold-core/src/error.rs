//! Error taxonomy for scaffolding operations
//!
//! Library functions return [`ScaffoldError`] so callers can tell a missing
//! template from an overwrite conflict. The binary wraps everything in
//! `anyhow` and exits non-zero.

use std::io;
use std::path::{Path, PathBuf};

/// What kind of definition a lookup was for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionKind {
    Template,
    Component,
}

impl std::fmt::Display for DefinitionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DefinitionKind::Template => write!(f, "template"),
            DefinitionKind::Component => write!(f, "component"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    #[error("{kind} '{name}' not found")]
    NotFound { kind: DefinitionKind, name: String },

    #[error("file already exists: {} (use --force to overwrite)", .0.display())]
    AlreadyExists(PathBuf),

    #[error("{action} {}: {source}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cancelled")]
    Cancelled,

    #[error("invalid project name: {0}")]
    InvalidProjectName(String),

    #[error("invalid value for '{key}': {reason}")]
    InvalidSetting { key: String, reason: String },
}

impl ScaffoldError {
    pub fn template_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: DefinitionKind::Template,
            name: name.to_string(),
        }
    }

    pub fn component_not_found(name: &str) -> Self {
        Self::NotFound {
            kind: DefinitionKind::Component,
            name: name.to_string(),
        }
    }

    /// Wrap an I/O error with the operation and path that failed
    pub fn io(action: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            action,
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists(_))
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

pub type Result<T, E = ScaffoldError> = std::result::Result<T, E>;
