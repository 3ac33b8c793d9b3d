//! Error types for structure rendering

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while rendering or saving a directory structure.
///
/// Every variant aborts the operation in progress; there is no partial result.
#[derive(Debug, Error)]
pub enum StructureError {
    #[error("cannot access '{}': No such file or directory", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot list '{}': Not a directory", path.display())]
    NotADirectory { path: PathBuf },

    #[error("cannot open directory '{}': Permission denied", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("cannot read directory '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StructureError {
    /// Classify a failure to list `path`.
    pub(crate) fn listing(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::NotADirectory => Self::NotADirectory { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::ReadDir { path, source },
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        Self::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    /// The path the failed operation was working on.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path }
            | Self::NotADirectory { path }
            | Self::PermissionDenied { path }
            | Self::ReadDir { path, .. }
            | Self::Write { path, .. } => path,
        }
    }
}
