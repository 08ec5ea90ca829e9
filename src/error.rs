//! Error types for directory listing and root validation

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to enumerate a single directory.
///
/// Produced by [`crate::tree::list_children`] and consumed by the renderer,
/// which turns it into an error line for that directory only.
#[derive(Debug, Error)]
pub enum ListingError {
    #[error("permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ListingError {
    /// Classify an I/O error raised while listing `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::PermissionDenied {
            ListingError::PermissionDenied { path }
        } else {
            ListingError::Io { path, source }
        }
    }

    pub fn is_permission_denied(&self) -> bool {
        matches!(self, ListingError::PermissionDenied { .. })
    }

    /// Annotation appended to the directory name on its error line.
    pub fn annotation(&self) -> String {
        match self {
            ListingError::PermissionDenied { .. } => "[permission denied]".to_string(),
            ListingError::Io { source, .. } => format!("[unreadable: {}]", source),
        }
    }
}

/// The path handed to the CLI cannot be rendered.
#[derive(Debug, Error)]
pub enum RootError {
    #[error("path '{}' does not exist", .0.display())]
    NotFound(PathBuf),
    #[error("path '{}' is not a directory", .0.display())]
    NotADirectory(PathBuf),
    #[error("cannot access '{}': {source}", .path.display())]
    Inaccessible {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
