//! Directory entries as seen by the renderer

use std::ffi::OsString;
use std::fs::FileType;
use std::path::{Path, PathBuf};

/// What kind of filesystem node an entry is.
///
/// Symlinks are never followed, so a link to a directory is `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File,
    /// Symlinks, devices, fifos, sockets. Rendered like files.
    Other,
}

impl EntryKind {
    pub fn from_file_type(file_type: FileType) -> Self {
        if file_type.is_dir() {
            EntryKind::Directory
        } else if file_type.is_file() {
            EntryKind::File
        } else {
            EntryKind::Other
        }
    }

    pub fn is_dir(self) -> bool {
        self == EntryKind::Directory
    }
}

/// A single child of a listed directory.
#[derive(Debug, Clone)]
pub struct TreeEntry {
    path: PathBuf,
    file_name: OsString,
    name: String,
    kind: EntryKind,
}

impl TreeEntry {
    pub fn new(path: PathBuf, kind: EntryKind) -> Self {
        let file_name = path
            .file_name()
            .map(|s| s.to_os_string())
            .unwrap_or_else(|| path.as_os_str().to_os_string());
        let name = file_name.to_string_lossy().to_string();
        Self {
            path,
            file_name,
            name,
            kind,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Base name for display. Lossy for non-UTF-8 names.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw base name, used as the final ordering tie-break.
    pub fn file_name(&self) -> &OsString {
        &self.file_name
    }

    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    pub fn is_dir(&self) -> bool {
        self.kind.is_dir()
    }
}

/// Display name for a directory path, the whole path when it has no final
/// component (`/`, `..`).
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
