//! Checks run on the requested path before anything is rendered

use std::io;
use std::path::{Path, PathBuf};

use crate::error::RootError;

/// Confirm `path` exists and is a directory, returning its canonical form.
///
/// A symlink to a directory is accepted; the link is resolved here, while
/// links found during traversal are never followed.
pub fn validate_root(path: &Path) -> Result<PathBuf, RootError> {
    let metadata = std::fs::metadata(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => RootError::NotFound(path.to_path_buf()),
        _ => RootError::Inaccessible {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    if !metadata.is_dir() {
        return Err(RootError::NotADirectory(path.to_path_buf()));
    }

    path.canonicalize().map_err(|e| RootError::Inaccessible {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_directory_is_accepted() {
        let dir = TempDir::new().unwrap();
        let root = validate_root(dir.path()).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn test_missing_path() {
        let dir = TempDir::new().unwrap();
        let err = validate_root(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, RootError::NotFound(_)));
    }

    #[test]
    fn test_file_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("file2.log");
        fs::write(&file, "").unwrap();
        let err = validate_root(&file).unwrap_err();
        assert!(matches!(err, RootError::NotADirectory(_)));
    }

    #[test]
    #[cfg(unix)]
    fn test_symlinked_root_is_resolved() {
        let dir = TempDir::new().unwrap();
        let real = dir.path().join("real");
        fs::create_dir(&real).unwrap();
        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&real, &link).unwrap();

        let root = validate_root(&link).unwrap();
        assert_eq!(root, real.canonicalize().unwrap());
    }
}
