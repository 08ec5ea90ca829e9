//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// A temporary directory tree for testing.
///
/// The directory is removed when dropped. Any permissions changed through
/// [`TestDir::lock`] are restored first so cleanup can succeed.
pub struct TestDir {
    dir: TempDir,
    locked: Vec<PathBuf>,
}

impl TestDir {
    /// Create a new empty temporary directory.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self {
            dir,
            locked: Vec::new(),
        }
    }

    /// Get the path to the temporary directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Add an empty file, creating parent directories as needed.
    pub fn add_file(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, "").expect("Failed to write file");
        full_path
    }

    /// Add a directory and any missing parents.
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.dir.path().join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Remove all permissions from a directory.
    ///
    /// Returns false when the directory is still listable afterwards, which
    /// happens when running as root. Callers should skip permission checks then.
    #[cfg(unix)]
    pub fn lock(&mut self, path: &str) -> bool {
        use std::os::unix::fs::PermissionsExt;

        let full_path = self.dir.path().join(path);
        fs::set_permissions(&full_path, fs::Permissions::from_mode(0o000))
            .expect("Failed to set permissions");
        self.locked.push(full_path.clone());
        fs::read_dir(&full_path).is_err()
    }

    /// The sample layout used throughout the test suite:
    /// `sub_dir2/`, `sub_dir1/file1.txt`, `file2.log`, `a_file.txt`.
    pub fn sample() -> Self {
        let dir = Self::new();
        dir.add_dir("sub_dir2");
        dir.add_dir("sub_dir1");
        dir.add_file("file2.log");
        dir.add_file("sub_dir1/file1.txt");
        dir.add_file("a_file.txt");
        dir
    }
}

impl Default for TestDir {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for TestDir {
    fn drop(&mut self) {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            for path in &self.locked {
                let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o755));
            }
        }
    }
}
