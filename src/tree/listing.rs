//! Directory enumeration and child ordering

use std::cmp::Ordering;
use std::path::Path;

use tracing::trace;

use crate::error::ListingError;

use super::entry::{EntryKind, TreeEntry};

/// Outcome of listing one directory: its sorted children, or why they
/// could not be read.
pub type Listing = Result<Vec<TreeEntry>, ListingError>;

/// Read the direct children of `path` and sort them for display.
///
/// Any error while opening the directory or iterating it fails the whole
/// listing. An entry whose type cannot be determined is kept as
/// [`EntryKind::Other`].
pub fn list_children(path: &Path) -> Listing {
    let read_dir = std::fs::read_dir(path).map_err(|e| ListingError::from_io(path, e))?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry.map_err(|e| ListingError::from_io(path, e))?;
        let kind = entry
            .file_type()
            .map(EntryKind::from_file_type)
            .unwrap_or(EntryKind::Other);
        entries.push(TreeEntry::new(entry.path(), kind));
    }

    sort_entries(&mut entries);
    trace!(path = %path.display(), children = entries.len(), "listed directory");
    Ok(entries)
}

/// Sort siblings in display order.
pub fn sort_entries(entries: &mut [TreeEntry]) {
    entries.sort_by(compare_entries);
}

/// Directories first, then case-insensitive name, then the exact name so
/// that names differing only by case have a fixed order.
pub fn compare_entries(a: &TreeEntry, b: &TreeEntry) -> Ordering {
    (!a.is_dir())
        .cmp(&!b.is_dir())
        .then_with(|| a.name().to_lowercase().cmp(&b.name().to_lowercase()))
        .then_with(|| a.file_name().cmp(b.file_name()))
}
