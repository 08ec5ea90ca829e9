//! Twig - render a directory as a tree, directories first

pub mod error;
pub mod output;
pub mod root;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

use std::path::Path;

pub use error::{ListingError, RootError};
pub use output::{LineCollector, OutputConfig, StreamingFormatter, strip_ansi};
pub use root::validate_root;
pub use tree::{EntryKind, LineKind, RenderLine, RenderSummary, TreeEntry, TreeOutput, TreeRenderer};

/// Render the tree below `root` as newline-terminated plain text.
pub fn render_to_string(root: &Path) -> String {
    let mut collector = LineCollector::new();
    // Writing to a LineCollector cannot fail
    TreeRenderer::new().render(root, &mut collector).ok();
    collector.to_text()
}
