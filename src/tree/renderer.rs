//! TreeRenderer - streams a directory tree line by line
//!
//! Traversal is depth-first and pre-order. Each directory is listed exactly
//! once, and its listing is resolved before the directory's own line is
//! written, so a directory that cannot be read shows up as a single error
//! line in its own slot.

use std::io;
use std::ops::AddAssign;
use std::path::Path;

use tracing::debug;

use crate::error::ListingError;

use super::entry::{TreeEntry, display_name};
use super::line::{Connector, LineKind, RenderLine, child_prefix};
use super::listing::list_children;

/// Sink for rendered lines, written to as soon as each line is produced.
pub trait TreeOutput {
    fn output_line(&mut self, line: &RenderLine) -> io::Result<()>;
}

/// Count of lines emitted by a render, by kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub directories: usize,
    pub files: usize,
    pub errors: usize,
}

impl RenderSummary {
    pub fn lines(&self) -> usize {
        self.directories + self.files + self.errors
    }
}

impl AddAssign for RenderSummary {
    fn add_assign(&mut self, other: Self) {
        self.directories += other.directories;
        self.files += other.files;
        self.errors += other.errors;
    }
}

/// Renders the descendants of a directory as a tree.
///
/// The renderer holds no state between calls, so one instance can be shared
/// by any number of independent renders.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreeRenderer;

impl TreeRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render everything below `root`. The root's own name is not printed.
    ///
    /// Filesystem failures never make this return an error; they become
    /// error lines. The only `Err` is a failure to write to `output`.
    pub fn render<O: TreeOutput>(&self, root: &Path, output: &mut O) -> io::Result<RenderSummary> {
        self.render_with_prefix(root, "", output)
    }

    /// Render below `root` with every line starting with `prefix`.
    pub fn render_with_prefix<O: TreeOutput>(
        &self,
        root: &Path,
        prefix: &str,
        output: &mut O,
    ) -> io::Result<RenderSummary> {
        let summary = match list_children(root) {
            Ok(children) => self.render_children(children, prefix, output)?,
            Err(err) => {
                output.output_line(&error_line(&display_name(root), &err, prefix, Connector::None))?;
                RenderSummary {
                    errors: 1,
                    ..Default::default()
                }
            }
        };

        debug!(
            root = %root.display(),
            directories = summary.directories,
            files = summary.files,
            errors = summary.errors,
            "render finished"
        );
        Ok(summary)
    }

    fn render_children<O: TreeOutput>(
        &self,
        children: Vec<TreeEntry>,
        prefix: &str,
        output: &mut O,
    ) -> io::Result<RenderSummary> {
        let mut summary = RenderSummary::default();
        let count = children.len();

        for (index, child) in children.into_iter().enumerate() {
            let is_last = index + 1 == count;
            let connector = Connector::for_position(is_last);

            if !child.is_dir() {
                output.output_line(&entry_line(&child, prefix, connector, LineKind::File))?;
                summary.files += 1;
                continue;
            }

            match list_children(child.path()) {
                Ok(grandchildren) => {
                    output.output_line(&entry_line(&child, prefix, connector, LineKind::Directory))?;
                    summary.directories += 1;
                    summary += self.render_children(
                        grandchildren,
                        &child_prefix(prefix, is_last),
                        output,
                    )?;
                }
                Err(err) => {
                    output.output_line(&error_line(child.name(), &err, prefix, connector))?;
                    summary.errors += 1;
                }
            }
        }

        Ok(summary)
    }
}

fn entry_line(entry: &TreeEntry, prefix: &str, connector: Connector, kind: LineKind) -> RenderLine {
    RenderLine {
        prefix: prefix.to_string(),
        connector,
        text: entry.name().to_string(),
        kind,
    }
}

fn error_line(name: &str, err: &ListingError, prefix: &str, connector: Connector) -> RenderLine {
    debug!(error = %err, "directory listing failed");
    RenderLine {
        prefix: prefix.to_string(),
        connector,
        text: format!("{} {}", name, err.annotation()),
        kind: LineKind::Error,
    }
}
