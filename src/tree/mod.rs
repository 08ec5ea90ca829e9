//! Directory tree rendering
//!
//! - `listing`: reads one directory and orders its children
//! - `renderer`: `TreeRenderer`, the recursive walk that streams `RenderLine`s
//! - `line`: the line type and connector glyphs

mod entry;
mod line;
mod listing;
mod renderer;

pub use entry::{EntryKind, TreeEntry, display_name};
pub use line::{
    BRANCH, Connector, LAST_BRANCH, LineKind, PIPE_PREFIX, RenderLine, SPACE_PREFIX, child_prefix,
};
pub use listing::{Listing, compare_entries, list_children, sort_entries};
pub use renderer::{RenderSummary, TreeOutput, TreeRenderer};
