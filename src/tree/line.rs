//! Rendered tree lines and the glyphs they are built from

use std::fmt;

pub const BRANCH: &str = "┣━━ ";
pub const LAST_BRANCH: &str = "┗━━ ";
pub const PIPE_PREFIX: &str = "┃   ";
pub const SPACE_PREFIX: &str = "    ";

/// Glyph placed between the prefix and the name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connector {
    Branch,
    LastBranch,
    /// Error line for the root itself, which has no parent branch.
    None,
}

impl Connector {
    pub fn for_position(is_last: bool) -> Self {
        if is_last {
            Connector::LastBranch
        } else {
            Connector::Branch
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Connector::Branch => BRANCH,
            Connector::LastBranch => LAST_BRANCH,
            Connector::None => "",
        }
    }
}

/// What a line depicts, used by formatters to pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Directory,
    File,
    Error,
}

/// One line of tree output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    pub prefix: String,
    pub connector: Connector,
    /// Name plus, for error lines, the failure annotation.
    pub text: String,
    pub kind: LineKind,
}

impl fmt::Display for RenderLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.prefix, self.connector.as_str(), self.text)
    }
}

/// Prefix handed to the children of an entry at `prefix`.
pub fn child_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}{}", prefix, SPACE_PREFIX)
    } else {
        format!("{}{}", prefix, PIPE_PREFIX)
    }
}
