//! Output configuration types

/// Configuration for output formatting.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub use_color: bool,
    /// Print the "Displaying structure for" banner before the tree
    pub show_header: bool,
}

impl OutputConfig {
    /// Canonical plain-text output: no color, no banner.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            show_header: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            use_color: true,
            show_header: true,
        }
    }
}
