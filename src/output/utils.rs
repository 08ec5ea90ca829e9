//! Shared utility functions for output formatting

use std::sync::LazyLock;

use regex::Regex;
use termcolor::{Color, ColorSpec};

use crate::tree::LineKind;

static ANSI_SGR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\x1b\[[0-9;]*m").expect("static regex is valid")
});

/// Remove SGR color sequences, recovering the plain tree text.
pub fn strip_ansi(text: &str) -> String {
    ANSI_SGR.replace_all(text, "").into_owned()
}

/// Color used for the name part of a line.
pub fn line_color(kind: LineKind) -> ColorSpec {
    let mut spec = ColorSpec::new();
    match kind {
        LineKind::Directory => spec.set_fg(Some(Color::Blue)).set_bold(true),
        LineKind::File => spec.set_fg(Some(Color::Green)),
        LineKind::Error => spec.set_fg(Some(Color::Red)),
    };
    spec
}

/// Color for the header banner.
pub fn header_color() -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(Color::Cyan));
    spec
}
