//! In-memory line sink

use std::io;

use crate::tree::{RenderLine, TreeOutput};

/// Collects rendered lines instead of writing them anywhere.
#[derive(Debug, Default)]
pub struct LineCollector {
    lines: Vec<RenderLine>,
}

impl LineCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[RenderLine] {
        &self.lines
    }

    /// Plain text of each line, without trailing newlines.
    pub fn to_strings(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.to_string()).collect()
    }

    /// The whole tree as newline-terminated plain text.
    pub fn to_text(&self) -> String {
        self.lines.iter().map(|l| format!("{}\n", l)).collect()
    }
}

impl TreeOutput for LineCollector {
    fn output_line(&mut self, line: &RenderLine) -> io::Result<()> {
        self.lines.push(line.clone());
        Ok(())
    }
}
