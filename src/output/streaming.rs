//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which writes each line to its
//! sink as soon as `TreeRenderer` produces it. Color is applied here and
//! nowhere else; the renderer only deals in plain `RenderLine`s.

use std::io;
use std::path::Path;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::tree::{RenderLine, TreeOutput};

use super::config::OutputConfig;
use super::utils::{header_color, line_color};

/// Writes rendered lines to a termcolor sink without buffering the tree.
pub struct StreamingFormatter<W: WriteColor> {
    config: OutputConfig,
    out: W,
}

impl StreamingFormatter<StandardStream> {
    /// Formatter writing to stdout. `use_color` is final here; the terminal
    /// and environment checks belong to the caller.
    pub fn stdout(config: OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::AlwaysAnsi
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice), config)
    }
}

impl<W: WriteColor> StreamingFormatter<W> {
    pub fn new(out: W, config: OutputConfig) -> Self {
        Self { config, out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Banner naming the directory being shown, if enabled.
    pub fn write_header(&mut self, root: &Path) -> io::Result<()> {
        if !self.config.show_header {
            return Ok(());
        }
        writeln!(self.out)?;
        if self.config.use_color {
            self.out.set_color(&header_color())?;
        }
        write!(self.out, "Displaying structure for: {}", root.display())?;
        if self.config.use_color {
            self.out.reset()?;
        }
        writeln!(self.out)?;
        writeln!(self.out)?;
        Ok(())
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: WriteColor> TreeOutput for StreamingFormatter<W> {
    fn output_line(&mut self, line: &RenderLine) -> io::Result<()> {
        write!(self.out, "{}{}", line.prefix, line.connector.as_str())?;
        if self.config.use_color {
            self.out.set_color(&line_color(line.kind))?;
            write!(self.out, "{}", line.text)?;
            self.out.reset()?;
        } else {
            write!(self.out, "{}", line.text)?;
        }
        writeln!(self.out)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use termcolor::Buffer;

    use super::*;
    use crate::output::strip_ansi;
    use crate::tree::{Connector, LineKind};

    fn line(prefix: &str, connector: Connector, text: &str, kind: LineKind) -> RenderLine {
        RenderLine {
            prefix: prefix.to_string(),
            connector,
            text: text.to_string(),
            kind,
        }
    }

    fn sample_lines() -> Vec<RenderLine> {
        vec![
            line("", Connector::Branch, "src", LineKind::Directory),
            line("┃   ", Connector::LastBranch, "main.rs", LineKind::File),
            line("", Connector::LastBranch, "locked [permission denied]", LineKind::Error),
        ]
    }

    fn format_with(buffer: Buffer, config: OutputConfig) -> String {
        let mut formatter = StreamingFormatter::new(buffer, config);
        for l in sample_lines() {
            formatter.output_line(&l).unwrap();
        }
        String::from_utf8(formatter.into_inner().into_inner()).unwrap()
    }

    const EXPECTED: &str = "┣━━ src\n┃   ┗━━ main.rs\n┗━━ locked [permission denied]\n";

    #[test]
    fn test_plain_output() {
        let output = format_with(Buffer::no_color(), OutputConfig::plain());
        assert_eq!(output, EXPECTED);
    }

    #[test]
    fn test_colored_output_strips_to_plain() {
        let config = OutputConfig {
            use_color: true,
            show_header: false,
        };
        let output = format_with(Buffer::ansi(), config);
        assert!(output.contains("\x1b["), "expected escape codes: {:?}", output);
        assert_eq!(strip_ansi(&output), EXPECTED);
    }

    #[test]
    fn test_connectors_are_not_colored() {
        let config = OutputConfig {
            use_color: true,
            show_header: false,
        };
        let output = format_with(Buffer::ansi(), config);
        assert!(output.starts_with("┣━━ \x1b["), "got {:?}", output);
    }

    #[test]
    fn test_header() {
        let mut formatter = StreamingFormatter::new(
            Buffer::no_color(),
            OutputConfig {
                use_color: false,
                show_header: true,
            },
        );
        formatter.write_header(&PathBuf::from("/tmp/project")).unwrap();
        let output = String::from_utf8(formatter.into_inner().into_inner()).unwrap();
        assert_eq!(output, "\nDisplaying structure for: /tmp/project\n\n");
    }

    #[test]
    fn test_header_disabled() {
        let mut formatter = StreamingFormatter::new(Buffer::no_color(), OutputConfig::plain());
        formatter.write_header(&PathBuf::from("/tmp/project")).unwrap();
        assert!(formatter.into_inner().is_empty());
    }
}
