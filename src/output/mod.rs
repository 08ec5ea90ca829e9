//! Tree output sinks
//!
//! - `config` - Output configuration types
//! - `streaming` - Colored line-by-line formatter for terminals and buffers
//! - `collector` - In-memory sink for tests and library callers
//! - `utils` - Styles and ANSI stripping

mod collector;
mod config;
mod streaming;
mod utils;

pub use collector::LineCollector;
pub use config::OutputConfig;
pub use streaming::StreamingFormatter;
pub use utils::{header_color, line_color, strip_ansi};
