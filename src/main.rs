//! CLI entry point for twig

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};
use twig::{OutputConfig, StreamingFormatter, TreeRenderer, validate_root};

/// Color output mode
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ColorMode {
    /// Auto-detect based on terminal and environment
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// Determine whether to use color output based on mode and environment.
fn should_use_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // https://no-color.org/
            if std::env::var_os("NO_COLOR").is_some() {
                return false;
            }
            if std::env::var_os("FORCE_COLOR").is_some() {
                return true;
            }
            if std::env::var("TERM").map(|t| t == "dumb").unwrap_or(false) {
                return false;
            }
            std::io::stdout().is_terminal()
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "twig")]
#[command(about = "Render a directory as a tree, directories first")]
#[command(version)]
struct Args {
    /// Directory to display
    path: Option<PathBuf>,

    /// Control color output: auto, always, never
    #[arg(long = "color", value_name = "WHEN", default_value = "auto")]
    color: ColorMode,

    /// Print only the tree, without the banner line
    #[arg(long = "no-header")]
    no_header: bool,
}

/// Log to stderr so stdout carries nothing but the tree.
fn init_logging() {
    let filter = EnvFilter::try_from_env("TWIG_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    init_logging();

    let args = Args::try_parse().unwrap_or_else(|e| match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
        _ => {
            eprintln!("twig: argument parsing error: {}", e);
            process::exit(1);
        }
    });

    let Some(path) = args.path else {
        eprintln!("twig: error: a directory path must be provided as an argument");
        eprintln!("Usage: twig <PATH>");
        process::exit(1);
    };

    let root = validate_root(&path).unwrap_or_else(|e| {
        eprintln!("twig: error: {}", e);
        process::exit(1);
    });
    debug!(root = %root.display(), "rendering");

    let output_config = OutputConfig {
        use_color: should_use_color(args.color),
        show_header: !args.no_header,
    };
    let mut formatter = StreamingFormatter::stdout(output_config);

    let result = formatter
        .write_header(&root)
        .and_then(|_| TreeRenderer::new().render(&root, &mut formatter))
        .and_then(|_| formatter.flush());

    if let Err(e) = result {
        eprintln!("twig: error writing output: {}", e);
        process::exit(1);
    }
}
