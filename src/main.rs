//! # Strata
//!
//! A modal code-editor widget built on iced's `text_editor`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Open an empty buffer
//! cargo run
//!
//! # Open a file
//! cargo run -- path/to/file.rs
//!
//! # Open a file without editing (no current-line highlight either)
//! cargo run -- --readonly path/to/file.rs
//! ```

use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use strata_ui::{run, Flags};

/// Strata - a modal code editor built in Rust
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File to open
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Start in read-only mode
    #[arg(short, long)]
    readonly: bool,

    /// Verbose logging
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        2 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_level(true),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    tracing::info!("Starting Strata v{}", env!("CARGO_PKG_VERSION"));

    let flags = Flags {
        file: args.file,
        read_only: args.readonly,
    };

    run(flags).map_err(|e| anyhow::anyhow!("Application error: {}", e))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from(["strata"]);
        assert!(args.file.is_none());
        assert!(!args.readonly);
    }

    #[test]
    fn test_args_with_file() {
        let args = Args::parse_from(["strata", "test.rs"]);
        assert_eq!(args.file, Some(PathBuf::from("test.rs")));
    }

    #[test]
    fn test_args_readonly() {
        let args = Args::parse_from(["strata", "--readonly", "test.rs"]);
        assert!(args.readonly);
    }
}
