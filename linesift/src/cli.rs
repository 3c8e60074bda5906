// linesift/src/cli.rs
//! This file defines the command-line interface (CLI) for the linesift
//! application.
//! License: MIT OR Apache-2.0

use clap::Parser;
use log::LevelFilter;
use std::path::PathBuf;

use linesift_core::ConfigOverrides;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "linesift",
    author = "Obscura Team (Relay)",
    version = env!("CARGO_PKG_VERSION"),
    about = "Print the cleaned lines of a file that contain its search term",
    long_about = "linesift reads a text file whose last non-blank line is a single search \
                  word. Every other line containing that word is stripped of the characters \
                  outside an allowlist (ASCII and accented Latin letters by default), its \
                  delimiters are collapsed, and it is printed between borders, e.g. \
                  `[this is another]`.",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Path of the file to read.
    #[arg(value_name = "PATH", help = "Path of the file to read.")]
    pub path: PathBuf,

    /// Maximum accepted file size in bytes (default: 1000000000).
    #[arg(
        long = "max-size",
        value_name = "BYTES",
        env = "LINESIFT_MAX_SIZE",
        help = "Maximum file size in bytes [default: 1000000000]."
    )]
    pub max_size: Option<u64>,

    /// Path to a YAML configuration file.
    #[arg(
        long = "config",
        value_name = "FILE",
        help = "Path to a YAML file setting the allowed characters, delimiters and borders."
    )]
    pub config: Option<PathBuf>,

    /// Word delimiter.
    #[arg(
        long = "delimiter",
        value_name = "CHAR",
        allow_hyphen_values = true,
        help = "Character separating words, replacing disallowed characters [default: ' ']."
    )]
    pub delimiter: Option<String>,

    /// Delimiter placed between output words.
    #[arg(
        long = "output-delimiter",
        value_name = "CHAR",
        allow_hyphen_values = true,
        help = "Character placed between output words [default: the delimiter]."
    )]
    pub output_delimiter: Option<String>,

    /// Opening border of each output line.
    #[arg(
        long = "left-border",
        value_name = "CHAR",
        allow_hyphen_values = true,
        help = "Character opening each output line [default: '[']."
    )]
    pub left_border: Option<String>,

    /// Closing border of each output line.
    #[arg(
        long = "right-border",
        value_name = "CHAR",
        allow_hyphen_values = true,
        help = "Character closing each output line [default: ']']."
    )]
    pub right_border: Option<String>,

    /// Enable debug logging (overrides RUST_LOG for the linesift crates).
    #[arg(long, short = 'd', help = "Enable debug logging.")]
    pub debug: bool,

    /// Disable all logging.
    #[arg(long, short = 'q', conflicts_with = "debug", help = "Suppress all log messages.")]
    pub quiet: bool,
}

impl Cli {
    /// The command-line values that replace configuration settings.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            delimiter: self.delimiter.clone(),
            output_delimiter: self.output_delimiter.clone(),
            left_border: self.left_border.clone(),
            right_border: self.right_border.clone(),
            max_size: self.max_size,
        }
    }

    /// `None` leaves the level to `RUST_LOG`.
    pub fn log_level(&self) -> Option<LevelFilter> {
        if self.quiet {
            Some(LevelFilter::Off)
        } else if self.debug {
            Some(LevelFilter::Debug)
        } else {
            None
        }
    }
}
