// linesift-core/src/lib.rs
//! # linesift Core Library
//!
//! `linesift-core` provides the platform-independent logic of linesift: it
//! takes the lines of a small text file, uses the last one as a search term,
//! keeps the lines containing that term, strips every character outside a
//! configurable allowlist and prints what is left between borders.
//!
//! The library is pure and stateless apart from the immutable configuration
//! each component is built with.
//!
//! ## Modules
//!
//! * `charset`: Character ranges, allowlist entries and the allowlist itself.
//! * `cleaner`: Replaces disallowed characters and normalizes delimiters.
//! * `matcher`: Substring search for the single-word term.
//! * `formatter`: Re-joins tokens and wraps lines in borders.
//! * `pipeline`: Chains the above over the lines of an input.
//! * `reader`: Loads and validates the input file.
//! * `config`: YAML configuration and command-line overrides.
//! * `headless`: One-shot helpers for use outside the CLI.
//! * `errors`: Structured error types.
//!
//! ## Usage Example
//!
//! ```rust
//! use linesift_core::{headless_sift_string, SiftConfig};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let input = "908^)-234 923this-++-23is./<.\";][}\"another-=&^5\nanother\n";
//!     let output = headless_sift_string(&SiftConfig::default(), input)?;
//!     assert_eq!(output, "[this is another]");
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Component construction and pipeline validation fail with [`SiftError`];
//! file loading fails with [`ReadError`]. Configuration loading and the
//! headless helpers return `anyhow::Error` with context, from which the typed
//! errors can be recovered with `downcast_ref`.
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod charset;
pub mod cleaner;
pub mod config;
pub mod errors;
pub mod formatter;
pub mod headless;
pub mod matcher;
pub mod pipeline;
pub mod reader;

/// Re-exports the allowlist building blocks.
pub use charset::{
    parse_char, parse_char_specs, CharSpec, CharacterRange, CharacterSet, DEFAULT_CHARACTERS,
};

/// Re-exports the line transformation components.
pub use cleaner::{Cleaner, DEFAULT_DELIMITER};
pub use formatter::{Formatter, DEFAULT_LEFT_BORDER, DEFAULT_RIGHT_BORDER};
pub use matcher::Matcher;
pub use pipeline::{extract_search_request, Pipeline, SearchRequest};

/// Re-exports configuration and input handling.
pub use config::{ConfigOverrides, SiftConfig};
pub use reader::{split_lines, TextFileReader, DEFAULT_MAX_SIZE};

/// Re-exports the custom error types for clear error reporting.
pub use errors::{ReadError, SiftError};

/// Re-exports the one-shot helpers.
pub use headless::{headless_sift_file, headless_sift_string};
