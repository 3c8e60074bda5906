// linesift-core/src/errors.rs
//! errors.rs - Custom error types for the linesift-core library.
//!
//! This module defines structured error enums for the library, providing
//! specific, actionable error types that can be handled programmatically.
//! `SiftError` covers component construction and pipeline validation,
//! `ReadError` covers loading the input file.
//!
//! License: MIT OR APACHE 2.0

use std::path::PathBuf;
use thiserror::Error;

/// All construction and validation failures raised by the core components.
///
/// By using `#[non_exhaustive]`, we signal to consumers of this library that
/// new variants may be added in future versions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SiftError {
    #[error("'{0}' is not a character: expected exactly one Unicode scalar value")]
    InvalidCharacter(String),

    #[error("invalid character range: {0}")]
    InvalidRange(String),

    #[error("invalid allowlist specification: {0}")]
    InvalidAllowlistSpec(String),

    #[error("'{0}' is not a valid delimiter: expected exactly one character")]
    InvalidDelimiter(String),

    #[error("invalid {field} '{value}': expected exactly one character")]
    InvalidFormatConfig { field: &'static str, value: String },

    #[error("the search term is empty")]
    EmptyTerm,

    #[error("the search term '{0}' contains spaces")]
    TermContainsSpace(String),

    #[error("the input is empty or has only empty lines or lines with spaces")]
    EmptyContent,

    #[error("file must contain at least two lines (a line and a term)")]
    InsufficientLines(usize),

    #[error("search term should be a word (string without spaces)")]
    TermNotAWord(String),
}

/// Failures of the input file reader.
///
/// The display strings are user-facing and are printed verbatim after an
/// `Error: ` prefix by the command-line front end.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReadError {
    #[error("{} doesn't exist", .0.display())]
    NotFound(PathBuf),

    #[error("{} is a directory or a link", .0.display())]
    NotRegularFile(PathBuf),

    #[error("{} size is too big", .path.display())]
    TooLarge { path: PathBuf, size: u64, max: u64 },

    #[error("{} doesn't have adequate right access", .0.display())]
    PermissionDenied(PathBuf),

    #[error("{} exists but can't be opened", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is not encoded with UTF-8", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: std::str::Utf8Error,
    },
}
