// linesift-core/src/config.rs
//! Configuration management for `linesift-core`.
//!
//! This module defines [`SiftConfig`], the validated settings shared by the
//! cleaner, the formatter and the reader. A configuration can be loaded from
//! a YAML file, in which every field is optional:
//!
//! ```yaml
//! characters: [["A", "Z"], ["a", "z"], "é"]
//! delimiter: " "
//! output_delimiter: "_"
//! left_border: "<"
//! right_border: ">"
//! max_size: 1000000
//! ```
//!
//! Command-line values are layered on top with [`SiftConfig::with_overrides`].
//!
//! License: MIT OR Apache-2.0

use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use serde::Deserialize;

use crate::charset::{parse_char, parse_char_specs, CharSpec};
use crate::cleaner::{Cleaner, DEFAULT_DELIMITER};
use crate::errors::SiftError;
use crate::formatter::{format_char, Formatter, DEFAULT_LEFT_BORDER, DEFAULT_RIGHT_BORDER};
use crate::reader::{TextFileReader, DEFAULT_MAX_SIZE};

/// The configuration file as written by the user, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawSiftConfig {
    characters: Option<serde_yml::Value>,
    delimiter: Option<String>,
    output_delimiter: Option<String>,
    left_border: Option<String>,
    right_border: Option<String>,
    max_size: Option<u64>,
}

/// Values supplied on the command line, each replacing its configuration
/// counterpart when present.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub delimiter: Option<String>,
    pub output_delimiter: Option<String>,
    pub left_border: Option<String>,
    pub right_border: Option<String>,
    pub max_size: Option<u64>,
}

/// Validated settings for a sift run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiftConfig {
    /// Allowlist entries; `None` selects the built-in default allowlist.
    pub characters: Option<Vec<CharSpec>>,
    /// Word delimiter used by the cleaner and to split tokens for output.
    pub delimiter: char,
    /// Delimiter placed between output tokens; `None` reuses `delimiter`.
    pub output_delimiter: Option<char>,
    pub left_border: char,
    pub right_border: char,
    /// Largest accepted input file, in bytes.
    pub max_size: u64,
}

impl Default for SiftConfig {
    fn default() -> Self {
        Self {
            characters: None,
            delimiter: DEFAULT_DELIMITER,
            output_delimiter: None,
            left_border: DEFAULT_LEFT_BORDER,
            right_border: DEFAULT_RIGHT_BORDER,
            max_size: DEFAULT_MAX_SIZE,
        }
    }
}

fn delimiter_char(value: &str) -> Result<char, SiftError> {
    parse_char(value).ok_or_else(|| SiftError::InvalidDelimiter(value.to_string()))
}

impl SiftConfig {
    /// Loads and validates a configuration file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load config file {}", path.display()))
    }

    /// Parses and validates a YAML configuration document.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let raw: RawSiftConfig = if text.trim().is_empty() {
            RawSiftConfig::default()
        } else {
            serde_yml::from_str(text).context("Invalid configuration syntax")?
        };
        Ok(Self::from_raw(raw)?)
    }

    /// Validates the delimiter first, then the allowlist, then the output
    /// settings, stopping at the first error.
    fn from_raw(raw: RawSiftConfig) -> Result<Self, SiftError> {
        let defaults = Self::default();

        let delimiter = match raw.delimiter.as_deref() {
            Some(value) => delimiter_char(value)?,
            None => defaults.delimiter,
        };
        let characters = raw.characters.as_ref().map(parse_char_specs).transpose()?;
        let output_delimiter = raw
            .output_delimiter
            .as_deref()
            .map(|value| format_char("output delimiter", value))
            .transpose()?;
        let left_border = match raw.left_border.as_deref() {
            Some(value) => format_char("left border", value)?,
            None => defaults.left_border,
        };
        let right_border = match raw.right_border.as_deref() {
            Some(value) => format_char("right border", value)?,
            None => defaults.right_border,
        };

        let config = Self {
            characters,
            delimiter,
            output_delimiter,
            left_border,
            right_border,
            max_size: raw.max_size.unwrap_or(defaults.max_size),
        };
        debug!("Validated configuration: {:?}", config);
        Ok(config)
    }

    /// Applies command-line values on top of this configuration.
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self, SiftError> {
        if let Some(value) = overrides.delimiter.as_deref() {
            self.delimiter = delimiter_char(value)?;
        }
        if let Some(value) = overrides.output_delimiter.as_deref() {
            self.output_delimiter = Some(format_char("output delimiter", value)?);
        }
        if let Some(value) = overrides.left_border.as_deref() {
            self.left_border = format_char("left border", value)?;
        }
        if let Some(value) = overrides.right_border.as_deref() {
            self.right_border = format_char("right border", value)?;
        }
        if let Some(max_size) = overrides.max_size {
            debug!("Overriding max size with command-line value: {}", max_size);
            self.max_size = max_size;
        }
        Ok(self)
    }

    pub fn cleaner(&self) -> Cleaner {
        Cleaner::new(self.characters.as_deref(), self.delimiter)
    }

    /// The formatter splits on the cleaner's delimiter so cleaned tokens are
    /// re-joined correctly.
    pub fn formatter(&self) -> Formatter {
        Formatter::new(
            self.delimiter,
            self.output_delimiter.unwrap_or(self.delimiter),
            self.left_border,
            self.right_border,
        )
    }

    pub fn reader(&self) -> TextFileReader {
        TextFileReader::new(self.max_size)
    }
}
