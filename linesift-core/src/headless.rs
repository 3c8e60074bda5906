// linesift-core/src/headless.rs
// File: linesift-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for running a sift without the command-line front end.
//! Provides helper functions for a full, one-shot sift of in-memory text or
//! of a file on disk.

use std::path::Path;

use anyhow::{Context, Result};

use crate::config::SiftConfig;
use crate::pipeline::Pipeline;
use crate::reader::split_lines;

/// Sifts `content` as if it were the content of an input file and returns the
/// formatted lines joined with newlines.
///
/// # Arguments
///
/// * `config` - The validated settings (allowlist, delimiters, borders).
/// * `content` - The text to sift; its last non-blank line is the search term.
pub fn headless_sift_string(config: &SiftConfig, content: &str) -> Result<String> {
    let lines = split_lines(content);
    let output = Pipeline::from_config(config)
        .run(&lines)
        .context("Failed to sift input")?;
    Ok(output.join("\n"))
}

/// Reads `path` with the configured size limit and sifts its lines.
pub fn headless_sift_file<P: AsRef<Path>>(config: &SiftConfig, path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let lines = config.reader().read(path)?;
    let output = Pipeline::from_config(config)
        .run(&lines)
        .with_context(|| format!("Failed to sift {}", path.display()))?;
    Ok(output)
}
