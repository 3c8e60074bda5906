// linesift-core/src/reader.rs
//! Loads the input file as a list of lines.
//!
//! The reader refuses anything that is not a regular file, enforces a maximum
//! size before reading a single byte, and only accepts UTF-8 content. Each
//! failure maps to a distinct [`ReadError`] variant so the caller can report
//! it precisely.
//!
//! License: MIT OR APACHE 2.0

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;

use log::{debug, info};

use crate::errors::ReadError;

/// Default maximum input size in bytes.
pub const DEFAULT_MAX_SIZE: u64 = 1_000_000_000;

const UTF8_BOM: char = '\u{feff}';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFileReader {
    max_size: u64,
}

impl Default for TextFileReader {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_SIZE)
    }
}

fn map_io_error(path: &Path, err: io::Error) -> ReadError {
    match err.kind() {
        ErrorKind::NotFound => ReadError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => ReadError::PermissionDenied(path.to_path_buf()),
        _ => ReadError::Io {
            path: path.to_path_buf(),
            source: err,
        },
    }
}

impl TextFileReader {
    pub fn new(max_size: u64) -> Self {
        Self { max_size }
    }

    pub fn max_size(&self) -> u64 {
        self.max_size
    }

    /// Reads `path` and returns its lines without their terminators.
    ///
    /// Symbolic links are rejected rather than followed.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Vec<String>, ReadError> {
        let path = path.as_ref();
        info!("Reading input from: {}", path.display());

        let metadata = fs::symlink_metadata(path).map_err(|e| map_io_error(path, e))?;
        if !metadata.file_type().is_file() {
            return Err(ReadError::NotRegularFile(path.to_path_buf()));
        }

        let size = metadata.len();
        if size > self.max_size {
            return Err(ReadError::TooLarge {
                path: path.to_path_buf(),
                size,
                max: self.max_size,
            });
        }

        let bytes = fs::read(path).map_err(|e| map_io_error(path, e))?;
        let text = String::from_utf8(bytes).map_err(|e| ReadError::Decode {
            path: path.to_path_buf(),
            source: e.utf8_error(),
        })?;

        let lines = split_lines(&text);
        debug!("Read {} bytes and {} lines from {}.", size, lines.len(), path.display());
        Ok(lines)
    }
}

/// Splits decoded text into lines, dropping a leading byte order mark and all
/// trailing whitespace of each line (including `\r` terminators).
pub fn split_lines(text: &str) -> Vec<String> {
    text.strip_prefix(UTF8_BOM)
        .unwrap_or(text)
        .lines()
        .map(|line| line.trim_end().to_string())
        .collect()
}
