// linesift-core/src/cleaner.rs
//! Removes unwanted characters from lines of text.
//!
//! The [`Cleaner`] owns a [`CharacterSet`] and a delimiter. Every character
//! outside the set is replaced with the delimiter, runs of delimiters are
//! collapsed into one, and delimiters at either end are trimmed. The result is
//! a fixed point: cleaning an already cleaned line returns it unchanged.
//!
//! License: MIT OR APACHE 2.0

use log::debug;

use crate::charset::{parse_char, CharSpec, CharacterSet, DEFAULT_CHARACTERS};
use crate::errors::SiftError;

/// Default word delimiter.
pub const DEFAULT_DELIMITER: char = ' ';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaner {
    charset: CharacterSet,
    delimiter: char,
}

impl Default for Cleaner {
    fn default() -> Self {
        Self::new(None, DEFAULT_DELIMITER)
    }
}

impl Cleaner {
    /// Creates a cleaner keeping the characters described by `characters`.
    ///
    /// `None` selects [`DEFAULT_CHARACTERS`]. An empty slice is honored as is,
    /// leaving the delimiter as the only allowed character. The delimiter is
    /// always added to the set, so listing it in `characters` is harmless.
    pub fn new(characters: Option<&[CharSpec]>, delimiter: char) -> Self {
        let mut charset = CharacterSet::new(characters.unwrap_or(DEFAULT_CHARACTERS));
        charset.insert(delimiter);
        debug!(
            "Cleaner ready: {} allowed characters, delimiter {:?}.",
            charset.len(),
            delimiter
        );
        Self { charset, delimiter }
    }

    /// Creates a cleaner from a textual delimiter.
    ///
    /// Fails with [`SiftError::InvalidDelimiter`] unless `delimiter` is exactly
    /// one character.
    pub fn with_delimiter_str(
        characters: Option<&[CharSpec]>,
        delimiter: &str,
    ) -> Result<Self, SiftError> {
        let delimiter =
            parse_char(delimiter)
                .ok_or_else(|| SiftError::InvalidDelimiter(delimiter.to_string()))?;
        Ok(Self::new(characters, delimiter))
    }

    pub fn charset(&self) -> &CharacterSet {
        &self.charset
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Removes the unsupported characters and extra delimiters from `line`.
    ///
    /// Returns an empty string when nothing in `line` is allowed.
    pub fn clean_line(&self, line: &str) -> String {
        let mut cleaned = String::with_capacity(line.len());
        let mut pending_delimiter = false;

        for c in line.chars() {
            if c == self.delimiter || !self.charset.contains(c) {
                // Leading delimiters are dropped by never arming the flag.
                pending_delimiter = !cleaned.is_empty();
                continue;
            }
            if pending_delimiter {
                cleaned.push(self.delimiter);
                pending_delimiter = false;
            }
            cleaned.push(c);
        }

        cleaned
    }
}
