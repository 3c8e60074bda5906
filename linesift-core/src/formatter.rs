// linesift-core/src/formatter.rs
//! Formats cleaned lines for output.
//!
//! A line is split into tokens on the input delimiter, the tokens are joined
//! back with the output delimiter, and the result is wrapped in the left and
//! right borders: with the defaults, `"this is another"` becomes
//! `"[this is another]"`.
//!
//! License: MIT OR APACHE 2.0

use crate::charset::parse_char;
use crate::errors::SiftError;

pub const DEFAULT_LEFT_BORDER: char = '[';
pub const DEFAULT_RIGHT_BORDER: char = ']';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Formatter {
    input_delimiter: char,
    output_delimiter: char,
    left_border: char,
    right_border: char,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(' ', ' ', DEFAULT_LEFT_BORDER, DEFAULT_RIGHT_BORDER)
    }
}

pub(crate) fn format_char(field: &'static str, value: &str) -> Result<char, SiftError> {
    parse_char(value).ok_or_else(|| SiftError::InvalidFormatConfig {
        field,
        value: value.to_string(),
    })
}

impl Formatter {
    pub fn new(
        input_delimiter: char,
        output_delimiter: char,
        left_border: char,
        right_border: char,
    ) -> Self {
        Self {
            input_delimiter,
            output_delimiter,
            left_border,
            right_border,
        }
    }

    /// Builds a formatter from textual settings.
    ///
    /// Each setting must be exactly one character; the first one that is not
    /// fails with [`SiftError::InvalidFormatConfig`] naming the setting.
    pub fn from_strs(
        input_delimiter: &str,
        output_delimiter: &str,
        left_border: &str,
        right_border: &str,
    ) -> Result<Self, SiftError> {
        Ok(Self::new(
            format_char("input delimiter", input_delimiter)?,
            format_char("output delimiter", output_delimiter)?,
            format_char("left border", left_border)?,
            format_char("right border", right_border)?,
        ))
    }

    pub fn input_delimiter(&self) -> char {
        self.input_delimiter
    }

    pub fn output_delimiter(&self) -> char {
        self.output_delimiter
    }

    pub fn left_border(&self) -> char {
        self.left_border
    }

    pub fn right_border(&self) -> char {
        self.right_border
    }

    /// Re-joins the tokens of `line` with the output delimiter and wraps the
    /// result in the borders.
    pub fn format_line(&self, line: &str) -> String {
        let mut formatted = String::with_capacity(
            line.len() + self.left_border.len_utf8() + self.right_border.len_utf8(),
        );
        formatted.push(self.left_border);
        for (index, token) in line.split(self.input_delimiter).enumerate() {
            if index > 0 {
                formatted.push(self.output_delimiter);
            }
            formatted.push_str(token);
        }
        formatted.push(self.right_border);
        formatted
    }

    /// Formats every line and joins them with newlines.
    pub fn format_lines<S: AsRef<str>>(&self, lines: &[S]) -> String {
        lines
            .iter()
            .map(|line| self.format_line(line.as_ref()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
