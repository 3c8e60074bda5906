// linesift/src/ui/output_format.rs
//! Writes the sifted lines and the user-facing error messages.
//!
//! Error messages go to the same stream as the results (stdout) and are
//! colored only when that stream is a terminal.

use owo_colors::OwoColorize;
use std::io::{self, Write};

/// Writes each formatted line followed by a newline.
pub fn print_lines<W: Write>(writer: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()
}

/// Writes `Error: <first line>` followed by any hint lines.
pub fn print_error_message<W: Write>(
    writer: &mut W,
    message: &str,
    hints: &[String],
    supports_color: bool,
) -> io::Result<()> {
    let headline = format!("Error: {}", message);
    if supports_color {
        writeln!(writer, "{}", headline.red().bold())?;
        for hint in hints {
            writeln!(writer, "{}", hint.yellow())?;
        }
    } else {
        writeln!(writer, "{}", headline)?;
        for hint in hints {
            writeln!(writer, "{}", hint)?;
        }
    }
    writer.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_error_message() {
        let mut out = Vec::new();
        let hints = vec!["Try again".to_string()];
        print_error_message(&mut out, "input.txt doesn't exist", &hints, false).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Error: input.txt doesn't exist\nTry again\n"
        );
    }

    #[test]
    fn colored_error_message_keeps_the_text() {
        let mut out = Vec::new();
        print_error_message(&mut out, "boom", &[], true).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Error: boom"));
        assert!(text.contains('\u{1b}'));
    }

    #[test]
    fn lines_are_newline_terminated() {
        let mut out = Vec::new();
        print_lines(&mut out, &["[a b]".to_string(), "[]".to_string()]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[a b]\n[]\n");
    }
}
