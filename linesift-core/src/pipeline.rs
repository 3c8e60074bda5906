// linesift-core/src/pipeline.rs
//! Orchestrates a full sift over the lines of an input file.
//!
//! The last non-blank line is the search term. The lines before it are
//! filtered with a [`Matcher`], cleaned with a [`Cleaner`] and formatted with
//! a [`Formatter`], in that order and preserving the input order.
//!
//! License: MIT OR APACHE 2.0

use log::{debug, info};

use crate::cleaner::Cleaner;
use crate::config::SiftConfig;
use crate::errors::SiftError;
use crate::formatter::Formatter;
use crate::matcher::Matcher;

/// A search term and the content lines it applies to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest<'a> {
    pub matcher: Matcher,
    pub lines: Vec<&'a str>,
}

/// Returns `true` for lines holding something other than spaces.
fn has_content(line: &str) -> bool {
    line.chars().any(|c| c != ' ')
}

/// Splits raw input lines into the search term and the content lines.
///
/// Lines made only of spaces are ignored. Fails with
/// [`SiftError::EmptyContent`] when nothing is left, with
/// [`SiftError::InsufficientLines`] when only one line is left, and with
/// [`SiftError::TermNotAWord`] when the term line contains a space.
pub fn extract_search_request<S: AsRef<str>>(
    lines: &[S],
) -> Result<SearchRequest<'_>, SiftError> {
    let mut lines: Vec<&str> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| has_content(line))
        .collect();

    let term = match lines.len() {
        0 => return Err(SiftError::EmptyContent),
        1 => return Err(SiftError::InsufficientLines(1)),
        _ => lines.pop().unwrap_or_default(),
    };

    if term.contains(' ') {
        return Err(SiftError::TermNotAWord(term.to_string()));
    }

    debug!("Search term is {:?}; {} candidate lines.", term, lines.len());
    Ok(SearchRequest {
        matcher: Matcher::new(term)?,
        lines,
    })
}

/// The matcher → cleaner → formatter chain.
#[derive(Debug, Clone, Default)]
pub struct Pipeline {
    cleaner: Cleaner,
    formatter: Formatter,
}

impl Pipeline {
    pub fn new(cleaner: Cleaner, formatter: Formatter) -> Self {
        Self { cleaner, formatter }
    }

    pub fn from_config(config: &SiftConfig) -> Self {
        Self::new(config.cleaner(), config.formatter())
    }

    pub fn cleaner(&self) -> &Cleaner {
        &self.cleaner
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    /// Runs the whole sift and returns one formatted string per matched line.
    ///
    /// Either every matched line is returned or an error is; there is no
    /// partial result.
    pub fn run<S: AsRef<str>>(&self, lines: &[S]) -> Result<Vec<String>, SiftError> {
        let request = extract_search_request(lines)?;
        let output = self.process(&request.matcher, request.lines.as_slice());
        info!(
            "Matched {} of {} lines for term {:?}.",
            output.len(),
            request.lines.len(),
            request.matcher.search_term()
        );
        Ok(output)
    }

    /// Filters, cleans and formats `lines` with an explicit matcher.
    pub fn process<S: AsRef<str>>(&self, matcher: &Matcher, lines: &[S]) -> Vec<String> {
        matcher
            .filter(lines)
            .into_iter()
            .map(|line| self.formatter.format_line(&self.cleaner.clean_line(line)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MESSY_LINE: &str = r#"908^)-234 923this-++-23is./<.";][}"another-=&^5"#;

    #[test]
    fn run_cleans_and_formats_matching_lines() {
        let output = Pipeline::default().run(&[MESSY_LINE, "another"]).unwrap();
        assert_eq!(output, vec!["[this is another]"]);
    }

    #[test]
    fn run_drops_non_matching_lines_and_keeps_order() {
        let lines = [
            "the ^----;:[]}< <!!<**& lazy $$$~~~)))dog",
            "a cat",
            "",
            "   ",
            "hot-dog!! stand",
            "dog",
        ];
        let output = Pipeline::default().run(&lines).unwrap();
        assert_eq!(output, vec!["[the lazy dog]", "[hot dog stand]"]);
    }

    #[test]
    fn run_returns_nothing_when_no_line_matches() {
        let output = Pipeline::default().run(&["one", "two", "three"]).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn matched_line_may_clean_to_nothing() {
        let output = Pipeline::default().run(&["1234", "23"]).unwrap();
        assert_eq!(output, vec!["[]"]);
    }

    #[test]
    fn blank_lines_are_ignored_when_picking_the_term() {
        let request = extract_search_request(&["line with term", "term", "", "  "]).unwrap();
        assert_eq!(request.matcher.search_term(), "term");
        assert_eq!(request.lines, vec!["line with term"]);
    }

    #[test]
    fn empty_input_is_rejected() {
        let empty: [&str; 0] = [];
        assert_eq!(extract_search_request(&empty), Err(SiftError::EmptyContent));
        assert_eq!(
            extract_search_request(&["", " ", "    "]),
            Err(SiftError::EmptyContent)
        );
    }

    #[test]
    fn single_line_is_rejected() {
        assert_eq!(
            extract_search_request(&["line", "", "  "]),
            Err(SiftError::InsufficientLines(1))
        );
    }

    #[test]
    fn term_with_spaces_is_rejected() {
        assert_eq!(
            extract_search_request(&["word1 word2", "word3 word4"]),
            Err(SiftError::TermNotAWord("word3 word4".to_string()))
        );
        assert_eq!(
            extract_search_request(&["line", " term"]),
            Err(SiftError::TermNotAWord(" term".to_string()))
        );
    }

    #[test]
    fn custom_pipeline_settings_are_applied() {
        let config = SiftConfig {
            output_delimiter: Some(':'),
            left_border: '<',
            right_border: '>',
            ..SiftConfig::default()
        };
        let output = Pipeline::from_config(&config)
            .run(&["a,b,,c!", "b"])
            .unwrap();
        assert_eq!(output, vec!["<a:b:c>"]);
    }
}
