// linesift-core/src/matcher.rs
//! Searches for a single-word term in lines of text.
//!
//! License: MIT OR APACHE 2.0

use std::str::FromStr;

use crate::errors::SiftError;

/// A case-sensitive substring matcher for one search term.
///
/// The term is never empty and never contains a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matcher {
    search_term: String,
}

impl Matcher {
    /// Creates a matcher for `search_term`, stored verbatim.
    ///
    /// Fails with [`SiftError::EmptyTerm`] for an empty term and with
    /// [`SiftError::TermContainsSpace`] if the term contains a space.
    pub fn new(search_term: impl Into<String>) -> Result<Self, SiftError> {
        let search_term = search_term.into();
        if search_term.is_empty() {
            return Err(SiftError::EmptyTerm);
        }
        if search_term.contains(' ') {
            return Err(SiftError::TermContainsSpace(search_term));
        }
        Ok(Self { search_term })
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Returns `true` if the search term is a substring of `line`.
    pub fn matches(&self, line: &str) -> bool {
        line.contains(self.search_term.as_str())
    }

    /// Keeps the lines containing the search term, in their original order.
    pub fn filter<'a, S: AsRef<str>>(&self, lines: &'a [S]) -> Vec<&'a str> {
        lines
            .iter()
            .map(AsRef::as_ref)
            .filter(|line| self.matches(line))
            .collect()
    }
}

impl FromStr for Matcher {
    type Err = SiftError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Matcher::new(s)
    }
}
