// linesift-core/src/charset.rs
//! Character ranges and allowlists.
//!
//! This module provides the building blocks used by the cleaner to decide which
//! characters survive sanitization:
//!
//! * [`CharacterRange`] expands a pair of characters into every Unicode scalar
//!   value between them, regardless of the order the endpoints are given in.
//! * [`CharSpec`] is a single allowlist entry, either one character or a range.
//! * [`CharacterSet`] is the resulting allowlist, built once from a list of
//!   entries and only ever grown afterwards.
//!
//! Allowlists written in YAML are validated by [`parse_char_specs`], which
//! reports the first malformed entry and never returns a partial list.
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;

use log::debug;
use serde_yml::Value;

use crate::errors::SiftError;

/// The allowlist used when the caller does not supply one: ASCII letters and
/// the accented letters of the Latin-1 Supplement and Latin Extended blocks.
pub const DEFAULT_CHARACTERS: &[CharSpec] = &[
    CharSpec::Range('A', 'Z'),
    CharSpec::Range('a', 'z'),
    CharSpec::Range('À', 'Ö'),
    CharSpec::Range('Ø', 'ʯ'),
    CharSpec::Single('ù'),
    CharSpec::Single('ú'),
    CharSpec::Single('û'),
];

/// Returns the only character of `s`, or `None` if `s` is empty or holds
/// more than one Unicode scalar value.
pub fn parse_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// An inclusive range of Unicode scalar values.
///
/// The endpoints are stored in ascending order, so `('z', 'w')` and
/// `('w', 'z')` describe the same range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CharacterRange {
    start: char,
    end: char,
}

impl CharacterRange {
    pub fn new(a: char, b: char) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    /// Builds a range from its textual endpoints.
    ///
    /// Fails with [`SiftError::InvalidRange`] unless both endpoints are
    /// exactly one character.
    pub fn from_strs(a: &str, b: &str) -> Result<Self, SiftError> {
        match (parse_char(a), parse_char(b)) {
            (Some(a), Some(b)) => Ok(Self::new(a, b)),
            _ => Err(SiftError::InvalidRange(format!(
                "({:?}, {:?}) should be a pair of two characters, e.g. (\"A\", \"Z\") or (\"z\", \"a\")",
                a, b
            ))),
        }
    }

    pub fn start(&self) -> char {
        self.start
    }

    pub fn end(&self) -> char {
        self.end
    }

    /// Iterates the range in ascending code point order.
    ///
    /// Surrogate code points are not scalar values and are skipped.
    pub fn chars(&self) -> impl Iterator<Item = char> {
        self.start..=self.end
    }

    /// Returns every character of the range in ascending code point order.
    pub fn characters(&self) -> Vec<char> {
        self.chars().collect()
    }

    pub fn contains(&self, c: char) -> bool {
        (self.start..=self.end).contains(&c)
    }
}

/// A single allowlist entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharSpec {
    /// One allowed character.
    Single(char),
    /// Every character between the two endpoints, inclusive, in either order.
    Range(char, char),
}

impl CharSpec {
    /// Parses a singleton entry, failing with [`SiftError::InvalidCharacter`].
    pub fn single(s: &str) -> Result<Self, SiftError> {
        parse_char(s)
            .map(CharSpec::Single)
            .ok_or_else(|| SiftError::InvalidCharacter(s.to_string()))
    }

    /// Parses a range entry, failing with [`SiftError::InvalidRange`].
    pub fn range(a: &str, b: &str) -> Result<Self, SiftError> {
        let range = CharacterRange::from_strs(a, b)?;
        Ok(CharSpec::Range(range.start(), range.end()))
    }

    /// Returns the characters this entry allows, in ascending order.
    pub fn characters(&self) -> Vec<char> {
        match *self {
            CharSpec::Single(c) => vec![c],
            CharSpec::Range(a, b) => CharacterRange::new(a, b).characters(),
        }
    }
}

impl From<char> for CharSpec {
    fn from(c: char) -> Self {
        CharSpec::Single(c)
    }
}

impl From<(char, char)> for CharSpec {
    fn from((a, b): (char, char)) -> Self {
        CharSpec::Range(a, b)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

fn parse_range_entry(index: usize, pair: &[Value]) -> Result<CharSpec, SiftError> {
    match pair {
        [Value::String(a), Value::String(b)] => CharSpec::range(a, b),
        _ => Err(SiftError::InvalidRange(format!(
            "entry #{} should be a pair of two characters, found a list of {} item(s)",
            index,
            pair.len()
        ))),
    }
}

/// Validates a YAML allowlist into a list of [`CharSpec`] entries.
///
/// The value must be a list whose items are either one-character strings or
/// two-item lists of one-character strings, e.g.
/// `[["A", "Z"], "é", "à", ["z", "b"]]`. Validation stops at the first bad
/// entry.
pub fn parse_char_specs(value: &Value) -> Result<Vec<CharSpec>, SiftError> {
    let Value::Sequence(entries) = value else {
        return Err(SiftError::InvalidAllowlistSpec(format!(
            "expected a list of characters or character ranges, found {}",
            value_kind(value)
        )));
    };

    let mut specs = Vec::with_capacity(entries.len());
    for (index, entry) in entries.iter().enumerate() {
        let spec = match entry {
            Value::Sequence(pair) => parse_range_entry(index, pair)?,
            Value::String(s) => parse_char(s).map(CharSpec::Single).ok_or_else(|| {
                SiftError::InvalidAllowlistSpec(format!(
                    "entry #{} ({:?}) is not a character or a character range",
                    index, s
                ))
            })?,
            other => {
                return Err(SiftError::InvalidAllowlistSpec(format!(
                    "entry #{} is {}, not a character or a character range",
                    index,
                    value_kind(other)
                )))
            }
        };
        specs.push(spec);
    }
    Ok(specs)
}

/// A set of allowed characters.
///
/// Built once from a list of [`CharSpec`] entries; characters can be added
/// afterwards but never removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterSet {
    characters: HashSet<char>,
}

impl CharacterSet {
    pub fn new(specs: &[CharSpec]) -> Self {
        let mut characters = HashSet::new();
        for spec in specs {
            characters.extend(spec.characters());
        }
        debug!(
            "Built character set with {} characters from {} entries.",
            characters.len(),
            specs.len()
        );
        Self { characters }
    }

    pub fn contains(&self, c: char) -> bool {
        self.characters.contains(&c)
    }

    /// Adds a character, returning `true` if it was not already present.
    pub fn insert(&mut self, c: char) -> bool {
        self.characters.insert(c)
    }

    /// Adds a character given as text.
    ///
    /// Fails with [`SiftError::InvalidCharacter`] unless `s` is exactly one
    /// character.
    pub fn insert_str(&mut self, s: &str) -> Result<bool, SiftError> {
        let c = parse_char(s).ok_or_else(|| SiftError::InvalidCharacter(s.to_string()))?;
        Ok(self.insert(c))
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &char> {
        self.characters.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_char_accepts_exactly_one_scalar() {
        assert_eq!(parse_char("a"), Some('a'));
        assert_eq!(parse_char("é"), Some('é'));
        assert_eq!(parse_char(""), None);
        assert_eq!(parse_char("aa"), None);
        // 'e' followed by a combining acute accent is one grapheme, two scalars.
        assert_eq!(parse_char("e\u{301}"), None);
    }

    #[test]
    fn range_characters_are_ascending_and_inclusive() {
        assert_eq!(CharacterRange::new('A', 'C').characters(), vec!['A', 'B', 'C']);
        assert_eq!(CharacterRange::new('z', 'w').characters(), vec!['w', 'x', 'y', 'z']);
        assert_eq!(CharacterRange::new('a', 'a').characters(), vec!['a']);
    }

    #[test]
    fn range_contains_its_endpoints() {
        let range = CharacterRange::new('z', 'b');
        assert!(range.contains('b'));
        assert!(range.contains('m'));
        assert!(range.contains('z'));
        assert!(!range.contains('a'));
        assert!(!range.contains('{'));
    }

    #[test]
    fn single_spec_parses_one_character() {
        assert_eq!(CharSpec::single("é"), Ok(CharSpec::Single('é')));
        assert_eq!(
            CharSpec::single("ab"),
            Err(SiftError::InvalidCharacter("ab".to_string()))
        );
        assert_eq!(
            CharSpec::single(""),
            Err(SiftError::InvalidCharacter(String::new()))
        );
    }

    #[test]
    fn spec_characters_expand_entries() {
        assert_eq!(CharSpec::Single('x').characters(), vec!['x']);
        assert_eq!(CharSpec::Range('c', 'a').characters(), vec!['a', 'b', 'c']);
        assert_eq!(CharSpec::from(('0', '2')).characters(), vec!['0', '1', '2']);
    }

    #[test]
    fn range_is_order_independent() {
        let pairs = [('A', 'Z'), ('é', 'ç'), ('0', '~'), ('ʯ', 'Ø')];
        for (a, b) in pairs {
            let forward = CharacterRange::new(a, b).characters();
            let backward = CharacterRange::new(b, a).characters();
            assert_eq!(forward, backward);
            assert_eq!(forward.len() as u32, (a as u32).abs_diff(b as u32) + 1);
        }
    }

    #[test]
    fn range_skips_surrogates() {
        let range = CharacterRange::new('\u{D7FF}', '\u{E000}');
        assert_eq!(range.characters(), vec!['\u{D7FF}', '\u{E000}']);
    }

    #[test]
    fn range_from_strs_rejects_non_characters() {
        for (a, b) in [("aa", "b"), ("", "b"), ("a", ""), ("a", "bc")] {
            assert!(matches!(
                CharacterRange::from_strs(a, b),
                Err(SiftError::InvalidRange(_))
            ));
        }
        assert_eq!(
            CharacterRange::from_strs("z", "a").unwrap(),
            CharacterRange::new('a', 'z')
        );
    }

    #[test]
    fn set_membership_covers_every_entry() {
        let specs = [
            CharSpec::Single('A'),
            CharSpec::Range('B', 'E'),
            CharSpec::Single('g'),
            CharSpec::Range('z', 'v'),
        ];
        let set = CharacterSet::new(&specs);
        for c in ['A', 'B', 'C', 'D', 'E', 'g', 'v', 'w', 'x', 'y', 'z'] {
            assert!(set.contains(c), "{c} should be allowed");
        }
        for c in ['F', 'a', 'f', 'h', 'u', ' ', 'é'] {
            assert!(!set.contains(c), "{c} should not be allowed");
        }
        assert_eq!(set.len(), 11);
    }

    #[test]
    fn iter_yields_each_character_once() {
        let set = CharacterSet::new(&[CharSpec::Range('a', 'c'), CharSpec::Single('b')]);
        let mut chars: Vec<char> = set.iter().copied().collect();
        chars.sort_unstable();
        assert_eq!(chars, vec!['a', 'b', 'c']);
    }

    #[test]
    fn overlapping_entries_are_deduplicated() {
        let set = CharacterSet::new(&[('a', 'c').into(), 'b'.into(), ('c', 'a').into()]);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = CharacterSet::new(&[]);
        assert!(set.is_empty());
        assert!(set.insert(' '));
        assert!(!set.insert(' '));
        assert_eq!(set.insert_str("-"), Ok(true));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn insert_str_rejects_non_characters() {
        let mut set = CharacterSet::new(DEFAULT_CHARACTERS);
        let before = set.len();
        for bad in ["", "ab", "e\u{301}"] {
            assert_eq!(
                set.insert_str(bad),
                Err(SiftError::InvalidCharacter(bad.to_string()))
            );
        }
        assert_eq!(set.len(), before);
    }

    #[test]
    fn default_characters_cover_ascii_and_latin_letters() {
        let set = CharacterSet::new(DEFAULT_CHARACTERS);
        for c in ['a', 'Z', 'À', 'é', 'è', 'ç', 'ù', 'û', 'ÿ', 'ʯ'] {
            assert!(set.contains(c), "{c} should be allowed");
        }
        for c in ['0', ' ', '-', '×', 'ʰ', '\u{301}'] {
            assert!(!set.contains(c), "{c:?} should not be allowed");
        }
    }

    #[test]
    fn parse_char_specs_accepts_mixed_entries() {
        let value: Value = serde_yml::from_str(r#"[["A", "Z"], "é", "à", ["z", "b"]]"#).unwrap();
        let specs = parse_char_specs(&value).unwrap();
        assert_eq!(
            specs,
            vec![
                CharSpec::Range('A', 'Z'),
                CharSpec::Single('é'),
                CharSpec::Single('à'),
                CharSpec::Range('b', 'z'),
            ]
        );
    }

    #[test]
    fn parse_char_specs_rejects_scalars() {
        for yaml in [r#""a""#, "1", "{one: 1}", "null"] {
            let value: Value = serde_yml::from_str(yaml).unwrap();
            assert!(
                matches!(parse_char_specs(&value), Err(SiftError::InvalidAllowlistSpec(_))),
                "{yaml} should be rejected"
            );
        }
    }

    #[test]
    fn parse_char_specs_rejects_bad_entries() {
        let cases = [
            (r#"[1, ["a", "b"]]"#, "spec"),
            (r#"["ab"]"#, "spec"),
            (r#"[{a: b}]"#, "spec"),
            (r#"[[1, "b"]]"#, "range"),
            (r#"[["a"]]"#, "range"),
            (r#"[["a", "b", "c"]]"#, "range"),
            (r#"[["aa", "b"]]"#, "range"),
        ];
        for (yaml, kind) in cases {
            let value: Value = serde_yml::from_str(yaml).unwrap();
            let err = parse_char_specs(&value).unwrap_err();
            match kind {
                "spec" => assert!(
                    matches!(err, SiftError::InvalidAllowlistSpec(_)),
                    "{yaml}: {err}"
                ),
                _ => assert!(matches!(err, SiftError::InvalidRange(_)), "{yaml}: {err}"),
            }
        }
    }
}
