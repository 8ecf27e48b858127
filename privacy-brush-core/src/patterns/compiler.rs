//! compiler.rs - Turns user-supplied pattern strings into `Pattern`s.
//!
//! Two encodings are accepted:
//!
//! * `/body/flags`: a slash-delimited expression whose trailing slash is
//!   followed only by flag letters.
//! * anything else: the whole (trimmed) string is the expression body.
//!
//! Every compiled pattern replaces all occurrences. A `g` flag is accepted but
//! changes nothing.
//!
//! License: MIT OR APACHE 2.0

use log::debug;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};

use super::Pattern;
use crate::errors::BrushError;

/// Maximum allowed length, in bytes, of a custom pattern source string.
pub const MAX_PATTERN_LENGTH: usize = 1024;

const REGEX_SIZE_LIMIT: usize = 10 * (1 << 20);

static DELIMITED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^/(.*)/([A-Za-z]*)$").expect("delimited pattern regex is valid"));

/// A custom pattern as supplied by a caller.
#[derive(Debug, Clone)]
pub enum PatternSource {
    /// `/body/flags` or a bare expression body.
    Text(String),
    /// A matcher compiled by the caller. Used as is.
    Compiled(Regex),
}

impl From<&str> for PatternSource {
    fn from(value: &str) -> Self {
        PatternSource::Text(value.to_string())
    }
}

impl From<String> for PatternSource {
    fn from(value: String) -> Self {
        PatternSource::Text(value)
    }
}

impl From<Regex> for PatternSource {
    fn from(value: Regex) -> Self {
        PatternSource::Compiled(value)
    }
}

/// Resolved matching options for one delimited expression.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Flags {
    case_insensitive: bool,
    multi_line: bool,
    dot_matches_new_line: bool,
    ignore_whitespace: bool,
    swap_greed: bool,
}

impl Flags {
    fn parse(name: &str, letters: &str) -> Result<Self, BrushError> {
        let mut flags = Flags::default();
        for flag in letters.chars() {
            match flag {
                'g' | 'u' => {}
                'i' => flags.case_insensitive = true,
                'm' => flags.multi_line = true,
                's' => flags.dot_matches_new_line = true,
                'x' => flags.ignore_whitespace = true,
                'U' => flags.swap_greed = true,
                other => {
                    return Err(BrushError::UnsupportedFlag {
                        name: name.to_string(),
                        flag: other,
                    })
                }
            }
        }
        Ok(flags)
    }
}

/// Splits a source string into its body and flag letters.
///
/// Returns `(body, flags)`; a source that is not slash-delimited yields the
/// trimmed source and no flags.
pub fn split_source(source: &str) -> (&str, &str) {
    let trimmed = source.trim();
    match DELIMITED.captures(trimmed) {
        Some(caps) => match (caps.get(1), caps.get(2)) {
            (Some(body), Some(flags)) => (body.as_str(), flags.as_str()),
            _ => (trimmed, ""),
        },
        None => (trimmed, ""),
    }
}

/// Compiles one textual source into a matcher.
pub fn compile_source(name: &str, source: &str) -> Result<Regex, BrushError> {
    if source.len() > MAX_PATTERN_LENGTH {
        return Err(BrushError::PatternLengthExceeded(
            name.to_string(),
            source.len(),
            MAX_PATTERN_LENGTH,
        ));
    }

    let (body, letters) = split_source(source);
    let flags = Flags::parse(name, letters)?;
    debug!(
        "Compiling custom pattern '{}' with body {:?} and flags {:?}",
        name, body, letters
    );

    RegexBuilder::new(body)
        .case_insensitive(flags.case_insensitive)
        .multi_line(flags.multi_line)
        .dot_matches_new_line(flags.dot_matches_new_line)
        .ignore_whitespace(flags.ignore_whitespace)
        .swap_greed(flags.swap_greed)
        .size_limit(REGEX_SIZE_LIMIT)
        .build()
        .map_err(|source| BrushError::PatternCompileError {
            name: name.to_string(),
            source_text: body.to_string(),
            source,
        })
}

/// Compiles custom patterns, naming them `custom_<n>` starting at `first_index`.
///
/// The first failing source aborts the whole compilation.
pub fn compile_custom_patterns<I>(sources: I, first_index: usize) -> Result<Vec<Pattern>, BrushError>
where
    I: IntoIterator<Item = PatternSource>,
{
    let mut compiled = Vec::new();
    for (offset, source) in sources.into_iter().enumerate() {
        let name = format!("custom_{}", first_index + offset);
        let regex = match source {
            PatternSource::Text(text) => compile_source(&name, &text)?,
            PatternSource::Compiled(regex) => regex,
        };
        debug!(
            target: "privacy_brush_core::compiler",
            "Pattern '{}' compiled successfully.",
            &name
        );
        compiled.push(Pattern::custom(name, regex));
    }
    Ok(compiled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_delimited_source() {
        assert_eq!(split_source("/sk-[a-z0-9]{20,}/i"), ("sk-[a-z0-9]{20,}", "i"));
        assert_eq!(split_source("  /\\d+/  "), ("\\d+", ""));
        assert_eq!(split_source("/a/b/gi"), ("a/b", "gi"));
    }

    #[test]
    fn bare_source_is_a_literal_body() {
        assert_eq!(split_source("sk-[a-z]+"), ("sk-[a-z]+", ""));
        assert_eq!(split_source("/only-leading"), ("/only-leading", ""));
        // Digits after the last slash are not flags.
        assert_eq!(split_source("/a/1"), ("/a/1", ""));
    }

    #[test]
    fn case_insensitive_flag_is_honoured() {
        let re = compile_source("custom_1", "/secret/i").unwrap();
        assert_eq!(re.find_iter("SECRET secret SeCrEt").count(), 3);
    }

    #[test]
    fn global_flag_is_implied() {
        let with_g = compile_source("custom_1", "/foo/g").unwrap();
        let without = compile_source("custom_2", "/foo/").unwrap();
        assert_eq!(with_g.find_iter("foo foo").count(), 2);
        assert_eq!(without.find_iter("foo foo").count(), 2);
    }

    #[test]
    fn invalid_body_is_a_compile_error() {
        let err = compile_source("custom_3", "/(unclosed/").unwrap_err();
        match err {
            BrushError::PatternCompileError { name, source_text, .. } => {
                assert_eq!(name, "custom_3");
                assert_eq!(source_text, "(unclosed");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unknown_flag_is_rejected() {
        let err = compile_source("custom_1", "/foo/y").unwrap_err();
        assert!(matches!(err, BrushError::UnsupportedFlag { flag: 'y', .. }));
    }

    #[test]
    fn overlong_source_is_rejected() {
        let source = "a".repeat(MAX_PATTERN_LENGTH + 1);
        let err = compile_source("custom_1", &source).unwrap_err();
        assert!(matches!(err, BrushError::PatternLengthExceeded(_, _, MAX_PATTERN_LENGTH)));
    }

    #[test]
    fn names_continue_from_first_index() {
        let patterns = compile_custom_patterns(
            vec![PatternSource::from("a"), PatternSource::from(Regex::new("b").unwrap())],
            3,
        )
        .unwrap();
        let names: Vec<&str> = patterns.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["custom_3", "custom_4"]);
    }
}
