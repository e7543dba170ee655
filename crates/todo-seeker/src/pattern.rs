//! Lazily-compiled regular expression patterns.
//!
//! A [`Pattern`] keeps the raw source string handed to it by the caller and
//! compiles it on first use. Construction cannot fail; compile errors are
//! reported by the first [`Pattern::is_match`] call and cached, so every later
//! evaluation reports the same error without recompiling.

use std::sync::OnceLock;

use regex::{Regex, RegexBuilder};

use crate::error::{Result, SeekerError};

/// An unanchored regular expression in the `regex` crate dialect.
///
/// # Example
///
/// ```
/// use todo_seeker::Pattern;
///
/// let pattern = Pattern::new("[S]").case_insensitive(true);
/// assert!(pattern.is_match("groceries").unwrap());
/// assert!(!pattern.is_match("pokemon").unwrap());
///
/// let broken = Pattern::new("[S");
/// assert!(broken.is_match("salad").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Pattern {
    source: String,
    case_insensitive: bool,
    compiled: OnceLock<std::result::Result<Regex, regex::Error>>,
}

impl Pattern {
    /// Creates a case-sensitive pattern from its source text.
    pub fn new(source: impl Into<String>) -> Self {
        Pattern {
            source: source.into(),
            case_insensitive: false,
            compiled: OnceLock::new(),
        }
    }

    /// Sets whether matching ignores case.
    pub fn case_insensitive(mut self, yes: bool) -> Self {
        self.case_insensitive = yes;
        self.compiled = OnceLock::new();
        self
    }

    /// Returns the raw pattern source.
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Returns `true` if matching ignores case.
    pub fn is_case_insensitive(&self) -> bool {
        self.case_insensitive
    }

    /// Returns `true` once the pattern has been compiled (successfully or not).
    pub fn is_compiled(&self) -> bool {
        self.compiled.get().is_some()
    }

    /// Returns the compiled regex, compiling it on first call.
    pub fn regex(&self) -> Result<&Regex> {
        self.compiled
            .get_or_init(|| {
                RegexBuilder::new(&self.source)
                    .case_insensitive(self.case_insensitive)
                    .build()
            })
            .as_ref()
            .map_err(|err| SeekerError::InvalidPattern {
                pattern: self.source.clone(),
                source: err.clone(),
            })
    }

    /// Tests whether the pattern occurs anywhere in `haystack`.
    pub fn is_match(&self, haystack: &str) -> Result<bool> {
        Ok(self.regex()?.is_match(haystack))
    }
}

// Equality is by source and options; compile state is irrelevant.
impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.case_insensitive == other.case_insensitive
    }
}

impl Eq for Pattern {}

impl From<&str> for Pattern {
    fn from(s: &str) -> Self {
        Pattern::new(s)
    }
}

impl From<String> for Pattern {
    fn from(s: String) -> Self {
        Pattern::new(s)
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.case_insensitive {
            write!(f, "/{}/i", self.source)
        } else {
            write!(f, "/{}/", self.source)
        }
    }
}
