//! Error types for robots.txt and robots tag parsing.
//!
//! Parsing never aborts on malformed input. Each problem is recorded as a
//! [`ParseError`] tied to the line it came from and handed back to the
//! caller next to the structure that was built.

use super::line::Line;
use serde::Serialize;
use std::fmt::{self, Debug, Display};
use thiserror::Error;

/// The kinds of problems detected in a robots.txt file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SiteErrorKind {
    /// A field line lacks a value where one is required.
    #[error("missing value")]
    MissingValue,
    /// An allow/disallow value is non-empty and does not start with '/'.
    #[error("path must start with '/'")]
    InvalidPathFormat,
    /// A rule-bearing field appears before any user-agent was declared.
    #[error("rule found before any user-agent")]
    RuleFoundBeforeUserAgent,
}

/// The kinds of problems detected in robots tag entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagErrorKind {
    /// An empty token where a directive was expected.
    #[error("missing value")]
    MissingValue,
}

/// A diagnostic produced while loading, with the line it came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ParseError<K> {
    /// The offending line.
    pub line: Line,
    /// What went wrong.
    pub code: K,
}

/// A diagnostic produced while loading a robots.txt file.
pub type SiteError = ParseError<SiteErrorKind>;

/// A diagnostic produced while loading robots tag entries.
pub type TagError = ParseError<TagErrorKind>;

impl<K> ParseError<K> {
    /// Creates a new diagnostic for the given line.
    pub fn new(line: Line, code: K) -> Self {
        Self { line, code }
    }

    /// Returns the line number where this diagnostic occurred.
    pub fn line_number(&self) -> usize {
        self.line.number
    }
}

impl<K: Display> Display for ParseError<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}: {}", self.line.number, self.code)
    }
}

impl<K: Debug + Display> std::error::Error for ParseError<K> {}

/// An error that stops a load before any state is replaced.
///
/// Only raised when the input source itself fails; malformed content is
/// reported through [`ParseError`] instead.
#[derive(Debug, Error)]
pub enum LoadError {
    /// Reading from the underlying source failed.
    #[error("failed to read line {line}: {source}")]
    Io {
        /// The physical line (1-based) that could not be read.
        line: usize,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
