//! Path pattern matching for robots.txt rules.
//!
//! Patterns use the small wildcard grammar of the robots exclusion standard:
//!
//! - `*` matches any sequence of characters, including none
//! - a trailing `$` anchors the pattern to the end of the path
//! - a trailing `/` lets the pattern match anywhere in the path
//! - all other patterns match as a prefix of the path
//! - every other character (including `.` and an interior `$`) is literal
//!
//! Matching is case-sensitive. The matcher scans wildcard-separated
//! segments left to right, so it runs in linear time and needs no
//! evaluation budget.

use std::fmt::{self, Display};

/// How a compiled pattern is anchored against the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// The path must start with the pattern.
    Prefix,
    /// The pattern may occur anywhere in the path (pattern ends with `/`).
    Contains,
    /// The pattern must run up to the end of the path (pattern ends with `$`).
    Suffix,
}

/// A compiled robots.txt path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    /// The original pattern string.
    original: String,
    /// Literal pieces between `*` wildcards, anchor removed.
    segments: Vec<String>,
    mode: MatchMode,
}

impl PathPattern {
    /// Compiles a robots.txt path pattern.
    pub fn new(pattern: &str) -> Self {
        let (body, mode) = match pattern.strip_suffix('$') {
            Some(body) => (body, MatchMode::Suffix),
            None if pattern.ends_with('/') => (pattern, MatchMode::Contains),
            None => (pattern, MatchMode::Prefix),
        };

        Self {
            original: pattern.to_string(),
            segments: body.split('*').map(str::to_string).collect(),
            mode,
        }
    }

    /// Returns the original pattern string.
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Returns how this pattern is anchored.
    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    /// Returns the specificity of this pattern.
    ///
    /// This is the length in characters of the pattern text, not counting
    /// a trailing `$` anchor. Longer patterns are more specific.
    pub fn specificity(&self) -> usize {
        let length = self.original.chars().count();
        match self.mode {
            MatchMode::Suffix => length - 1,
            MatchMode::Prefix | MatchMode::Contains => length,
        }
    }

    /// Checks if this pattern matches the given path (with optional query).
    pub fn matches(&self, path: &str) -> bool {
        match self.mode {
            MatchMode::Prefix => match self.segments.split_first() {
                Some((first, rest)) => {
                    path.starts_with(first.as_str()) && find_in_order(&path[first.len()..], rest)
                }
                None => true,
            },
            MatchMode::Contains => find_in_order(path, &self.segments),
            MatchMode::Suffix => match self.segments.split_last() {
                Some((last, rest)) => {
                    if !path.ends_with(last.as_str()) {
                        return false;
                    }
                    find_in_order(&path[..path.len() - last.len()], rest)
                }
                None => true,
            },
        }
    }
}

impl Display for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

/// Returns true if every segment occurs in `text`, in order, without overlap.
///
/// Taking the earliest occurrence of each segment leaves the most room for
/// the ones after it, so a single left-to-right scan is enough.
fn find_in_order(text: &str, segments: &[String]) -> bool {
    let mut remaining = text;
    for segment in segments {
        if segment.is_empty() {
            continue;
        }
        match remaining.find(segment.as_str()) {
            Some(index) => remaining = &remaining[index + segment.len()..],
            None => return false,
        }
    }
    true
}
