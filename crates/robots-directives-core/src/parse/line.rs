//! Line tracking for diagnostic location information.
//!
//! Provides the `Line` value attached to every diagnostic, and the
//! numbering rule shared by the robots.txt and robots tag loaders.

use serde::Serialize;
use std::fmt::{self, Display};

/// A single input line as seen by a loader.
///
/// Line numbers are 1-based and counted from the first non-blank input
/// line. Blank lines after that point still advance the count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Line {
    /// Line number (1-based).
    pub number: usize,
    /// The raw text of the line, without its line ending.
    pub text: String,
}

impl Line {
    /// Creates a new line with the given number and text.
    pub fn new(number: usize, text: impl Into<String>) -> Self {
        Self {
            number,
            text: text.into(),
        }
    }
}

impl Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.number, self.text)
    }
}

/// Assigns line numbers while iterating through input.
///
/// Leading blank lines are skipped and not counted.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineCounter {
    current: usize,
}

impl LineCounter {
    /// Creates a new counter positioned before the first line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances past `text` and returns its line number.
    ///
    /// Returns `None` for a blank line seen before any non-blank line.
    pub fn advance(&mut self, text: &str) -> Option<usize> {
        if self.current == 0 && text.trim().is_empty() {
            return None;
        }
        self.current += 1;
        Some(self.current)
    }

    /// Returns the number of lines counted so far.
    pub fn count(&self) -> usize {
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_display() {
        let line = Line::new(3, "Disallow: /admin");
        assert_eq!(line.to_string(), "3: Disallow: /admin");
    }

    #[test]
    fn counter_skips_leading_blank_lines() {
        let mut counter = LineCounter::new();
        assert_eq!(counter.advance(""), None);
        assert_eq!(counter.advance("   "), None);
        assert_eq!(counter.advance("User-agent: *"), Some(1));
        assert_eq!(counter.advance(""), Some(2));
        assert_eq!(counter.advance("Disallow: /"), Some(3));
        assert_eq!(counter.count(), 3);
    }

    #[test]
    fn counter_counts_comment_lines() {
        let mut counter = LineCounter::new();
        assert_eq!(counter.advance("# header"), Some(1));
        assert_eq!(counter.advance("User-agent: *"), Some(2));
    }
}
