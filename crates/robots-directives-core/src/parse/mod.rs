//! Shared parsing primitives.
//!
//! This module holds the pieces used by both the robots.txt loader and the
//! robots tag loader: line numbering, diagnostics and the nom-based lexer.
//!
//! # Example
//!
//! ```rust
//! use robots_directives_core::parse::{classify_line, strip_comment, LineShape};
//!
//! let line = strip_comment("Disallow: /private # staff only");
//! assert_eq!(
//!     classify_line(line),
//!     LineShape::Field { name: "Disallow", value: "/private" }
//! );
//! ```

mod error;
mod lexer;
mod line;

// Re-export public types
pub use error::{LoadError, ParseError, SiteError, SiteErrorKind, TagError, TagErrorKind};
pub use line::{Line, LineCounter};

// Re-export lexer utilities that may be useful for custom parsing
pub use lexer::{
    LineShape, classify_line, normalize_user_agent, parse_field_value, parse_name_prefix,
    strip_comment, user_agent_name,
};
