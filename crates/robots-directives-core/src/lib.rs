//! Robots Directives Core
//!
//! A library for parsing robots exclusion directives and answering crawl
//! queries against them.
//!
//! # Features
//!
//! - **Site rules**: Load robots.txt files into per-user-agent rule groups
//! - **Path matching**: `*` wildcards and `$` end anchors, longest match wins
//! - **Page tags**: Load `X-Robots-Tag` headers and robots meta tag values
//! - **Lenient loading**: Malformed lines become diagnostics, never failures
//!
//! # Quick Start
//!
//! ```rust
//! use robots_directives_core::{LoadOptions, RobotsTxt};
//!
//! let input = r#"
//! # robots.txt
//! User-agent: *
//! Disallow: /admin/
//! Allow: /admin/public$
//! "#;
//!
//! let mut robots = RobotsTxt::new();
//! let errors = robots.load(input, &LoadOptions::default());
//!
//! if errors.is_empty() {
//!     let result = robots.find_match("ExampleBot/1.0", "/admin/public");
//!     println!("{} via {:?}", result.directive, result.user_agent);
//! } else {
//!     for error in &errors {
//!         eprintln!("Load error: {}", error);
//!     }
//! }
//! ```
//!
//! # Modules
//!
//! - [`parse`]: Shared lines, diagnostics and lexer
//! - [`matching`]: Path pattern matching
//! - [`robots_txt`]: Site-wide robots.txt rules
//! - [`robots_tag`]: Page-level robots tags

pub mod matching;
pub mod parse;
pub mod robots_tag;
pub mod robots_txt;

#[cfg(feature = "generate")]
pub mod generate;

// Re-export commonly used types at the crate root
pub use parse::{Line, LoadError, ParseError, SiteError, SiteErrorKind, TagError, TagErrorKind};
pub use robots_tag::{RobotsTag, Tag, TagOptions};
pub use robots_txt::{Directive, LoadOptions, MatchResult, RobotsTxt, RuleGroup};
