//! Page-level robots directives.
//!
//! [`RobotsTag`] collects the directives carried by `X-Robots-Tag`
//! headers and robots meta tags, scoped per user-agent.
//!
//! # Example
//!
//! ```rust
//! use robots_directives_core::robots_tag::{RobotsTag, TagOptions};
//!
//! let mut tags = RobotsTag::new();
//! let errors = tags.load(
//!     ["noarchive", "googlebot: noindex, max-snippet: 20"],
//!     &TagOptions::standard(),
//! );
//! assert!(errors.is_empty());
//!
//! assert!(tags.has_tag("GoogleBot", Some("noindex")));
//! assert!(!tags.has_tag("googlebot", Some("noarchive")));
//! assert_eq!(tags.applicable_tags("googlebot", None).len(), 3);
//! ```

mod parser;
mod tag;

pub use parser::TagOptions;
pub use tag::Tag;

use crate::parse::{TagError, normalize_user_agent};
use parser::{TagIndex, TagParser};
use std::collections::BTreeSet;

/// The user-agent key for tags with no user-agent qualifier.
pub const CATCH_ALL: &str = "*";

/// Page-level directives keyed by user-agent and directive name.
///
/// Every load replaces the whole content of the container.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsTag {
    index: TagIndex,
}

impl RobotsTag {
    /// Creates an empty tag set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses entries with default options.
    pub fn parse<I, S>(entries: I) -> (Self, Vec<TagError>)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tags = Self::new();
        let errors = tags.load(entries, &TagOptions::default());
        (tags, errors)
    }

    /// Loads tag entries, replacing any previous content.
    ///
    /// Each entry is one header value or meta tag `content` attribute.
    pub fn load<I, S>(&mut self, entries: I, options: &TagOptions) -> Vec<TagError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = TagParser::new(options);
        for entry in entries {
            parser.feed(entry.as_ref());
        }
        let (index, errors) = parser.finish();
        self.index = index;
        errors
    }

    /// Returns true if no tag was loaded.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the user-agents that carry tags, `*` for unqualified ones.
    pub fn user_agents(&self) -> impl Iterator<Item = &str> {
        self.index.keys().map(String::as_str)
    }

    fn key(user_agent: &str) -> String {
        let key = normalize_user_agent(user_agent);
        if key.is_empty() {
            CATCH_ALL.to_string()
        } else {
            key
        }
    }

    fn collect_into<'a>(
        &'a self,
        key: &str,
        directive: Option<&str>,
        into: &mut BTreeSet<&'a Tag>,
    ) {
        let Some(directives) = self.index.get(key) else {
            return;
        };
        match directive {
            Some(directive) => {
                if let Some(tags) = directives.get(&directive.trim().to_lowercase()) {
                    into.extend(tags);
                }
            }
            None => into.extend(directives.values().flatten()),
        }
    }

    /// Returns the tags recorded for exactly `user_agent`.
    ///
    /// An empty or `*` user-agent selects unqualified tags. With a
    /// directive name only tags of that directive are returned.
    pub fn tags(&self, user_agent: &str, directive: Option<&str>) -> BTreeSet<&Tag> {
        let mut tags = BTreeSet::new();
        self.collect_into(&Self::key(user_agent), directive, &mut tags);
        tags
    }

    /// Returns true if [`tags`](Self::tags) would return anything.
    pub fn has_tag(&self, user_agent: &str, directive: Option<&str>) -> bool {
        !self.tags(user_agent, directive).is_empty()
    }

    /// Returns the tags that apply to `user_agent`: its own tags plus the
    /// unqualified ones.
    pub fn applicable_tags(&self, user_agent: &str, directive: Option<&str>) -> BTreeSet<&Tag> {
        let mut tags = BTreeSet::new();
        let key = Self::key(user_agent);
        self.collect_into(&key, directive, &mut tags);
        if key != CATCH_ALL {
            self.collect_into(CATCH_ALL, directive, &mut tags);
        }
        tags
    }
}
