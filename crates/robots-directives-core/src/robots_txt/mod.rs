//! Site-wide robots.txt files.
//!
//! [`RobotsTxt`] loads lenient, comment-laden robots.txt text into rule
//! groups keyed by user-agent and answers crawl queries against them.
//!
//! # Example
//!
//! ```rust
//! use robots_directives_core::robots_txt::{LoadOptions, RobotsTxt};
//!
//! let input = r#"
//! User-agent: *
//! Disallow: /private/
//! Allow: /private/press/
//!
//! User-agent: FastBot
//! Crawl-delay: 10
//! Disallow: /search
//!
//! Sitemap: https://example.com/sitemap.xml
//! "#;
//!
//! let mut robots = RobotsTxt::new();
//! let errors = robots.load(input, &LoadOptions::default());
//! assert!(errors.is_empty());
//!
//! assert!(!robots.is_allowed("SlowBot", "/private/notes"));
//! assert!(robots.is_allowed("SlowBot", "/private/press/release"));
//! assert_eq!(robots.crawl_delay("FastBot/2.0"), Some(10));
//! assert!(robots.sitemaps().contains("https://example.com/sitemap.xml"));
//! ```

mod directive;
mod match_result;
mod parser;
mod rule_group;
mod sitemap;

pub use directive::Directive;
pub use match_result::MatchResult;
pub use parser::LoadOptions;
pub use rule_group::RuleGroup;
pub use sitemap::normalize_sitemap;

use crate::parse::{LoadError, SiteError, normalize_user_agent};
use futures::{Stream, StreamExt};
use log::trace;
use parser::{Parsed, SiteParser};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt::{self, Display};
use std::io::BufRead;

/// The catch-all user-agent.
pub const CATCH_ALL: &str = "*";

static NO_VALUES: BTreeSet<String> = BTreeSet::new();

/// A parsed robots.txt file.
///
/// Every load replaces the whole content of the container. A load must not
/// run concurrently with queries on the same value; queries on a loaded
/// value are read-only and may run concurrently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotsTxt {
    /// Rule groups keyed by lowercased user-agent.
    groups: BTreeMap<String, RuleGroup>,
    sitemaps: BTreeSet<String>,
    /// Captured custom field values keyed by lowercased field name.
    custom_fields: BTreeMap<String, BTreeSet<String>>,
}

impl RobotsTxt {
    /// Creates an empty robots.txt, which allows everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses text with default options.
    pub fn parse(text: &str) -> (Self, Vec<SiteError>) {
        let mut robots = Self::new();
        let errors = robots.load(text, &LoadOptions::default());
        (robots, errors)
    }

    /// Loads robots.txt text, replacing any previous content.
    ///
    /// Returns the diagnostics collected along the way. An empty list means
    /// the input was clean.
    pub fn load(&mut self, text: &str, options: &LoadOptions) -> Vec<SiteError> {
        self.load_lines(text.lines(), options)
    }

    /// Loads robots.txt from a sequence of lines.
    pub fn load_lines<I, S>(&mut self, lines: I, options: &LoadOptions) -> Vec<SiteError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut parser = SiteParser::new(options);
        for line in lines {
            parser.feed(line.as_ref());
        }
        self.commit(parser)
    }

    /// Loads robots.txt from an asynchronous stream of lines.
    ///
    /// The load suspends only while waiting for the next line. Content is
    /// replaced once the stream ends.
    pub async fn load_stream<S>(&mut self, lines: S, options: &LoadOptions) -> Vec<SiteError>
    where
        S: Stream,
        S::Item: AsRef<str>,
    {
        let mut parser = SiteParser::new(options);
        let mut lines = std::pin::pin!(lines);
        while let Some(line) = lines.next().await {
            parser.feed(line.as_ref());
        }
        self.commit(parser)
    }

    /// Loads robots.txt from a buffered reader.
    ///
    /// If reading fails the previous content is left untouched.
    pub fn load_reader<R: BufRead>(
        &mut self,
        reader: R,
        options: &LoadOptions,
    ) -> Result<Vec<SiteError>, LoadError> {
        let mut parser = SiteParser::new(options);
        for (index, line) in reader.lines().enumerate() {
            let line = line.map_err(|source| LoadError::Io {
                line: index + 1,
                source,
            })?;
            parser.feed(&line);
        }
        Ok(self.commit(parser))
    }

    fn commit(&mut self, parser: SiteParser) -> Vec<SiteError> {
        let (parsed, errors) = parser.finish();
        let Parsed {
            groups,
            sitemaps,
            custom_fields,
        } = parsed;
        self.groups = groups;
        self.sitemaps = sitemaps;
        self.custom_fields = custom_fields;
        errors
    }

    /// Returns true if no user-agent, sitemap or custom field was loaded.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty() && self.sitemaps.is_empty() && self.custom_fields.is_empty()
    }

    /// Returns the declared user-agents (lowercased, version stripped).
    pub fn user_agents(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Returns all rule groups in user-agent order.
    pub fn rule_groups(&self) -> impl Iterator<Item = &RuleGroup> {
        self.groups.values()
    }

    /// Finds the user-agent key that governs `user_agent`.
    ///
    /// Tries an exact (case-insensitive) match first. Then it repeatedly
    /// drops the last character and looks for the remainder followed by
    /// `*`, ending with the catch-all `*`. Returns `None` when nothing
    /// applies.
    pub fn resolve_user_agent(&self, user_agent: &str) -> Option<&str> {
        let query = normalize_user_agent(user_agent);
        if let Some((key, _)) = self.groups.get_key_value(&query) {
            return Some(key.as_str());
        }

        let mut stem = query.as_str();
        while let Some((index, _)) = stem.char_indices().next_back() {
            stem = &stem[..index];
            let wildcard = format!("{}*", stem);
            if let Some((key, _)) = self.groups.get_key_value(&wildcard) {
                trace!("User-agent '{}' resolved to '{}'", user_agent, key);
                return Some(key.as_str());
            }
        }

        self.groups
            .get_key_value(CATCH_ALL)
            .map(|(key, _)| key.as_str())
    }

    /// Returns the rule group that governs `user_agent`.
    pub fn rule_group(&self, user_agent: &str) -> Option<&RuleGroup> {
        self.resolve_user_agent(user_agent)
            .and_then(|key| self.groups.get(key))
    }

    /// Finds the directive that governs `path` for `user_agent`.
    ///
    /// When no group applies the result allows everything and carries no
    /// user-agent.
    pub fn find_match(&self, user_agent: &str, path: &str) -> MatchResult {
        match self.rule_group(user_agent) {
            Some(group) => group.find_match(path),
            None => {
                trace!("No rule group for user-agent '{}'", user_agent);
                MatchResult::allow_all()
            }
        }
    }

    /// Returns true if `user_agent` may crawl `path` (with optional query).
    pub fn is_allowed(&self, user_agent: &str, path: &str) -> bool {
        self.find_match(user_agent, path).is_allowed()
    }

    /// Returns the crawl-delay in seconds that applies to `user_agent`.
    pub fn crawl_delay(&self, user_agent: &str) -> Option<u32> {
        self.rule_group(user_agent).and_then(RuleGroup::crawl_delay)
    }

    /// Returns the normalized sitemap URLs.
    pub fn sitemaps(&self) -> &BTreeSet<String> {
        &self.sitemaps
    }

    /// Returns the captured values of a custom field (case-insensitive).
    pub fn custom_field_values(&self, field: &str) -> &BTreeSet<String> {
        self.custom_fields
            .get(&field.trim().to_lowercase())
            .unwrap_or(&NO_VALUES)
    }
}

impl Display for RobotsTxt {
    /// Renders the file back to robots.txt text.
    ///
    /// Groups are written in user-agent order, followed by custom fields
    /// and sitemaps. Groups with no rules and no crawl-delay are written last:
    /// a bare run of user-agents must never precede another group's rules.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (declared, ruled): (Vec<&RuleGroup>, Vec<&RuleGroup>) = self
            .groups
            .values()
            .partition(|group| group.is_empty() && group.crawl_delay().is_none());
        let mut first = true;
        for group in ruled.into_iter().chain(declared) {
            if !first {
                writeln!(f)?;
            }
            first = false;
            write!(f, "{}", group)?;
        }
        let has_trailer = !(self.custom_fields.is_empty() && self.sitemaps.is_empty());
        if !self.groups.is_empty() && has_trailer {
            writeln!(f)?;
        }
        for (field, values) in &self.custom_fields {
            for value in values {
                writeln!(f, "{}: {}", field, value)?;
            }
        }
        for sitemap in &self.sitemaps {
            writeln!(f, "Sitemap: {}", sitemap)?;
        }
        Ok(())
    }
}
