//! Line-driven parser for robots.txt files.
//!
//! The parser is fed one physical line at a time, so the same state
//! machine backs text, iterator, reader and stream loading.

use super::directive::Directive;
use super::rule_group::RuleGroup;
use super::sitemap::normalize_sitemap;
use crate::parse::{
    Line, LineCounter, LineShape, SiteError, SiteErrorKind, classify_line, normalize_user_agent,
    strip_comment,
};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

/// Configuration options for loading a robots.txt file.
#[derive(Debug, Clone, Default)]
pub struct LoadOptions {
    /// If true, `Allow` lines are skipped without a diagnostic.
    pub ignore_allow_directive: bool,
    /// Extra field names (case-insensitive) whose values are captured.
    pub custom_fields: HashSet<String>,
    /// Misspelled field names (case-insensitive) mapped to canonical names.
    pub misspelled_fields: HashMap<String, String>,
}

impl LoadOptions {
    /// Creates load options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates load options that fix frequent field name typos.
    pub fn common_misspellings() -> Self {
        Self::new().with_misspelled_fields([
            ("useragent", "user-agent"),
            ("user agent", "user-agent"),
            ("user_agent", "user-agent"),
            ("dissallow", "disallow"),
            ("disalow", "disallow"),
            ("crawldelay", "crawl-delay"),
            ("crawl_delay", "crawl-delay"),
            ("site-map", "sitemap"),
        ])
    }

    /// Sets whether `Allow` lines are ignored.
    pub fn with_ignore_allow_directive(mut self, value: bool) -> Self {
        self.ignore_allow_directive = value;
        self
    }

    /// Adds a custom field to capture.
    pub fn with_custom_field(mut self, field: impl Into<String>) -> Self {
        self.custom_fields.insert(field.into());
        self
    }

    /// Adds several custom fields to capture.
    pub fn with_custom_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.custom_fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Maps a misspelled field name to its canonical form.
    pub fn with_misspelled_field(
        mut self,
        misspelled: impl Into<String>,
        canonical: impl Into<String>,
    ) -> Self {
        self.misspelled_fields
            .insert(misspelled.into(), canonical.into());
        self
    }

    /// Maps several misspelled field names to their canonical forms.
    pub fn with_misspelled_fields<I, K, V>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.misspelled_fields.extend(
            fields
                .into_iter()
                .map(|(misspelled, canonical)| (misspelled.into(), canonical.into())),
        );
        self
    }
}

/// Everything a load builds.
#[derive(Debug, Default)]
pub(crate) struct Parsed {
    pub(crate) groups: BTreeMap<String, RuleGroup>,
    pub(crate) sitemaps: BTreeSet<String>,
    pub(crate) custom_fields: BTreeMap<String, BTreeSet<String>>,
}

/// Parsing state for one load.
#[derive(Debug)]
pub(crate) struct SiteParser {
    ignore_allow: bool,
    custom_fields: HashSet<String>,
    misspelled_fields: HashMap<String, String>,
    counter: LineCounter,
    parsed: Parsed,
    /// Keys of the user-agents the current rules apply to.
    active: Vec<String>,
    /// A rule line (allow, disallow or crawl-delay) was seen since the last
    /// user-agent line. Only rules close a run of user-agents; sitemap,
    /// custom and unknown fields are not rules of any group.
    rules_seen: bool,
    errors: Vec<SiteError>,
}

impl SiteParser {
    pub(crate) fn new(options: &LoadOptions) -> Self {
        Self {
            ignore_allow: options.ignore_allow_directive,
            custom_fields: options
                .custom_fields
                .iter()
                .map(|field| field.trim().to_lowercase())
                .collect(),
            misspelled_fields: options
                .misspelled_fields
                .iter()
                .map(|(misspelled, canonical)| {
                    (misspelled.trim().to_lowercase(), canonical.trim().to_lowercase())
                })
                .collect(),
            counter: LineCounter::new(),
            parsed: Parsed::default(),
            active: Vec::new(),
            rules_seen: false,
            errors: Vec::new(),
        }
    }

    /// Returns the lowercased field name after misspelling substitution.
    fn canonical_field(&self, name: &str) -> String {
        let field = name.to_lowercase();
        match self.misspelled_fields.get(&field) {
            Some(canonical) => canonical.clone(),
            None => field,
        }
    }

    fn error(&mut self, number: usize, text: &str, code: SiteErrorKind) {
        let error = SiteError::new(Line::new(number, text), code);
        debug!("Line {}: {}", number, code);
        self.errors.push(error);
    }

    /// Consumes one physical line.
    pub(crate) fn feed(&mut self, text: &str) {
        let Some(number) = self.counter.advance(text) else {
            return;
        };

        let content = strip_comment(text);
        if content.trim().is_empty() {
            trace!("Line {}: skipped", number);
            return;
        }

        match classify_line(content) {
            LineShape::Bare(name) => {
                if self.ignore_allow && self.canonical_field(name) == "allow" {
                    trace!("Line {}: ignored allow", number);
                    return;
                }
                self.error(number, text, SiteErrorKind::MissingValue);
            }
            LineShape::Field { name, value } => {
                let field = self.canonical_field(name);
                trace!("Line {}: field '{}'", number, field);
                match field.as_str() {
                    "allow" | "disallow" => self.rule(number, text, field == "allow", value),
                    "crawl-delay" => self.crawl_delay(number, text, value),
                    "sitemap" => self.sitemap(number, text, value),
                    "user-agent" => self.user_agent(number, text, value),
                    _ => self.custom_field(&field, value),
                }
            }
        }
    }

    fn rule(&mut self, number: usize, text: &str, is_allowed: bool, value: &str) {
        if is_allowed && self.ignore_allow {
            trace!("Line {}: ignored allow", number);
            return;
        }
        if self.active.is_empty() {
            self.error(number, text, SiteErrorKind::RuleFoundBeforeUserAgent);
            return;
        }
        self.rules_seen = true;

        if !value.is_empty() && !value.starts_with('/') {
            self.error(number, text, SiteErrorKind::InvalidPathFormat);
            return;
        }

        let directive = Directive::new(is_allowed, value);
        for user_agent in &self.active {
            if let Some(group) = self.parsed.groups.get_mut(user_agent) {
                group.add_directive(directive.clone());
            }
        }
    }

    fn crawl_delay(&mut self, number: usize, text: &str, value: &str) {
        if self.active.is_empty() {
            self.error(number, text, SiteErrorKind::RuleFoundBeforeUserAgent);
            return;
        }
        self.rules_seen = true;

        if value.is_empty() {
            self.error(number, text, SiteErrorKind::MissingValue);
            return;
        }

        let Ok(seconds) = value.parse::<u32>() else {
            trace!("Line {}: ignoring non-numeric crawl-delay '{}'", number, value);
            return;
        };
        for user_agent in &self.active {
            if let Some(group) = self.parsed.groups.get_mut(user_agent) {
                group.set_crawl_delay(seconds);
            }
        }
    }

    fn sitemap(&mut self, number: usize, text: &str, value: &str) {
        if value.is_empty() {
            self.error(number, text, SiteErrorKind::MissingValue);
            return;
        }
        match normalize_sitemap(value) {
            Some(sitemap) => {
                self.parsed.sitemaps.insert(sitemap);
            }
            None => trace!("Line {}: rejected sitemap '{}'", number, value),
        }
    }

    fn user_agent(&mut self, number: usize, text: &str, value: &str) {
        if value.is_empty() {
            self.error(number, text, SiteErrorKind::MissingValue);
            return;
        }
        if self.rules_seen {
            self.active.clear();
            self.rules_seen = false;
        }

        let key = normalize_user_agent(value);
        self.parsed
            .groups
            .entry(key.clone())
            .or_insert_with(|| RuleGroup::new(key.clone()));
        if !self.active.contains(&key) {
            self.active.push(key);
        }
    }

    fn custom_field(&mut self, field: &str, value: &str) {
        if value.is_empty() || !self.custom_fields.contains(field) {
            return;
        }
        self.parsed
            .custom_fields
            .entry(field.to_string())
            .or_default()
            .insert(value.to_string());
    }

    /// Finishes the load, returning the built state and its diagnostics.
    pub(crate) fn finish(self) -> (Parsed, Vec<SiteError>) {
        debug!(
            "Parsed robots.txt: {} lines, {} user-agents, {} sitemaps, {} errors",
            self.counter.count(),
            self.parsed.groups.len(),
            self.parsed.sitemaps.len(),
            self.errors.len()
        );
        (self.parsed, self.errors)
    }
}
