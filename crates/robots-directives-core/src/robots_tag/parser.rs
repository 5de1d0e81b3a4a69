//! Entry tokenizer for page-level robots tags.
//!
//! An entry is one `X-Robots-Tag` header value or one robots meta tag
//! `content` attribute, e.g. `googlebot: noindex, max-snippet: 20`.

use super::CATCH_ALL;
use super::tag::Tag;
use crate::parse::{
    Line, LineCounter, TagError, TagErrorKind, normalize_user_agent, parse_field_value,
    parse_name_prefix,
};
use log::{debug, trace};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Tags keyed by user-agent, then by directive name.
pub(crate) type TagIndex = BTreeMap<String, BTreeMap<String, BTreeSet<Tag>>>;

/// Configuration options for loading robots tags.
#[derive(Debug, Clone, Default)]
pub struct TagOptions {
    /// Directive names (case-insensitive) that must not be taken for a
    /// user-agent prefix, such as `max-snippet` in `max-snippet: 20`.
    pub special_words: HashSet<String>,
}

impl TagOptions {
    /// Creates tag options with no special words.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates tag options knowing the standard valued directives.
    pub fn standard() -> Self {
        Self::new().with_special_words([
            "max-snippet",
            "max-image-preview",
            "max-video-preview",
            "unavailable_after",
        ])
    }

    /// Adds a special word.
    pub fn with_special_word(mut self, word: impl Into<String>) -> Self {
        self.special_words.insert(word.into());
        self
    }

    /// Adds several special words.
    pub fn with_special_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.special_words.extend(words.into_iter().map(Into::into));
        self
    }
}

/// Parsing state for one load.
#[derive(Debug)]
pub(crate) struct TagParser {
    special_words: HashSet<String>,
    counter: LineCounter,
    index: TagIndex,
    errors: Vec<TagError>,
}

impl TagParser {
    pub(crate) fn new(options: &TagOptions) -> Self {
        Self {
            special_words: options
                .special_words
                .iter()
                .map(|word| word.trim().to_lowercase())
                .collect(),
            counter: LineCounter::new(),
            index: TagIndex::new(),
            errors: Vec::new(),
        }
    }

    /// Splits a leading user-agent qualifier off the first token.
    fn split_user_agent<'a>(&self, first: &'a str) -> (Option<String>, &'a str) {
        match parse_name_prefix(first) {
            Ok((remaining, name))
                if !name.is_empty() && !self.special_words.contains(&name.to_lowercase()) =>
            {
                let user_agent = normalize_user_agent(name);
                if user_agent == CATCH_ALL {
                    (None, remaining)
                } else {
                    (Some(user_agent), remaining)
                }
            }
            _ => (None, first),
        }
    }

    /// Consumes one entry.
    pub(crate) fn feed(&mut self, entry: &str) {
        let Some(number) = self.counter.advance(entry) else {
            return;
        };

        let (first, rest) = match entry.split_once(',') {
            Some((first, rest)) => (first, Some(rest)),
            None => (entry, None),
        };
        let (user_agent, first) = self.split_user_agent(first);
        let key = user_agent.as_deref().unwrap_or(CATCH_ALL).to_string();

        let tokens = std::iter::once(first)
            .chain(rest.into_iter().flat_map(|rest| rest.split(',')));
        for token in tokens {
            let token = token.trim();
            let (directive, value) = match parse_field_value(token) {
                Ok((_, (directive, value))) => (directive, Some(value)),
                Err(_) => (token, None),
            };
            if directive.is_empty() {
                debug!("Entry {}: {}", number, TagErrorKind::MissingValue);
                self.errors.push(TagError::new(
                    Line::new(number, entry),
                    TagErrorKind::MissingValue,
                ));
                continue;
            }

            let tag = Tag::new(directive, value, user_agent.as_deref());
            trace!("Entry {}: tag '{}'", number, tag);
            self.index
                .entry(key.clone())
                .or_default()
                .entry(tag.directive().to_string())
                .or_default()
                .insert(tag);
        }
    }

    /// Finishes the load, returning the tag index and its diagnostics.
    pub(crate) fn finish(self) -> (TagIndex, Vec<TagError>) {
        debug!(
            "Parsed robots tags: {} entries, {} user-agents, {} errors",
            self.counter.count(),
            self.index.len(),
            self.errors.len()
        );
        (self.index, self.errors)
    }
}
