//! Per-user-agent rule groups and the allow/disallow precedence algorithm.

use super::directive::Directive;
use super::match_result::MatchResult;
use crate::matching::PathPattern;
use std::collections::HashSet;
use std::fmt::{self, Display};

/// A directive together with its compiled, effective pattern.
#[derive(Debug, Clone)]
struct Rule {
    /// The directive as written.
    directive: Directive,
    /// The directive as evaluated (empty paths inverted).
    effective: Directive,
    pattern: PathPattern,
}

impl Rule {
    fn new(directive: Directive) -> Self {
        let effective = directive.effective();
        let pattern = PathPattern::new(effective.path());
        Self {
            directive,
            effective,
            pattern,
        }
    }

    fn specificity(&self) -> usize {
        self.pattern.specificity()
    }
}

/// The directives and crawl-delay declared for one user-agent.
#[derive(Debug, Clone)]
pub struct RuleGroup {
    user_agent: String,
    rules: Vec<Rule>,
    /// Rendered text of every directive, for deduplication.
    seen: HashSet<String>,
    crawl_delay: Option<u32>,
}

impl RuleGroup {
    /// Creates an empty group for the given user-agent.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            user_agent: user_agent.into(),
            rules: Vec::new(),
            seen: HashSet::new(),
            crawl_delay: None,
        }
    }

    /// Returns the user-agent this group applies to.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Returns the directives in the order they were first added.
    pub fn directives(&self) -> impl Iterator<Item = &Directive> {
        self.rules.iter().map(|rule| &rule.directive)
    }

    /// Returns the number of distinct directives.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Returns true if the group has no directives.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Adds a directive unless one with the same text is already present.
    ///
    /// Returns true if the directive was added.
    pub fn add_directive(&mut self, directive: Directive) -> bool {
        if !self.seen.insert(directive.to_string()) {
            return false;
        }
        self.rules.push(Rule::new(directive));
        true
    }

    /// Returns the crawl-delay in seconds, if one was declared.
    pub fn crawl_delay(&self) -> Option<u32> {
        self.crawl_delay
    }

    /// Sets the crawl-delay, replacing any previous value.
    pub fn set_crawl_delay(&mut self, seconds: u32) {
        self.crawl_delay = Some(seconds);
    }

    /// Finds the directive that governs `path`.
    ///
    /// Among the matching directives, the longest pattern of each polarity
    /// is kept (first one wins on equal lengths). If both an allow and a
    /// disallow match, the longer one wins, and allow wins a tie. A group
    /// without directives allows `/`.
    pub fn find_match(&self, path: &str) -> MatchResult {
        let absent;
        let rules = if self.rules.is_empty() {
            absent = [Rule::new(Directive::allow_all())];
            &absent[..]
        } else {
            &self.rules[..]
        };

        let mut best_allow: Option<&Rule> = None;
        let mut best_disallow: Option<&Rule> = None;
        for rule in matching_rules(rules, path) {
            let best = if rule.effective.is_allowed() {
                &mut best_allow
            } else {
                &mut best_disallow
            };
            if best.is_none_or(|current| rule.specificity() > current.specificity()) {
                *best = Some(rule);
            }
        }

        let winner = match (best_allow, best_disallow) {
            (None, None) => return MatchResult::allow_all(),
            (Some(allow), None) => allow,
            (None, Some(disallow)) => disallow,
            (Some(allow), Some(disallow)) => {
                if disallow.specificity() > allow.specificity() {
                    disallow
                } else {
                    allow
                }
            }
        };

        MatchResult::new(winner.effective.clone(), self.user_agent.as_str())
    }

    /// Returns true if `path` may be crawled under this group.
    pub fn is_allowed(&self, path: &str) -> bool {
        self.find_match(path).is_allowed()
    }
}

/// Returns the rules whose pattern matches `path`, in declaration order.
#[cfg(not(feature = "parallel"))]
fn matching_rules<'a>(rules: &'a [Rule], path: &str) -> Vec<&'a Rule> {
    rules
        .iter()
        .filter(|rule| rule.pattern.matches(path))
        .collect()
}

/// Returns the rules whose pattern matches `path`, in declaration order.
#[cfg(feature = "parallel")]
fn matching_rules<'a>(rules: &'a [Rule], path: &str) -> Vec<&'a Rule> {
    use rayon::prelude::*;

    rules
        .par_iter()
        .filter(|rule| rule.pattern.matches(path))
        .collect()
}

impl PartialEq for RuleGroup {
    fn eq(&self, other: &Self) -> bool {
        self.user_agent == other.user_agent
            && self.crawl_delay == other.crawl_delay
            && self.directives().eq(other.directives())
    }
}

impl Eq for RuleGroup {}

impl Display for RuleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User-agent: {}", self.user_agent)?;
        if let Some(delay) = self.crawl_delay {
            writeln!(f, "Crawl-delay: {}", delay)?;
        }
        for directive in self.directives() {
            writeln!(f, "{}", directive)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(directives: &[Directive]) -> RuleGroup {
        let mut group = RuleGroup::new("testbot");
        for directive in directives {
            group.add_directive(directive.clone());
        }
        group
    }

    #[test]
    fn duplicate_directives_are_dropped() {
        let mut group = RuleGroup::new("*");
        assert!(group.add_directive(Directive::disallow("/admin")));
        assert!(!group.add_directive(Directive::disallow("/admin")));
        assert!(group.add_directive(Directive::disallow("/Admin")));
        assert!(group.add_directive(Directive::allow("/admin")));
        assert_eq!(group.len(), 3);
    }

    #[test]
    fn longer_match_wins() {
        let group = group(&[Directive::allow("/page"), Directive::disallow("/*.htm")]);
        let result = group.find_match("/page.htm");
        assert!(!result.is_allowed());
        assert_eq!(result.directive, Directive::disallow("/*.htm"));
        assert_eq!(result.user_agent.as_deref(), Some("testbot"));
    }

    #[test]
    fn equal_length_prefers_allow() {
        let group = group(&[Directive::disallow("/folder"), Directive::allow("/folder")]);
        assert!(group.is_allowed("/folder/page"));
    }

    #[test]
    fn end_anchor_ties_with_root() {
        let group = group(&[Directive::allow("/$"), Directive::disallow("/")]);
        assert!(group.is_allowed("/"));
        assert!(!group.is_allowed("/page"));
    }

    #[test]
    fn more_specific_allow_overrides_disallow() {
        let group = group(&[Directive::disallow("/p"), Directive::allow("/p/public")]);
        assert!(group.is_allowed("/p/public/index.html"));
        assert!(!group.is_allowed("/p/private"));
    }

    #[test]
    fn empty_disallow_allows_everything() {
        let group = group(&[Directive::disallow("")]);
        let result = group.find_match("/anything");
        assert!(result.is_allowed());
        assert_eq!(result.directive, Directive::allow("/"));
    }

    #[test]
    fn empty_allow_disallows_everything() {
        let group = group(&[Directive::allow("")]);
        assert!(!group.is_allowed("/anything"));
    }

    #[test]
    fn no_match_is_unattributed_allow() {
        let group = group(&[Directive::disallow("/private")]);
        let result = group.find_match("/public");
        assert!(result.is_allowed());
        assert_eq!(result.user_agent, None);
    }

    #[test]
    fn group_without_directives_allows_root() {
        let group = RuleGroup::new("quietbot");
        let result = group.find_match("/page");
        assert!(result.is_allowed());
        assert_eq!(result.directive, Directive::allow("/"));
        assert_eq!(result.user_agent.as_deref(), Some("quietbot"));
    }

    #[test]
    fn first_of_equal_length_is_kept() {
        let group = group(&[Directive::disallow("/a*"), Directive::disallow("/ab")]);
        let result = group.find_match("/abc");
        assert_eq!(result.directive, Directive::disallow("/a*"));
    }

    #[test]
    fn query_string_is_matched() {
        let group = group(&[Directive::disallow("/*?sessionid=")]);
        assert!(!group.is_allowed("/cart?sessionid=abc"));
        assert!(group.is_allowed("/cart"));
    }

    #[test]
    fn crawl_delay_last_value_wins() {
        let mut group = RuleGroup::new("*");
        assert_eq!(group.crawl_delay(), None);
        group.set_crawl_delay(5);
        group.set_crawl_delay(10);
        assert_eq!(group.crawl_delay(), Some(10));
    }

    #[test]
    fn group_display() {
        let mut group = RuleGroup::new("googlebot");
        group.set_crawl_delay(3);
        group.add_directive(Directive::disallow("/tmp"));
        group.add_directive(Directive::allow("/tmp/public"));
        assert_eq!(
            group.to_string(),
            "User-agent: googlebot\nCrawl-delay: 3\nDisallow: /tmp\nAllow: /tmp/public\n"
        );
    }
}
