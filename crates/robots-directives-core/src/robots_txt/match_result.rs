use super::directive::Directive;
use serde::Serialize;

/// The outcome of matching a path against a robots.txt file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchResult {
    /// The directive that governs the path.
    pub directive: Directive,
    /// The user-agent group the directive came from.
    ///
    /// `None` means no group applied and everything is implicitly allowed.
    pub user_agent: Option<String>,
}

impl MatchResult {
    /// Creates a result attributed to a user-agent group.
    pub fn new(directive: Directive, user_agent: impl Into<String>) -> Self {
        Self {
            directive,
            user_agent: Some(user_agent.into()),
        }
    }

    /// The implicit allow-everything result.
    pub fn allow_all() -> Self {
        Self {
            directive: Directive::allow_all(),
            user_agent: None,
        }
    }

    /// Returns true if the path may be crawled.
    pub fn is_allowed(&self) -> bool {
        self.directive.is_allowed()
    }
}

impl Default for MatchResult {
    fn default() -> Self {
        Self::allow_all()
    }
}
