//! Page-level tags.

use serde::Serialize;
use std::fmt::{self, Display};

/// One page-level directive, optionally scoped to a user-agent.
///
/// All parts are trimmed and lowercased on construction, so two tags are
/// equal exactly when their renderings match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Tag {
    user_agent: Option<String>,
    directive: String,
    value: Option<String>,
}

fn normalize(part: &str) -> Option<String> {
    let part = part.trim();
    (!part.is_empty()).then(|| part.to_lowercase())
}

impl Tag {
    /// Creates a new tag. Empty values and user-agents count as absent.
    pub fn new(directive: &str, value: Option<&str>, user_agent: Option<&str>) -> Self {
        Self {
            user_agent: user_agent.and_then(normalize),
            directive: directive.trim().to_lowercase(),
            value: value.and_then(normalize),
        }
    }

    /// Returns the directive name (e.g., `noindex`, `max-snippet`).
    pub fn directive(&self) -> &str {
        &self.directive
    }

    /// Returns the directive value, if any.
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Returns the user-agent this tag is scoped to, if any.
    pub fn user_agent(&self) -> Option<&str> {
        self.user_agent.as_deref()
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(user_agent) = &self.user_agent {
            write!(f, "{}: ", user_agent)?;
        }
        f.write_str(&self.directive)?;
        if let Some(value) = &self.value {
            write!(f, ": {}", value)?;
        }
        Ok(())
    }
}
