//! Allow/disallow directives.

use serde::Serialize;
use std::fmt::{self, Display};

/// A single allow or disallow rule with its raw path pattern.
///
/// The path is kept exactly as written. An empty path inverts the rule
/// over the whole site: `Disallow:` allows everything and `Allow:`
/// disallows everything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Directive {
    is_allowed: bool,
    path: String,
}

impl Directive {
    /// Creates a new directive.
    pub fn new(is_allowed: bool, path: impl Into<String>) -> Self {
        Self {
            is_allowed,
            path: path.into(),
        }
    }

    /// Creates an allow directive.
    pub fn allow(path: impl Into<String>) -> Self {
        Self::new(true, path)
    }

    /// Creates a disallow directive.
    pub fn disallow(path: impl Into<String>) -> Self {
        Self::new(false, path)
    }

    /// The directive that stands for "everything is allowed".
    pub fn allow_all() -> Self {
        Self::allow("/")
    }

    /// Returns true for an allow directive.
    pub fn is_allowed(&self) -> bool {
        self.is_allowed
    }

    /// Returns the raw path pattern.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the directive as it is evaluated.
    ///
    /// An empty path becomes `/` with the opposite polarity.
    pub fn effective(&self) -> Directive {
        if self.path.is_empty() {
            Self::new(!self.is_allowed, "/")
        } else {
            self.clone()
        }
    }
}

impl Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let field = if self.is_allowed { "Allow" } else { "Disallow" };
        if self.path.is_empty() {
            write!(f, "{}:", field)
        } else {
            write!(f, "{}: {}", field, self.path)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_display() {
        assert_eq!(Directive::allow("/public").to_string(), "Allow: /public");
        assert_eq!(Directive::disallow("/*.gif$").to_string(), "Disallow: /*.gif$");
        assert_eq!(Directive::disallow("").to_string(), "Disallow:");
    }

    #[test]
    fn empty_path_inverts() {
        let effective = Directive::disallow("").effective();
        assert!(effective.is_allowed());
        assert_eq!(effective.path(), "/");

        let effective = Directive::allow("").effective();
        assert!(!effective.is_allowed());
        assert_eq!(effective.path(), "/");
    }

    #[test]
    fn non_empty_path_is_unchanged() {
        let directive = Directive::disallow("/tmp");
        assert_eq!(directive.effective(), directive);
    }
}
