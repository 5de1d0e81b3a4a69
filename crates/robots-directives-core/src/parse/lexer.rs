//! Lexer and token parsers for robots.txt lines and robots tag entries.
//!
//! This module contains nom-based parsers for the small pieces both
//! grammars share: comments, `name: value` pairs and user-agent tokens.

use nom::{
    IResult, Parser,
    bytes::complete::{take_till, take_till1},
    character::complete::char,
    combinator::rest,
};

fn is_comment_start(c: char) -> bool {
    c == '#'
}

fn is_colon(c: char) -> bool {
    c == ':'
}

/// Removes everything from the first `#` onward and trims trailing whitespace.
pub fn strip_comment(input: &str) -> &str {
    let parsed: IResult<&str, &str> = take_till(is_comment_start)(input);
    match parsed {
        Ok((_comment, content)) => content.trim_end(),
        Err(_) => input.trim_end(),
    }
}

/// The shape of a non-empty robots.txt line after comment stripping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineShape<'a> {
    /// A `field: value` line. Both parts are trimmed.
    Field {
        /// The field name as written.
        name: &'a str,
        /// The value after the first colon.
        value: &'a str,
    },
    /// A line without any colon; the whole trimmed text is the field name.
    Bare(&'a str),
}

/// Parses `field: value`, splitting on the first colon.
pub fn parse_field_value(input: &str) -> IResult<&str, (&str, &str)> {
    let parsed: IResult<&str, (&str, char, &str)> =
        (take_till(is_colon), char(':'), rest).parse(input);
    let (remaining, (name, _, value)) = parsed?;
    Ok((remaining, (name.trim(), value.trim())))
}

/// Classifies a comment-free line as a field line or a bare name.
pub fn classify_line(input: &str) -> LineShape<'_> {
    match parse_field_value(input) {
        Ok((_, (name, value))) => LineShape::Field { name, value },
        Err(_) => LineShape::Bare(input.trim()),
    }
}

/// Parses a leading `name:` prefix with a non-empty name.
///
/// Returns the remaining text and the trimmed name.
pub fn parse_name_prefix(input: &str) -> IResult<&str, &str> {
    let parsed: IResult<&str, (&str, char)> = (take_till1(is_colon), char(':')).parse(input);
    let (remaining, (name, _)) = parsed?;
    Ok((remaining, name.trim()))
}

/// Strips an optional trailing `/version` suffix from a user-agent token.
///
/// `Googlebot/2.1` becomes `Googlebot` and `Foo/Bar/1.0` becomes `Foo/Bar`.
/// A token that is nothing but a version suffix is returned unchanged.
pub fn user_agent_name(input: &str) -> &str {
    let input = input.trim();
    match input.rsplit_once('/') {
        Some((name, _version)) if !name.trim().is_empty() => name.trim(),
        _ => input,
    }
}

/// Normalizes a user-agent token to its lookup key.
pub fn normalize_user_agent(input: &str) -> String {
    user_agent_name(input).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_comment_removes_trailing_comment() {
        assert_eq!(strip_comment("Disallow: /admin # keep out"), "Disallow: /admin");
        assert_eq!(strip_comment("# whole line"), "");
        assert_eq!(strip_comment("Allow: /   "), "Allow: /");
        assert_eq!(strip_comment(""), "");
    }

    #[test]
    fn strip_comment_keeps_leading_whitespace() {
        assert_eq!(strip_comment("  Allow: /x"), "  Allow: /x");
    }

    #[test]
    fn classify_field_line() {
        assert_eq!(
            classify_line(" User-agent :  Googlebot "),
            LineShape::Field {
                name: "User-agent",
                value: "Googlebot"
            }
        );
    }

    #[test]
    fn classify_splits_on_first_colon_only() {
        assert_eq!(
            classify_line("Sitemap: https://example.com/sitemap.xml"),
            LineShape::Field {
                name: "Sitemap",
                value: "https://example.com/sitemap.xml"
            }
        );
    }

    #[test]
    fn classify_empty_value() {
        assert_eq!(
            classify_line("Disallow:"),
            LineShape::Field {
                name: "Disallow",
                value: ""
            }
        );
    }

    #[test]
    fn classify_bare_line() {
        assert_eq!(classify_line("  Disallow /admin"), LineShape::Bare("Disallow /admin"));
    }

    #[test]
    fn name_prefix_requires_name() {
        let (rest, name) = parse_name_prefix("googlebot: noindex").unwrap();
        assert_eq!(name, "googlebot");
        assert_eq!(rest, " noindex");
        assert!(parse_name_prefix(": noindex").is_err());
        assert!(parse_name_prefix("noindex").is_err());
    }

    #[test]
    fn user_agent_version_is_stripped() {
        assert_eq!(user_agent_name("Googlebot/2.1"), "Googlebot");
        assert_eq!(user_agent_name("Bingbot"), "Bingbot");
        assert_eq!(user_agent_name("/2.1"), "/2.1");
        assert_eq!(normalize_user_agent("FooBot/1.0"), "foobot");
        assert_eq!(normalize_user_agent("*"), "*");
    }

    #[test]
    fn only_last_version_segment_is_stripped() {
        assert_eq!(user_agent_name("Foo/Bar/1.0"), "Foo/Bar");
        assert_eq!(normalize_user_agent(" Foo/Bar/1.0 "), "foo/bar");
        assert_eq!(user_agent_name("Foo/"), "Foo");
    }
}
