//! Parsing of textual Alertmanager-style matchers.
//!
//! Matchers arrive from user input in the form `name<op>value`, e.g.
//! `severity=critical`, `team!=infra`, `region=~"^us-.*"`. Parsing trims
//! surrounding whitespace, picks the longest operator symbol, and strips
//! one level of double quotes around the value.

use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{MatcherError, Result};
use crate::matcher::{MatchOperator, Matcher};

/// Splits `name<op>value`. Two-character operators come first in the
/// alternation so `=~` is not read as `=` followed by a `~` value.
static MATCHER_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([^\s!=~]+)\s*(=~|!~|!=|=)\s*(.*?)\s*$").unwrap_or_else(|_| unreachable!())
});

/// Parses one textual matcher.
///
/// # Errors
///
/// Returns [`MatcherError::InvalidSyntax`] when the input carries no
/// operator or no label name.
///
/// # Example
///
/// ```
/// use route_matchers::{parse_matcher, MatchOperator};
///
/// let m = parse_matcher(r#"region=~"^us-.*""#)?;
/// assert_eq!(m.name, "region");
/// assert_eq!(m.op, MatchOperator::RegexMatch);
/// assert_eq!(m.value, "^us-.*");
/// # Ok::<(), route_matchers::MatcherError>(())
/// ```
pub fn parse_matcher(input: &str) -> Result<Matcher> {
    let captures = MATCHER_REGEX
        .captures(input)
        .ok_or_else(|| MatcherError::InvalidSyntax {
            input: input.to_string(),
            reason: "expected name<op>value with one of =, !=, =~, !~".to_string(),
        })?;

    let name = &captures[1];
    let op = MatchOperator::from_str(&captures[2])?;
    let value = unquote(&captures[3]);

    Matcher::new(name, op, value)
}

/// Parses a comma-separated matcher list, skipping empty segments.
///
/// # Errors
///
/// Returns the first parse error encountered.
pub fn parse_matchers(input: &str) -> Result<Vec<Matcher>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(parse_matcher)
        .collect()
}

/// Strips one level of surrounding double quotes, if present.
fn unquote(value: &str) -> &str {
    value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value)
}

impl FromStr for Matcher {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self> {
        parse_matcher(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use test_case::test_case;

    #[test_case("severity=critical", "severity", MatchOperator::Equal, "critical")]
    #[test_case("team!=infra", "team", MatchOperator::NotEqual, "infra")]
    #[test_case("region=~^us-.*", "region", MatchOperator::RegexMatch, "^us-.*")]
    #[test_case("env!~stag.*", "env", MatchOperator::RegexNotMatch, "stag.*")]
    fn parses_each_operator(input: &str, name: &str, op: MatchOperator, value: &str) {
        let m = parse_matcher(input).unwrap();
        assert_eq!(m.name, name);
        assert_eq!(m.op, op);
        assert_eq!(m.value, value);
    }

    #[test]
    fn trims_whitespace_around_name_and_value() {
        let m = parse_matcher("  severity = critical  ").unwrap();
        assert_eq!(m.name, "severity");
        assert_eq!(m.value, "critical");
    }

    #[test]
    fn unquotes_double_quoted_values() {
        let m = parse_matcher(r#"team="infra team""#).unwrap();
        assert_eq!(m.value, "infra team");
    }

    #[test]
    fn keeps_unbalanced_quote() {
        let m = parse_matcher(r#"team="infra"#).unwrap();
        assert_eq!(m.value, "\"infra");
    }

    #[test]
    fn empty_value_parses() {
        let m = parse_matcher("team=").unwrap();
        assert_eq!(m.op, MatchOperator::Equal);
        assert_eq!(m.value, "");
    }

    #[test]
    fn missing_operator_is_invalid_syntax() {
        let err = parse_matcher("severity").unwrap_err();
        assert!(matches!(err, MatcherError::InvalidSyntax { .. }));
    }

    #[test]
    fn missing_name_is_invalid_syntax() {
        assert!(parse_matcher("=critical").is_err());
        assert!(parse_matcher("  =~^us-").is_err());
    }

    #[test]
    fn from_str_delegates_to_parse() {
        let m: Matcher = "severity=critical".parse().unwrap();
        assert_eq!(m.name, "severity");
    }

    #[test]
    fn parse_matchers_splits_on_commas() {
        let ms = parse_matchers("team=infra, severity=~crit.*").unwrap();
        assert_eq!(ms.len(), 2);
        assert_eq!(ms[0].name, "team");
        assert_eq!(ms[1].op, MatchOperator::RegexMatch);
    }

    #[test]
    fn parse_matchers_skips_empty_segments() {
        let ms = parse_matchers("team=infra,, ").unwrap();
        assert_eq!(ms.len(), 1);
    }

    #[test]
    fn parse_matchers_empty_input_is_empty_list() {
        assert!(parse_matchers("").unwrap().is_empty());
    }

    #[test]
    fn parse_matchers_propagates_first_error() {
        assert!(parse_matchers("team=infra, broken").is_err());
    }

    #[test]
    fn display_roundtrip_through_parser() {
        let original = Matcher::new("region", MatchOperator::RegexMatch, "^us-.*").unwrap();
        let reparsed = parse_matcher(&original.to_string()).unwrap();
        assert_eq!(reparsed, original);
    }
}
