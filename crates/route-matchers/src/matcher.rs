//! Label matchers and their evaluation against a label set.
//!
//! A [`Matcher`] is a single `(name, operator, value)` predicate against
//! one alert label. [`evaluate_matcher`] decides one predicate;
//! [`evaluate_all`] is the conjunction over a policy's matcher list,
//! where the empty list matches every alert instance.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{MatcherError, Result};
use crate::labels::LabelSet;

/// The operator of a label matcher.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MatchOperator {
    /// Exact, case-sensitive equality (=).
    #[default]
    #[serde(rename = "=")]
    Equal,
    /// Exact inequality (!=).
    #[serde(rename = "!=")]
    NotEqual,
    /// Unanchored regex match (=~).
    #[serde(rename = "=~")]
    RegexMatch,
    /// Negated unanchored regex match (!~).
    #[serde(rename = "!~")]
    RegexNotMatch,
}

impl MatchOperator {
    /// Returns the operator as its Alertmanager symbol.
    #[must_use]
    pub const fn as_symbol(&self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::NotEqual => "!=",
            Self::RegexMatch => "=~",
            Self::RegexNotMatch => "!~",
        }
    }

    /// Returns true if this operator interprets the matcher value as a
    /// regular expression.
    #[must_use]
    pub const fn is_regex(&self) -> bool {
        matches!(self, Self::RegexMatch | Self::RegexNotMatch)
    }
}

impl fmt::Display for MatchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_symbol())
    }
}

impl FromStr for MatchOperator {
    type Err = MatcherError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "=" => Ok(Self::Equal),
            "!=" => Ok(Self::NotEqual),
            "=~" => Ok(Self::RegexMatch),
            "!~" => Ok(Self::RegexNotMatch),
            other => Err(MatcherError::InvalidSyntax {
                input: other.to_string(),
                reason: "unknown matcher operator".to_string(),
            }),
        }
    }
}

/// A single label matcher: one predicate against one alert label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Matcher {
    /// The label name the matcher applies to.
    pub name: String,
    /// The match operator.
    pub op: MatchOperator,
    /// The value or pattern to match against. May be empty: an
    /// empty-string equality matcher matches only an absent-or-empty
    /// label.
    pub value: String,
}

impl Matcher {
    /// Creates a new matcher.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::EmptyName`] if the label name is empty.
    /// The value is not validated here: regex patterns are compiled at
    /// evaluation time so a malformed pattern surfaces where it is used.
    pub fn new(
        name: impl Into<String>,
        op: MatchOperator,
        value: impl Into<String>,
    ) -> Result<Self> {
        let name = name.into();
        if name.is_empty() {
            return Err(MatcherError::EmptyName);
        }

        Ok(Self {
            name,
            op,
            value: value.into(),
        })
    }

    /// Creates an exact-equality matcher.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::EmptyName`] if the label name is empty.
    pub fn equal(name: impl Into<String>, value: impl Into<String>) -> Result<Self> {
        Self::new(name, MatchOperator::Equal, value)
    }

    /// Evaluates this matcher against a label set.
    ///
    /// See [`evaluate_matcher`].
    pub fn matches(&self, labels: &LabelSet) -> Result<bool> {
        evaluate_matcher(labels, self)
    }
}

impl fmt::Display for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}\"{}\"", self.name, self.op, self.value)
    }
}

/// Decides whether a single matcher is satisfied by a label set.
///
/// A label absent from the set compares as the empty string; absence is
/// never an error. Equality operators compare byte-exact and
/// case-sensitive. Regex operators perform an unanchored substring
/// search: the matcher is satisfied when the label value contains a
/// match anywhere, not only when the pattern spans the whole value.
///
/// # Errors
///
/// Returns [`MatcherError::InvalidRegex`] when a regex-operator matcher
/// carries a pattern that does not compile. A malformed pattern is a
/// distinct, inspectable failure, never a silent non-match.
pub fn evaluate_matcher(labels: &LabelSet, matcher: &Matcher) -> Result<bool> {
    let label_value = labels.get_or_empty(&matcher.name);

    match matcher.op {
        MatchOperator::Equal => Ok(label_value == matcher.value),
        MatchOperator::NotEqual => Ok(label_value != matcher.value),
        MatchOperator::RegexMatch => Ok(compile_pattern(matcher)?.is_match(label_value)),
        MatchOperator::RegexNotMatch => Ok(!compile_pattern(matcher)?.is_match(label_value)),
    }
}

/// Decides whether every matcher in a list is satisfied by a label set.
///
/// The empty matcher list is satisfied unconditionally: a policy with no
/// matchers is the root-route case and matches all alert instances. This
/// is a deliberate rule, not a loop artifact, and is tested as such.
///
/// Evaluation short-circuits on the first unsatisfied matcher; since
/// matchers are independent predicates the order of evaluation does not
/// affect the result.
///
/// # Errors
///
/// Propagates the first [`MatcherError::InvalidRegex`] encountered.
pub fn evaluate_all(labels: &LabelSet, matchers: &[Matcher]) -> Result<bool> {
    if matchers.is_empty() {
        return Ok(true);
    }

    for matcher in matchers {
        if !evaluate_matcher(labels, matcher)? {
            return Ok(false);
        }
    }

    Ok(true)
}

fn compile_pattern(matcher: &Matcher) -> Result<Regex> {
    Regex::new(&matcher.value).map_err(|source| MatcherError::InvalidRegex {
        name: matcher.name.clone(),
        pattern: matcher.value.clone(),
        source,
    })
}
