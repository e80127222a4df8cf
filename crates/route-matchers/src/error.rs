//! Error types for the route-matchers crate.

use thiserror::Error;

/// Errors that can occur while parsing or evaluating matchers.
#[derive(Debug, Error)]
pub enum MatcherError {
    /// A matcher was constructed with an empty label name.
    #[error("matcher label name cannot be empty")]
    EmptyName,

    /// A textual matcher could not be parsed.
    #[error("invalid matcher syntax '{input}': {reason}")]
    InvalidSyntax {
        /// The input that failed to parse.
        input: String,
        /// The reason the input is invalid.
        reason: String,
    },

    /// A regex-operator matcher carries a pattern that does not compile.
    #[error("invalid regex '{pattern}' in matcher for label '{name}'")]
    InvalidRegex {
        /// The label name the matcher applies to.
        name: String,
        /// The pattern that failed to compile.
        pattern: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

impl MatcherError {
    /// Returns true if this error means a regex pattern failed to compile.
    ///
    /// Callers use this to distinguish "no policies matched" from
    /// "classification could not be computed".
    #[must_use]
    pub const fn is_invalid_regex(&self) -> bool {
        matches!(self, Self::InvalidRegex { .. })
    }
}

/// Result type for matcher operations.
pub type Result<T> = std::result::Result<T, MatcherError>;
