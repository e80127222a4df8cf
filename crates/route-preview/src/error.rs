//! Error types for the route-preview crate.

use thiserror::Error;

use route_matchers::MatcherError;

/// Errors that can occur while building policies or classifying them.
#[derive(Debug, Error)]
pub enum PreviewError {
    /// Invalid routing policy configuration.
    #[error("invalid routing policy: {reason}")]
    InvalidPolicy {
        /// The reason the policy is invalid.
        reason: String,
    },

    /// A matcher could not be evaluated.
    #[error("matcher error: {0}")]
    Matcher(#[from] MatcherError),
}

impl PreviewError {
    /// Returns true if classification failed because of a malformed
    /// regex pattern rather than a policy-shape problem.
    #[must_use]
    pub fn is_invalid_regex(&self) -> bool {
        matches!(self, Self::Matcher(err) if err.is_invalid_regex())
    }
}

/// Result type for preview operations.
pub type Result<T> = std::result::Result<T, PreviewError>;
