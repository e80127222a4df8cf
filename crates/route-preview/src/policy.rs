//! Notification routing policies.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use route_matchers::{LabelSet, Matcher};

use crate::error::{PreviewError, Result};

/// Fallback shown for a policy that has no contact point of its own.
const NO_RECEIVER_LABEL: &str = "-";

/// One node of a notification routing tree.
///
/// A policy carries zero or more label matchers and an optional
/// receiving contact point. Policies are immutable inputs: they are
/// produced by an upstream configuration loader and never mutated here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutingPolicy {
    /// Unique identifier for the policy, stable across classifications.
    pub id: String,
    /// The label matchers an alert must satisfy to route here. An empty
    /// list matches all alert instances (the root-route case).
    pub matchers: Vec<Matcher>,
    /// The receiving contact point, if the policy has one.
    pub receiver: Option<String>,
}

impl RoutingPolicy {
    /// Creates a new policy builder.
    #[must_use]
    pub fn builder() -> RoutingPolicyBuilder {
        RoutingPolicyBuilder::new()
    }

    /// Returns true if this policy matches all alert instances.
    ///
    /// This is an explicit check on the matcher list being empty. It
    /// coincides with [`route_matchers::evaluate_all`] returning true
    /// for an empty list, but the two are independent facts: this one
    /// drives the "Matches all alert instances" display fallback.
    #[must_use]
    pub fn matches_all_alerts(&self) -> bool {
        self.matchers.is_empty()
    }

    /// Returns whether the given labels satisfy every matcher of this
    /// policy.
    ///
    /// # Errors
    ///
    /// Propagates a [`route_matchers::MatcherError`] from a matcher
    /// whose regex pattern does not compile.
    pub fn matches(&self, labels: &LabelSet) -> Result<bool> {
        Ok(route_matchers::evaluate_all(labels, &self.matchers)?)
    }

    /// Returns the receiver for display, `"-"` when the policy has none.
    #[must_use]
    pub fn receiver_label(&self) -> &str {
        self.receiver.as_deref().unwrap_or(NO_RECEIVER_LABEL)
    }
}

impl fmt::Display for RoutingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.matches_all_alerts() {
            write!(f, "<all alerts> -> {}", self.receiver_label())
        } else {
            let matchers: Vec<String> = self.matchers.iter().map(ToString::to_string).collect();
            write!(f, "{} -> {}", matchers.join(", "), self.receiver_label())
        }
    }
}

/// Builder for creating [`RoutingPolicy`] instances.
#[derive(Debug, Default)]
pub struct RoutingPolicyBuilder {
    id: Option<String>,
    matchers: Vec<Matcher>,
    receiver: Option<String>,
}

impl RoutingPolicyBuilder {
    fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit policy id. When omitted, `build` generates one.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Adds a matcher to the policy.
    #[must_use]
    pub fn matcher(mut self, matcher: Matcher) -> Self {
        self.matchers.push(matcher);
        self
    }

    /// Adds multiple matchers to the policy.
    #[must_use]
    pub fn matchers(mut self, matchers: impl IntoIterator<Item = Matcher>) -> Self {
        self.matchers.extend(matchers);
        self
    }

    /// Sets the receiving contact point.
    #[must_use]
    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = Some(receiver.into());
        self
    }

    /// Builds the [`RoutingPolicy`].
    ///
    /// # Errors
    ///
    /// Returns `PreviewError::InvalidPolicy` if an explicit id is empty.
    pub fn build(self) -> Result<RoutingPolicy> {
        let id = match self.id {
            Some(id) if id.is_empty() => {
                return Err(PreviewError::InvalidPolicy {
                    reason: "policy id cannot be empty".to_string(),
                });
            }
            Some(id) => id,
            None => Uuid::new_v4().to_string(),
        };

        Ok(RoutingPolicy {
            id,
            matchers: self.matchers,
            receiver: self.receiver,
        })
    }
}
