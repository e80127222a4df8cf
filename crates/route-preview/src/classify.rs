//! Partitioning a policy list into matching and available policies.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use route_matchers::{evaluate_all, LabelSet, MatcherError};

use crate::error::Result;
use crate::policy::RoutingPolicy;

/// The outcome of classifying a policy list against one alert's labels.
///
/// `matching` holds the policies whose matchers are all satisfied,
/// `available` the rest. Both keep the relative order of the input list,
/// and every input policy lands in exactly one of the two. The result is
/// derived fresh on every classification and never cached.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Policies the alert's labels would route to, in input order.
    pub matching: Vec<RoutingPolicy>,
    /// The remaining policies, in input order.
    pub available: Vec<RoutingPolicy>,
}

impl Classification {
    /// Returns the total number of classified policies.
    #[must_use]
    pub fn total(&self) -> usize {
        self.matching.len() + self.available.len()
    }
}

/// A policy excluded by [`classify_lenient`] because its matchers could
/// not be evaluated.
#[derive(Debug)]
pub struct SkippedPolicy {
    /// The id of the excluded policy.
    pub policy_id: String,
    /// The evaluation error that caused the exclusion.
    pub error: MatcherError,
}

/// Splits an ordered policy list into matching and available policies
/// for the given alert labels.
///
/// This is a stable partition: each policy is evaluated once, in input
/// order, and appended to `matching` or `available` without resorting.
/// Routing trees are ordered by priority and the preview must reflect
/// that order within each bucket.
///
/// The operation is a pure function: deterministic, side-effect free,
/// and safe to call concurrently.
///
/// # Errors
///
/// The first [`MatcherError`] encountered fails the whole
/// classification. Callers that would rather drop only the offending
/// policy use [`classify_lenient`]. Either way the error stays
/// distinguishable from "no policies matched".
pub fn classify(labels: &LabelSet, policies: &[RoutingPolicy]) -> Result<Classification> {
    let mut result = Classification::default();

    for policy in policies {
        if evaluate_all(labels, &policy.matchers)? {
            result.matching.push(policy.clone());
        } else {
            result.available.push(policy.clone());
        }
    }

    debug!(
        policies = policies.len(),
        matching = result.matching.len(),
        available = result.available.len(),
        "classified notification policies"
    );

    Ok(result)
}

/// Like [`classify`], but excludes policies whose matchers cannot be
/// evaluated instead of failing the whole classification.
///
/// Each excluded policy is reported back as a [`SkippedPolicy`], so the
/// caller can still surface the failure instead of presenting a
/// silently shortened list.
#[must_use]
pub fn classify_lenient(
    labels: &LabelSet,
    policies: &[RoutingPolicy],
) -> (Classification, Vec<SkippedPolicy>) {
    let mut result = Classification::default();
    let mut skipped = Vec::new();

    for policy in policies {
        match evaluate_all(labels, &policy.matchers) {
            Ok(true) => result.matching.push(policy.clone()),
            Ok(false) => result.available.push(policy.clone()),
            Err(error) => {
                warn!(
                    policy_id = %policy.id,
                    error = %error,
                    "skipping policy with unevaluable matchers"
                );
                skipped.push(SkippedPolicy {
                    policy_id: policy.id.clone(),
                    error,
                });
            }
        }
    }

    (result, skipped)
}
