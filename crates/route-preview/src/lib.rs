//! Notification policy classification for alert routing previews.
//!
//! `route-preview` answers the question a rule editor asks while an
//! alert is being authored: given the labels this alert will carry,
//! which notification policies would it route to? Policies come from an
//! upstream configuration loader; this crate only evaluates and
//! partitions them.
//!
//! - [`RoutingPolicy`]: one node of the notification routing tree, with
//!   its label matchers and optional receiving contact point
//! - [`classify`]: splits an ordered policy list into the policies the
//!   alert's labels match and the rest, preserving input order within
//!   each bucket
//! - [`classify_lenient`]: same partition, but excludes policies whose
//!   matchers cannot be evaluated instead of failing the whole call
//!
//! # Example
//!
//! ```rust
//! use route_matchers::{LabelSet, Matcher};
//! use route_preview::{classify, RoutingPolicy};
//!
//! let labels = LabelSet::new()
//!     .with("team", "infra")
//!     .with("severity", "critical");
//!
//! let policies = vec![
//!     RoutingPolicy::builder()
//!         .matcher(Matcher::equal("team", "infra").unwrap())
//!         .receiver("infra-oncall")
//!         .build()
//!         .unwrap(),
//!     RoutingPolicy::builder()
//!         .matcher(Matcher::equal("severity", "warning").unwrap())
//!         .build()
//!         .unwrap(),
//!     // No matchers: the root-route case, matches all alert instances.
//!     RoutingPolicy::builder().build().unwrap(),
//! ];
//!
//! let result = classify(&labels, &policies).unwrap();
//! assert_eq!(result.matching.len(), 2);
//! assert_eq!(result.available.len(), 1);
//! ```
//!
//! Classification is a pure function: no I/O, no shared state, computed
//! fresh on every call. A malformed regex in a matcher surfaces as an
//! error distinct from "nothing matched", so callers can tell an empty
//! result from a failed one.

#![forbid(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/route-preview/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod error;
pub mod policy;

// Re-export main types at crate root
pub use classify::{classify, classify_lenient, Classification, SkippedPolicy};
pub use error::{PreviewError, Result};
pub use policy::{RoutingPolicy, RoutingPolicyBuilder};
