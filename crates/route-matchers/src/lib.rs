//! Alertmanager-style label matchers for notification routing.
//!
//! `route-matchers` provides the label model and matcher engine used to
//! decide which notification policies an alert's labels would route to:
//!
//! - **Labels**: a [`LabelSet`] maps label names to values for one alert
//!   instance
//! - **Matchers**: a [`Matcher`] is a single `(name, operator, value)`
//!   predicate with equality, inequality, regex, and negated-regex
//!   operators
//! - **Parsing**: matchers parse from the textual Alertmanager form
//!   (`severity=critical`, `region=~"^us-.*"`)
//! - **Evaluation**: [`evaluate_matcher`] and [`evaluate_all`] decide
//!   satisfaction against a label set
//!
//! # Example
//!
//! ```rust
//! use route_matchers::{evaluate_all, LabelSet, MatchOperator, Matcher};
//!
//! let labels: LabelSet = [("severity", "critical"), ("team", "infra")]
//!     .into_iter()
//!     .map(|(k, v)| (k.to_string(), v.to_string()))
//!     .collect();
//!
//! let matchers = vec![
//!     Matcher::new("severity", MatchOperator::Equal, "critical").unwrap(),
//!     Matcher::new("team", MatchOperator::RegexMatch, "^inf").unwrap(),
//! ];
//!
//! assert!(evaluate_all(&labels, &matchers).unwrap());
//!
//! // The empty matcher list matches every alert instance.
//! assert!(evaluate_all(&labels, &[]).unwrap());
//! ```
//!
//! Matcher values are opaque strings; a label absent from the set
//! compares as the empty string, so `team=""` matches an alert that has
//! no `team` label at all.

#![forbid(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/route-matchers/0.1.0")]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod labels;
pub mod matcher;
pub mod parse;

// Re-export main types at crate root
pub use error::{MatcherError, Result};
pub use labels::LabelSet;
pub use matcher::{evaluate_all, evaluate_matcher, MatchOperator, Matcher};
pub use parse::{parse_matcher, parse_matchers};
