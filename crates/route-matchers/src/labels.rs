//! The label set attached to one alert instance.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// The key/value labels attached to one alert instance.
///
/// Keys are unique within a set and order is irrelevant: two label sets
/// are equal when they hold the same key/value pairs, regardless of how
/// they were built up.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelSet(HashMap<String, String>);

impl LabelSet {
    /// Creates an empty label set.
    #[must_use]
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Returns the value for a label name, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Returns the value for a label name, treating an absent label as
    /// the empty string.
    ///
    /// This is the comparison view matchers evaluate against: absence is
    /// not an error, it is simply the empty value.
    #[must_use]
    pub fn get_or_empty(&self, name: &str) -> &str {
        self.get(name).unwrap_or("")
    }

    /// Returns true if the set contains the given label name.
    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Inserts a label, replacing any previous value for the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Adds a label, builder style.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the number of labels in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the set holds no labels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the label pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl From<HashMap<String, String>> for LabelSet {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

impl From<LabelSet> for HashMap<String, String> {
    fn from(labels: LabelSet) -> Self {
        labels.0
    }
}

impl FromIterator<(String, String)> for LabelSet {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for LabelSet {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_set() {
        let labels = LabelSet::new();
        assert!(labels.is_empty());
        assert_eq!(labels.len(), 0);
        assert_eq!(labels.get("team"), None);
    }

    #[test]
    fn insert_and_get() {
        let mut labels = LabelSet::new();
        labels.insert("team", "infra");
        assert_eq!(labels.get("team"), Some("infra"));
        assert!(labels.contains_key("team"));
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn insert_replaces_previous_value() {
        let mut labels = LabelSet::new();
        labels.insert("env", "staging");
        labels.insert("env", "prod");
        assert_eq!(labels.get("env"), Some("prod"));
        assert_eq!(labels.len(), 1);
    }

    #[test]
    fn absent_label_reads_as_empty_string() {
        let labels = LabelSet::new();
        assert_eq!(labels.get_or_empty("team"), "");

        let labels = labels.with("team", "infra");
        assert_eq!(labels.get_or_empty("team"), "infra");
    }

    #[test]
    fn equality_ignores_insertion_order() {
        let a = LabelSet::new().with("team", "infra").with("env", "prod");
        let b = LabelSet::new().with("env", "prod").with("team", "infra");
        assert_eq!(a, b);
    }

    #[test]
    fn equality_is_by_pairs() {
        let a = LabelSet::new().with("team", "infra");
        let b = LabelSet::new().with("team", "platform");
        assert_ne!(a, b);
    }

    #[test]
    fn collect_from_str_pairs() {
        let labels: LabelSet = [("severity", "critical")].into_iter().collect();
        assert_eq!(labels.get("severity"), Some("critical"));
    }

    #[test]
    fn serialization_is_a_plain_map() {
        let labels = LabelSet::new().with("team", "infra");
        let json = serde_json::to_string(&labels).unwrap();
        assert_eq!(json, r#"{"team":"infra"}"#);

        let parsed: LabelSet = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, labels);
    }
}
