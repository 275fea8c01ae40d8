//! Ordered, duplicate-permitting relation lists.
//!
//! Insertion order is significant: it is the order relations appear on the
//! wire. Lookups never fail; a missing key yields `None` or an empty list.

use crate::relation::Relation;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Vec<Relation>);

impl Metadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a relation at the end. Duplicate keys are kept.
    pub fn append(&mut self, rel: impl Into<String>, val: impl Into<String>) {
        self.push(Relation::new(rel, val));
    }

    pub fn push(&mut self, relation: Relation) {
        self.0.push(relation);
    }

    /// Overwrite the value of every relation keyed `rel`.
    ///
    /// No-op when the key is absent.
    pub fn replace(&mut self, rel: &str, val: &str) {
        for relation in self.0.iter_mut().filter(|r| r.rel == rel) {
            *relation = Relation::new(rel, val);
        }
    }

    /// All keys in insertion order, duplicates included.
    pub fn rels(&self) -> Vec<&str> {
        self.0.iter().map(|r| r.rel.as_str()).collect()
    }

    /// All values keyed `rel`, in insertion order.
    pub fn vals(&self, rel: &str) -> Vec<&str> {
        self.0
            .iter()
            .filter(|r| r.rel == rel)
            .map(|r| r.val.as_str())
            .collect()
    }

    /// First value keyed `rel`.
    pub fn get(&self, rel: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|r| r.rel == rel)
            .map(|r| r.val.as_str())
    }

    /// True when an exact `(rel, val)` pair is present.
    pub fn contains(&self, rel: &str, val: &str) -> bool {
        self.0.iter().any(|r| r.rel == rel && r.val == val)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Relation> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Relation>> for Metadata {
    fn from(relations: Vec<Relation>) -> Self {
        Self(relations)
    }
}

impl FromIterator<Relation> for Metadata {
    fn from_iter<I: IntoIterator<Item = Relation>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<Relation> for Metadata {
    fn extend<I: IntoIterator<Item = Relation>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for Metadata {
    type Item = Relation;
    type IntoIter = std::vec::IntoIter<Relation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = &'a Relation;
    type IntoIter = std::slice::Iter<'a, Relation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Metadata {
        let mut metadata = Metadata::new();
        metadata.append("A", "1");
        metadata.append("B", "2");
        metadata.append("A", "3");
        metadata
    }

    #[test]
    fn rels_preserve_order_and_duplicates() {
        assert_eq!(sample().rels(), vec!["A", "B", "A"]);
    }

    #[test]
    fn vals_collect_every_match() {
        let metadata = sample();
        assert_eq!(metadata.vals("A"), vec!["1", "3"]);
        assert!(metadata.vals("missing").is_empty());
    }

    #[test]
    fn get_returns_first_match() {
        let metadata = sample();
        assert_eq!(metadata.get("A"), Some("1"));
        assert_eq!(metadata.get("missing"), None);
    }

    #[test]
    fn replace_rewrites_all_matching_entries() {
        let mut metadata = sample();
        metadata.replace("A", "9");
        assert_eq!(metadata.vals("A"), vec!["9", "9"]);
        assert_eq!(metadata.rels(), vec!["A", "B", "A"]);
    }

    #[test]
    fn replace_missing_key_is_noop() {
        let mut metadata = sample();
        metadata.replace("C", "9");
        assert_eq!(metadata, sample());
    }

    #[test]
    fn serializes_as_plain_array() {
        let mut metadata = Metadata::new();
        metadata.append("relation1", "value");
        metadata.append("relation2", "value");
        assert_eq!(
            serde_json::to_string(&metadata).unwrap(),
            r#"[{"rel":"relation1","val":"value"},{"rel":"relation2","val":"value"}]"#
        );
    }
}
