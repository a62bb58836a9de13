//! Pair keys and pair co-occurrence history.
//!
//! # Key Format
//!
//! A pair key is the two entity ids sorted lexicographically and joined
//! with `||`. Ids never contain `||` (see [`EntityId`]), so keys are
//! unambiguous.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{Entity, EntityId, Partition};

/// Separator between the two ids of a pair key.
pub const PAIR_SEPARATOR: &str = "||";

/// Canonical, order-independent key for two entities.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairKey(String);

impl PairKey {
    /// Builds the key for two ids; argument order does not matter.
    ///
    /// # Example
    /// ```
    /// use u_group::models::{EntityId, PairKey};
    ///
    /// let a = EntityId::from_label("Sam");
    /// let b = EntityId::from_label("Kai");
    /// assert_eq!(PairKey::new(&a, &b), PairKey::new(&b, &a));
    /// assert_eq!(PairKey::new(&a, &b).as_str(), "Kai||Sam");
    /// ```
    pub fn new(a: &EntityId, b: &EntityId) -> Self {
        let (first, second) = if a <= b { (a, b) } else { (b, a) };
        Self(format!("{first}{PAIR_SEPARATOR}{second}"))
    }

    /// Key for two entities.
    pub fn of(a: &Entity, b: &Entity) -> Self {
        Self::new(&a.id, &b.id)
    }

    /// The key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PairKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cumulative count of how often each pair has shared a group.
///
/// Only grows, except through [`PairHistory::clear`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PairHistory {
    pairs: BTreeMap<PairKey, u64>,
}

impl PairHistory {
    /// Creates an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count for a pair key (0 when absent).
    pub fn get(&self, key: &PairKey) -> u64 {
        self.pairs.get(key).copied().unwrap_or(0)
    }

    /// Count for two entities (0 when absent).
    pub fn count(&self, a: &Entity, b: &Entity) -> u64 {
        self.get(&PairKey::of(a, b))
    }

    /// Sets the count for a pair key.
    pub fn with_count(mut self, key: PairKey, count: u64) -> Self {
        self.pairs.insert(key, count);
        self
    }

    /// Adds one occurrence for a pair key. Saturates at `u64::MAX`.
    pub fn increment(&mut self, key: PairKey) {
        let count = self.pairs.entry(key).or_insert(0);
        *count = count.saturating_add(1);
    }

    /// Adds one occurrence for every pair placed together in `partition`.
    ///
    /// Members sharing an id (exact duplicate labels) are not a pair and
    /// are skipped.
    pub fn record(&mut self, partition: &Partition) {
        for (a, b) in partition.pairs().filter(|(a, b)| a.id != b.id) {
            self.increment(PairKey::of(a, b));
        }
    }

    /// Removes every pair.
    pub fn clear(&mut self) {
        self.pairs.clear();
    }

    /// Number of distinct pairs with a recorded count.
    pub fn distinct_pairs(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pair has been recorded.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Sum of all counts, saturating at `u64::MAX`.
    pub fn total_pairings(&self) -> u64 {
        self.pairs.values().fold(0u64, |acc, &c| acc.saturating_add(c))
    }

    /// Number of co-memberships beyond each pair's first: `Σ max(count - 1, 0)`.
    pub fn repeat_count(&self) -> u64 {
        self.pairs
            .values()
            .map(|&c| c.saturating_sub(1))
            .fold(0u64, u64::saturating_add)
    }

    /// Iterates pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&PairKey, u64)> {
        self.pairs.iter().map(|(k, &c)| (k, c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SizeSequence;

    fn partition(labels: &[&str], sizes: Vec<usize>) -> Partition {
        let order: Vec<Entity> = labels.iter().map(|l| Entity::new(*l)).collect();
        Partition::from_order(&order, &SizeSequence::new(sizes))
    }

    #[test]
    fn test_pair_key_symmetric() {
        let a = Entity::new("Avery");
        let b = Entity::new("Jordan");
        assert_eq!(PairKey::of(&a, &b), PairKey::of(&b, &a));
        assert_eq!(PairKey::of(&a, &b).as_str(), "Avery||Jordan");
    }

    #[test]
    fn test_pair_key_escaped_ids_do_not_collide() {
        // Without escaping both would read "a||b||c".
        let k1 = PairKey::of(&Entity::new("a"), &Entity::new("b||c"));
        let k2 = PairKey::of(&Entity::new("a||b"), &Entity::new("c"));
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_record_partition() {
        let mut history = PairHistory::new();
        let p = partition(&["A", "B", "C", "D"], vec![2, 2]);
        history.record(&p);
        history.record(&p);

        let a = Entity::new("A");
        let b = Entity::new("B");
        let c = Entity::new("C");
        assert_eq!(history.count(&a, &b), 2);
        assert_eq!(history.count(&b, &a), 2);
        assert_eq!(history.count(&a, &c), 0);
        assert_eq!(history.distinct_pairs(), 2);
        assert_eq!(history.total_pairings(), 4);
        assert_eq!(history.repeat_count(), 2);
    }

    #[test]
    fn test_clear() {
        let mut history = PairHistory::new();
        history.record(&partition(&["A", "B"], vec![2]));
        assert!(!history.is_empty());
        history.clear();
        assert!(history.is_empty());
        assert_eq!(history.total_pairings(), 0);
    }

    #[test]
    fn test_counts_saturate() {
        let a = Entity::new("A");
        let b = Entity::new("B");
        let c = Entity::new("C");
        let d = Entity::new("D");
        let mut history: PairHistory =
            serde_json::from_str(r#"{"A||B":18446744073709551615,"C||D":1}"#).unwrap();
        assert_eq!(history.count(&a, &b), u64::MAX);

        history.record(&partition(&["A", "B", "C", "D"], vec![2, 2]));
        assert_eq!(history.count(&a, &b), u64::MAX);
        assert_eq!(history.count(&c, &d), 2);
        assert_eq!(history.total_pairings(), u64::MAX);
        assert_eq!(history.repeat_count(), u64::MAX);
    }

    #[test]
    fn test_record_skips_same_id_members() {
        let mut history = PairHistory::new();
        history.record(&partition(&["Sam", "Sam", "Kai"], vec![3]));
        assert_eq!(history.get(&PairKey::of(&Entity::new("Sam"), &Entity::new("Sam"))), 0);
        assert_eq!(history.count(&Entity::new("Sam"), &Entity::new("Kai")), 2);
        assert_eq!(history.distinct_pairs(), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let history = PairHistory::new()
            .with_count(PairKey::of(&Entity::new("B"), &Entity::new("A")), 3);
        let json = serde_json::to_string(&history).unwrap();
        assert_eq!(json, r#"{"A||B":3}"#);

        let back: PairHistory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, history);
    }
}
