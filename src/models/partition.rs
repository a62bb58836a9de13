//! Partition (solution) model.
//!
//! A partition places every roster member into exactly one group. Groups
//! and their members are ordered for display; neither order affects the
//! pairing score.

use serde::{Deserialize, Serialize};

use super::Entity;

/// Ordered group sizes used to slice an ordering into groups.
///
/// Invariant: `total()` equals the roster length the sequence was planned for.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SizeSequence(Vec<usize>);

impl SizeSequence {
    /// Wraps raw sizes.
    pub fn new(sizes: Vec<usize>) -> Self {
        Self(sizes)
    }

    /// Sum of all sizes.
    pub fn total(&self) -> usize {
        self.0.iter().sum()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no groups are planned.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Smallest group size, if any.
    pub fn min(&self) -> Option<usize> {
        self.0.iter().copied().min()
    }

    /// Largest group size, if any.
    pub fn max(&self) -> Option<usize> {
        self.0.iter().copied().max()
    }

    /// Difference between the largest and smallest group.
    pub fn spread(&self) -> usize {
        match (self.max(), self.min()) {
            (Some(max), Some(min)) => max - min,
            _ => 0,
        }
    }

    /// Sizes as a slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }
}

/// One group of a partition.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Group {
    /// Members in display order.
    pub members: Vec<Entity>,
}

impl Group {
    /// Creates a group from members.
    pub fn new(members: Vec<Entity>) -> Self {
        Self { members }
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Display labels of the members.
    pub fn labels(&self) -> Vec<&str> {
        self.members.iter().map(|m| m.label.as_str()).collect()
    }

    /// Every unordered pair of distinct members, in nested-loop order.
    pub fn pairs(&self) -> impl Iterator<Item = (&Entity, &Entity)> + '_ {
        self.members.iter().enumerate().flat_map(move |(i, a)| {
            self.members[i + 1..].iter().map(move |b| (a, b))
        })
    }

    /// Number of unordered pairs: `n * (n - 1) / 2`.
    pub fn pair_count(&self) -> usize {
        let n = self.len();
        n * n.saturating_sub(1) / 2
    }
}

/// A complete assignment of roster members to groups.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Partition {
    /// Groups in display order.
    pub groups: Vec<Group>,
}

impl Partition {
    /// Slices an ordering of members into consecutive groups.
    ///
    /// `sizes.total()` must equal `order.len()`; surplus members beyond the
    /// planned sizes are not placed.
    ///
    /// # Example
    /// ```
    /// use u_group::models::{Entity, Partition, SizeSequence};
    ///
    /// let order: Vec<Entity> = ["A", "B", "C"].into_iter().map(Entity::new).collect();
    /// let p = Partition::from_order(&order, &SizeSequence::new(vec![2, 1]));
    /// assert_eq!(p.groups[0].labels(), vec!["A", "B"]);
    /// assert_eq!(p.groups[1].labels(), vec!["C"]);
    /// ```
    pub fn from_order(order: &[Entity], sizes: &SizeSequence) -> Self {
        debug_assert_eq!(sizes.total(), order.len());
        let mut groups = Vec::with_capacity(sizes.len());
        let mut index = 0;
        for &size in sizes.as_slice() {
            let end = (index + size).min(order.len());
            groups.push(Group::new(order[index..end].to_vec()));
            index = end;
        }
        Self { groups }
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }

    /// Total number of placed members.
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }

    /// Group lengths in order.
    pub fn sizes(&self) -> SizeSequence {
        SizeSequence::new(self.groups.iter().map(Group::len).collect())
    }

    /// Every unordered pair placed together, across all groups.
    pub fn pairs(&self) -> impl Iterator<Item = (&Entity, &Entity)> + '_ {
        self.groups.iter().flat_map(|g| g.pairs())
    }

    /// Number of unordered pairs placed together.
    pub fn pair_count(&self) -> usize {
        self.groups.iter().map(Group::pair_count).sum()
    }

    /// Group labels, for rendering.
    pub fn labels(&self) -> Vec<Vec<&str>> {
        self.groups.iter().map(Group::labels).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entities(labels: &[&str]) -> Vec<Entity> {
        labels.iter().map(|l| Entity::new(*l)).collect()
    }

    #[test]
    fn test_size_sequence_stats() {
        let sizes = SizeSequence::new(vec![3, 2, 2]);
        assert_eq!(sizes.total(), 7);
        assert_eq!(sizes.len(), 3);
        assert_eq!(sizes.min(), Some(2));
        assert_eq!(sizes.max(), Some(3));
        assert_eq!(sizes.spread(), 1);
        assert_eq!(SizeSequence::default().spread(), 0);
    }

    #[test]
    fn test_from_order() {
        let order = entities(&["A", "B", "C", "D", "E", "F", "G"]);
        let p = Partition::from_order(&order, &SizeSequence::new(vec![3, 3, 1]));
        assert_eq!(p.group_count(), 3);
        assert_eq!(p.member_count(), 7);
        assert_eq!(p.labels(), vec![vec!["A", "B", "C"], vec!["D", "E", "F"], vec!["G"]]);
        assert_eq!(p.sizes().as_slice(), &[3, 3, 1]);
    }

    #[test]
    fn test_pairs() {
        let order = entities(&["A", "B", "C", "D"]);
        let p = Partition::from_order(&order, &SizeSequence::new(vec![3, 1]));
        let pairs: Vec<(&str, &str)> = p
            .pairs()
            .map(|(a, b)| (a.label.as_str(), b.label.as_str()))
            .collect();
        assert_eq!(pairs, vec![("A", "B"), ("A", "C"), ("B", "C")]);
        assert_eq!(p.pair_count(), 3);
    }

    #[test]
    fn test_singleton_group_has_no_pairs() {
        let g = Group::new(entities(&["A"]));
        assert_eq!(g.pair_count(), 0);
        assert_eq!(g.pairs().count(), 0);
        assert_eq!(Group::default().pair_count(), 0);
    }
}
