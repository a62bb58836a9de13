//! Pairing cost of a partition.
//!
//! The cost of a partition is the sum, over every pair placed in the same
//! group, of how often that pair has already shared a group:
//!
//! ```text
//! score(P, H) = Σ_{g ∈ P} Σ_{a<b ∈ g} H[pairKey(a, b)]
//! ```
//!
//! Pure and symmetric under reordering of groups or members.
//!
//! # Complexity
//! O(N·S) for N members in groups of size about S.

use crate::models::{PairHistory, Partition};

/// Sums historical co-occurrence counts over every pair in `partition`.
///
/// Saturates at `u64::MAX`; members sharing an id are not counted as a pair.
///
/// # Example
/// ```
/// use u_group::models::{Entity, PairHistory, PairKey, Partition, SizeSequence};
/// use u_group::scoring::score;
///
/// let order: Vec<Entity> = ["A", "B", "C", "D"].into_iter().map(Entity::new).collect();
/// let p = Partition::from_order(&order, &SizeSequence::new(vec![2, 2]));
/// let history = PairHistory::new().with_count(PairKey::of(&order[0], &order[1]), 5);
/// assert_eq!(score(&p, &history), 5);
/// assert_eq!(score(&p, &PairHistory::new()), 0);
/// ```
pub fn score(partition: &Partition, history: &PairHistory) -> u64 {
    if history.is_empty() {
        return 0;
    }
    partition
        .pairs()
        .filter(|(a, b)| a.id != b.id)
        .map(|(a, b)| history.count(a, b))
        .fold(0u64, u64::saturating_add)
}

/// Number of pairs `partition` would add to a history if saved.
pub fn pair_count(partition: &Partition) -> u64 {
    partition.pairs().filter(|(a, b)| a.id != b.id).count() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, Group, PairKey, SizeSequence};

    fn entities(labels: &[&str]) -> Vec<Entity> {
        labels.iter().map(|l| Entity::new(*l)).collect()
    }

    fn sample_history() -> PairHistory {
        let e = entities(&["A", "B", "C", "D", "E"]);
        PairHistory::new()
            .with_count(PairKey::of(&e[0], &e[1]), 2)
            .with_count(PairKey::of(&e[0], &e[2]), 1)
            .with_count(PairKey::of(&e[3], &e[4]), 4)
    }

    #[test]
    fn test_empty_history_scores_zero() {
        let order = entities(&["A", "B", "C", "D", "E"]);
        let p = Partition::from_order(&order, &SizeSequence::new(vec![3, 2]));
        assert_eq!(score(&p, &PairHistory::new()), 0);
    }

    #[test]
    fn test_sums_pairs_within_groups() {
        let order = entities(&["A", "B", "C", "D", "E"]);
        let p = Partition::from_order(&order, &SizeSequence::new(vec![3, 2]));
        // A-B 2, A-C 1, B-C 0, D-E 4
        assert_eq!(score(&p, &sample_history()), 7);
    }

    #[test]
    fn test_cross_group_pairs_ignored() {
        let order = entities(&["A", "D", "B", "E", "C"]);
        let p = Partition::from_order(&order, &SizeSequence::new(vec![2, 2, 1]));
        assert_eq!(score(&p, &sample_history()), 0);
    }

    #[test]
    fn test_invariant_under_reordering() {
        let history = sample_history();
        let e = entities(&["A", "B", "C", "D", "E"]);
        let p1 = Partition {
            groups: vec![
                Group::new(vec![e[0].clone(), e[1].clone(), e[2].clone()]),
                Group::new(vec![e[3].clone(), e[4].clone()]),
            ],
        };
        let p2 = Partition {
            groups: vec![
                Group::new(vec![e[4].clone(), e[3].clone()]),
                Group::new(vec![e[2].clone(), e[0].clone(), e[1].clone()]),
            ],
        };
        assert_eq!(score(&p1, &history), score(&p2, &history));
    }

    #[test]
    fn test_huge_counts_saturate() {
        let history: PairHistory =
            serde_json::from_str(r#"{"A||B":18446744073709551615,"C||D":1}"#).unwrap();
        let order = entities(&["A", "B", "C", "D"]);
        let p = Partition::from_order(&order, &SizeSequence::new(vec![2, 2]));
        assert_eq!(score(&p, &history), u64::MAX);
    }

    #[test]
    fn test_saved_partition_rescores_to_pair_count() {
        let order = entities(&["A", "B", "C", "D", "E", "F", "G"]);
        let p = Partition::from_order(&order, &SizeSequence::new(vec![3, 2, 2]));
        let mut history = PairHistory::new();
        history.record(&p);
        assert_eq!(score(&p, &history), pair_count(&p));
        assert_eq!(pair_count(&p), 5);
    }
}
