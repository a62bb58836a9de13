//! Plain-text export and summary metrics.
//!
//! # Text Format
//!
//! ```text
//! Group 1: Avery, Jordan
//! Group 2: Sam, Kai, Riley
//! ```
//!
//! Multi-round output prefixes each round with `Round <n>` and separates
//! rounds with a blank line.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Group count | Groups per round (from the first round) |
//! | Smallest group | Smallest group across all rounds |
//! | Total score | Sum of round scores that were computed |
//! | Repeat count | Σ max(count − 1, 0) over the working history |

use crate::models::{PairHistory, Partition};
use crate::search::Round;

/// Renders a partition as `Group <n>: a, b, ...` lines.
///
/// # Example
/// ```
/// use u_group::models::{Entity, Partition, SizeSequence};
/// use u_group::report::render_partition;
///
/// let order: Vec<Entity> = ["A", "B", "C"].into_iter().map(Entity::new).collect();
/// let p = Partition::from_order(&order, &SizeSequence::new(vec![2, 1]));
/// assert_eq!(render_partition(&p), "Group 1: A, B\nGroup 2: C");
/// ```
pub fn render_partition(partition: &Partition) -> String {
    partition
        .groups
        .iter()
        .enumerate()
        .map(|(i, g)| format!("Group {}: {}", i + 1, g.labels().join(", ")))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders rounds, each headed by `Round <n>`, separated by blank lines.
pub fn render_rounds(rounds: &[Round]) -> String {
    rounds
        .iter()
        .enumerate()
        .map(|(i, round)| format!("Round {}\n{}", i + 1, render_partition(&round.partition)))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Summary of a generate action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupingStats {
    /// Groups per round.
    pub group_count: usize,
    /// Smallest group seen in any round. `None` when there are no groups.
    pub min_group_size: Option<usize>,
    /// Sum of the computed round scores.
    pub total_score: u64,
    /// Repeated co-memberships in the working history.
    pub repeat_count: u64,
}

impl GroupingStats {
    /// Computes the summary from rounds and the history they were folded into.
    pub fn calculate(rounds: &[Round], working_history: &PairHistory) -> Self {
        let group_count = rounds.first().map_or(0, |r| r.partition.group_count());
        let min_group_size = rounds
            .iter()
            .flat_map(|r| r.partition.groups.iter().map(|g| g.len()))
            .min();
        let total_score = rounds.iter().filter_map(|r| r.score).sum();

        Self {
            group_count,
            min_group_size,
            total_score,
            repeat_count: working_history.repeat_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, SizeSequence};

    fn partition(labels: &[&str], sizes: Vec<usize>) -> Partition {
        let order: Vec<Entity> = labels.iter().map(|l| Entity::new(*l)).collect();
        Partition::from_order(&order, &SizeSequence::new(sizes))
    }

    #[test]
    fn test_render_partition() {
        let p = partition(&["Avery", "Jordan", "Sam", "Kai", "Riley"], vec![2, 3]);
        assert_eq!(
            render_partition(&p),
            "Group 1: Avery, Jordan\nGroup 2: Sam, Kai, Riley"
        );
    }

    #[test]
    fn test_render_rounds() {
        let rounds = vec![
            Round {
                partition: partition(&["A", "B", "C", "D"], vec![2, 2]),
                score: Some(0),
            },
            Round {
                partition: partition(&["A", "C", "B", "D"], vec![2, 2]),
                score: Some(0),
            },
        ];
        assert_eq!(
            render_rounds(&rounds),
            "Round 1\nGroup 1: A, B\nGroup 2: C, D\n\nRound 2\nGroup 1: A, C\nGroup 2: B, D"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render_partition(&Partition::default()), "");
        assert_eq!(render_rounds(&[]), "");
    }

    #[test]
    fn test_stats() {
        let p1 = partition(&["A", "B", "C", "D", "E"], vec![3, 2]);
        let p2 = partition(&["A", "B", "D", "C", "E"], vec![3, 2]);
        let mut history = PairHistory::new();
        history.record(&p1);
        history.record(&p2);
        let rounds = vec![
            Round { partition: p1, score: Some(0) },
            Round { partition: p2, score: Some(1) },
        ];

        let stats = GroupingStats::calculate(&rounds, &history);
        assert_eq!(stats.group_count, 2);
        assert_eq!(stats.min_group_size, Some(2));
        assert_eq!(stats.total_score, 1);
        // Only A-B is shared between the two rounds.
        assert_eq!(stats.repeat_count, 1);
    }

    #[test]
    fn test_stats_empty() {
        let stats = GroupingStats::calculate(&[], &PairHistory::new());
        assert_eq!(stats.group_count, 0);
        assert_eq!(stats.min_group_size, None);
        assert_eq!(stats.total_score, 0);
        assert_eq!(stats.repeat_count, 0);
    }
}
