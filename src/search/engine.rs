//! Multi-start randomized search for low-repeat partitions.
//!
//! # Algorithm
//!
//! 1. Shuffle the roster uniformly and slice it by the planned sizes.
//! 2. Score the candidate against the pair history.
//! 3. Keep the first candidate reaching each new lowest score.
//! 4. Stop early once a candidate scores 0.
//!
//! Without repeat avoidance a single unscored shuffle is returned.
//!
//! This is random sampling, not an exact solver: the returned partition is
//! the best one seen within the iteration budget.
//!
//! # Complexity
//! O(iterations · N·S)

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::RandomSource;
use crate::models::{Entity, PairHistory, Partition, SizeSequence};
use crate::scoring::score;

/// Result of one search run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    /// Retained partition.
    pub partition: Partition,
    /// Its score; `None` when the partition was not scored.
    pub score: Option<u64>,
    /// Candidates scored during the run.
    pub candidates_evaluated: usize,
}

/// One round of a multi-round batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Round {
    /// Chosen partition.
    pub partition: Partition,
    /// Its score against the history in effect for this round.
    pub score: Option<u64>,
}

/// Result of a multi-round batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundsOutcome {
    /// Rounds in generation order.
    pub rounds: Vec<Round>,
    /// Input history plus every round's pairs.
    pub working_history: PairHistory,
}

/// Stateless partition search.
///
/// # Example
/// ```
/// use u_group::models::{PairHistory, Roster};
/// use u_group::planning::{plan_sizes, GroupSizePolicy};
/// use u_group::search::{RngSource, SearchEngine};
///
/// let roster = Roster::from_labels(["A", "B", "C", "D", "E"]);
/// let sizes = plan_sizes(roster.len(), 2, GroupSizePolicy::Balanced);
/// let engine = SearchEngine::new(100);
/// let mut rng = RngSource::seeded(42);
///
/// let outcome = engine.search(roster.entities(), &sizes, &PairHistory::new(), &mut rng);
/// assert_eq!(outcome.partition.member_count(), 5);
/// assert_eq!(outcome.score, Some(0));
/// assert_eq!(outcome.candidates_evaluated, 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchEngine {
    iterations: usize,
    avoid_repeats: bool,
}

impl SearchEngine {
    /// Creates an engine that avoids repeats with the given budget.
    pub fn new(iterations: usize) -> Self {
        Self {
            iterations,
            avoid_repeats: true,
        }
    }

    /// Enables or disables repeat avoidance.
    pub fn with_avoid_repeats(mut self, avoid_repeats: bool) -> Self {
        self.avoid_repeats = avoid_repeats;
        self
    }

    /// Candidate budget per run.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether candidates are scored against history.
    pub fn avoids_repeats(&self) -> bool {
        self.avoid_repeats
    }

    /// Runs one search.
    ///
    /// `sizes.total()` must equal `entities.len()`. With repeat avoidance the
    /// returned score never exceeds the first candidate's score.
    pub fn search<R: RandomSource>(
        &self,
        entities: &[Entity],
        sizes: &SizeSequence,
        history: &PairHistory,
        rng: &mut R,
    ) -> SearchOutcome {
        if !self.avoid_repeats {
            return SearchOutcome {
                partition: shuffled_partition(entities, sizes, rng),
                score: None,
                candidates_evaluated: 0,
            };
        }

        let mut best: Option<(Partition, u64)> = None;
        let mut evaluated = 0;
        let mut early_exit = false;

        for _ in 0..self.iterations {
            let candidate = shuffled_partition(entities, sizes, rng);
            let candidate_score = score(&candidate, history);
            evaluated += 1;

            // Strict improvement only: ties keep the earlier candidate.
            let improved = match &best {
                Some((_, best_score)) => candidate_score < *best_score,
                None => true,
            };
            if improved {
                best = Some((candidate, candidate_score));
                if candidate_score == 0 {
                    early_exit = true;
                    break;
                }
            }
        }

        match best {
            Some((partition, best_score)) => {
                debug!(
                    score = best_score,
                    evaluated,
                    budget = self.iterations,
                    early_exit,
                    "search finished"
                );
                SearchOutcome {
                    partition,
                    score: Some(best_score),
                    candidates_evaluated: evaluated,
                }
            }
            None => {
                debug!("empty iteration budget, falling back to an unscored shuffle");
                SearchOutcome {
                    partition: shuffled_partition(entities, sizes, rng),
                    score: None,
                    candidates_evaluated: 0,
                }
            }
        }
    }

    /// Runs `rounds` searches in sequence.
    ///
    /// Each round's pairs are added to a working copy of `history` before the
    /// next round, so later rounds avoid pairs used earlier in the batch. The
    /// caller's history is never modified.
    pub fn search_rounds<R: RandomSource>(
        &self,
        entities: &[Entity],
        sizes: &SizeSequence,
        history: &PairHistory,
        rounds: usize,
        rng: &mut R,
    ) -> RoundsOutcome {
        let mut working_history = history.clone();
        let mut results = Vec::with_capacity(rounds);

        for round in 0..rounds {
            let outcome = self.search(entities, sizes, &working_history, rng);
            debug!(round = round + 1, score = ?outcome.score, "round chosen");
            working_history.record(&outcome.partition);
            results.push(Round {
                partition: outcome.partition,
                score: outcome.score,
            });
        }

        RoundsOutcome {
            rounds: results,
            working_history,
        }
    }
}

fn shuffled_partition<R: RandomSource>(
    entities: &[Entity],
    sizes: &SizeSequence,
    rng: &mut R,
) -> Partition {
    let mut order = entities.to_vec();
    rng.shuffle(&mut order);
    Partition::from_order(&order, sizes)
}
