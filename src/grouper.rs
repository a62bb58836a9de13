//! Validate → plan → search pipeline.
//!
//! # Algorithm
//!
//! 1. Validate the roster and configuration; decline on any problem.
//! 2. Plan group sizes from the roster length and policy.
//! 3. Run one search per round, folding each round into a working history.
//!
//! The caller's history is read once and never modified; saving is a
//! separate, explicit step through a [`HistoryStore`](crate::history::HistoryStore).

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::{GroupingConfig, ValidationLimits};
use crate::error::GroupingResult;
use crate::models::{PairHistory, Partition, Roster, SizeSequence};
use crate::planning::plan_sizes;
use crate::search::{RandomSource, Round, SearchEngine};
use crate::validation::validate_request;

/// Output of one generate action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generation {
    /// Planned group sizes shared by every round.
    pub sizes: SizeSequence,
    /// Generated rounds (one unless `rounds > 1`).
    pub rounds: Vec<Round>,
    /// Input history plus the pairs of every round.
    pub working_history: PairHistory,
    /// Advisory: case-insensitively duplicated labels.
    pub duplicates: Vec<String>,
}

impl Generation {
    /// The first round's partition.
    pub fn partition(&self) -> Option<&Partition> {
        self.rounds.first().map(|r| &r.partition)
    }

    /// The first round's score.
    pub fn score(&self) -> Option<u64> {
        self.rounds.first().and_then(|r| r.score)
    }
}

/// Grouping front door.
///
/// # Example
///
/// ```
/// use u_group::{GroupingConfig, Grouper};
/// use u_group::models::{PairHistory, Roster};
/// use u_group::search::RngSource;
///
/// let roster = Roster::from_labels(["Avery", "Jordan", "Sam", "Kai", "Riley", "Morgan", "Quinn"]);
/// let grouper = Grouper::new(GroupingConfig::default().with_group_size(3));
/// let mut rng = RngSource::seeded(42);
///
/// let generation = grouper.generate(&roster, &PairHistory::new(), &mut rng).unwrap();
/// assert_eq!(generation.sizes.as_slice(), &[3, 2, 2]);
/// assert_eq!(generation.score(), Some(0));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Grouper {
    config: GroupingConfig,
    limits: ValidationLimits,
}

impl Grouper {
    /// Creates a grouper with default validation limits.
    pub fn new(config: GroupingConfig) -> Self {
        Self {
            config,
            limits: ValidationLimits::default(),
        }
    }

    /// Sets validation limits.
    pub fn with_limits(mut self, limits: ValidationLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Active configuration.
    pub fn config(&self) -> &GroupingConfig {
        &self.config
    }

    /// Generates one or more rounds of groups.
    ///
    /// # Errors
    /// [`GroupingError::Validation`](crate::GroupingError::Validation) when the
    /// request is declined; nothing is generated in that case.
    pub fn generate<R: RandomSource>(
        &self,
        roster: &Roster,
        history: &PairHistory,
        rng: &mut R,
    ) -> GroupingResult<Generation> {
        validate_request(roster, &self.config, &self.limits)?;

        let sizes = plan_sizes(roster.len(), self.config.group_size, self.config.policy());
        let engine = SearchEngine::new(self.config.iterations)
            .with_avoid_repeats(self.config.avoid_repeats);
        let outcome = engine.search_rounds(
            roster.entities(),
            &sizes,
            history,
            self.config.rounds,
            rng,
        );

        info!(
            members = roster.len(),
            groups = sizes.len(),
            rounds = outcome.rounds.len(),
            avoid_repeats = self.config.avoid_repeats,
            "groups generated"
        );

        Ok(Generation {
            sizes,
            rounds: outcome.rounds,
            working_history: outcome.working_history,
            duplicates: roster.duplicates().into_iter().map(String::from).collect(),
        })
    }
}
