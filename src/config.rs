//! Grouping configuration.
//!
//! All options are validated by [`crate::validation::validate_request`]
//! before a search runs.
//!
//! # JSON Shape
//!
//! ```json
//! { "groupSize": 4, "iterations": 200, "balance": true, "avoidRepeats": true, "rounds": 1 }
//! ```
//!
//! Missing fields take their defaults.

use serde::{Deserialize, Serialize};

use crate::error::GroupingResult;
use crate::planning::GroupSizePolicy;

/// Default minimum search budget accepted by validation.
pub const DEFAULT_MIN_ITERATIONS: usize = 50;

/// Options for one generate action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GroupingConfig {
    /// Target members per group (≥ 2).
    pub group_size: usize,
    /// Candidates sampled per round.
    pub iterations: usize,
    /// Balanced (`true`) or exact (`false`) group sizes.
    pub balance: bool,
    /// Score candidates against pair history.
    pub avoid_repeats: bool,
    /// Rounds generated in one batch (≥ 1).
    pub rounds: usize,
}

impl Default for GroupingConfig {
    fn default() -> Self {
        Self {
            group_size: 4,
            iterations: 200,
            balance: true,
            avoid_repeats: true,
            rounds: 1,
        }
    }
}

impl GroupingConfig {
    /// Creates the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a JSON document; absent fields take defaults.
    pub fn from_json_str(json: &str) -> GroupingResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Sets the target group size.
    pub fn with_group_size(mut self, group_size: usize) -> Self {
        self.group_size = group_size;
        self
    }

    /// Sets the per-round search budget.
    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    /// Chooses balanced or exact sizing.
    pub fn with_balance(mut self, balance: bool) -> Self {
        self.balance = balance;
        self
    }

    /// Enables or disables repeat avoidance.
    pub fn with_avoid_repeats(mut self, avoid_repeats: bool) -> Self {
        self.avoid_repeats = avoid_repeats;
        self
    }

    /// Sets the number of rounds.
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    /// Size policy implied by `balance`.
    pub fn policy(&self) -> GroupSizePolicy {
        GroupSizePolicy::from_balance(self.balance)
    }
}

/// Caller-side limits enforced by validation, not by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ValidationLimits {
    /// Smallest accepted `iterations`.
    pub min_iterations: usize,
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            min_iterations: DEFAULT_MIN_ITERATIONS,
        }
    }
}

impl ValidationLimits {
    /// Sets the iteration floor.
    pub fn with_min_iterations(mut self, min_iterations: usize) -> Self {
        self.min_iterations = min_iterations;
        self
    }
}
