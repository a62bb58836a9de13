//! Fair grouping engine for the U-Engine ecosystem.
//!
//! Partitions a roster into groups of a target size and, optionally,
//! searches for a partition that repeats as few past pairings as possible.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Entity`, `Roster`, `Group`, `Partition`,
//!   `SizeSequence`, `PairKey`, `PairHistory`
//! - **`planning`**: Group size policies (exact, balanced)
//! - **`scoring`**: Pairwise repeat cost of a partition
//! - **`search`**: Multi-start randomized search with an injectable random source
//! - **`history`**: Load/persist contract for pair history (memory, JSON file)
//! - **`validation`**: Request checks (roster size, group size, budget, duplicates)
//! - **`report`**: Plain-text export and summary metrics
//!
//! # Architecture
//!
//! The engine is stateless between calls. History is passed in as a
//! snapshot and only changes through an explicit `HistoryStore::save` or
//! `HistoryStore::clear`.
//!
//! The search is a best-effort heuristic: it returns the best partition
//! among the sampled candidates, not a proven optimum.

pub mod config;
pub mod error;
mod grouper;
pub mod history;
pub mod models;
pub mod planning;
pub mod report;
pub mod scoring;
pub mod search;
pub mod validation;

pub use config::{GroupingConfig, ValidationLimits};
pub use error::{GroupingError, GroupingResult};
pub use grouper::{Generation, Grouper};
