//! Randomized search for fair partitions.
//!
//! Samples random partitions that follow a planned [`SizeSequence`] and
//! keeps the one with the lowest pairing score.
//!
//! # Submodules
//!
//! - [`RandomSource`] / [`RngSource`]: injectable uniform draws and shuffle
//! - [`SearchEngine`]: single-run and multi-round search
//!
//! [`SizeSequence`]: crate::models::SizeSequence

mod engine;
mod random;

pub use engine::{Round, RoundsOutcome, SearchEngine, SearchOutcome};
pub use random::{RandomSource, RngSource};
