//! Grouping domain models.
//!
//! Provides the data types for grouping problems and their solutions.
//!
//! # Domain Mappings
//!
//! | u-group | Classroom | Team rotation | Meetups |
//! |---------|-----------|---------------|---------|
//! | Entity | Student | Engineer | Attendee |
//! | Group | Study group | Pairing squad | Table |
//! | Partition | Seating plan | Sprint rotation | Round |
//! | PairHistory | Past groupings | Past pairings | Past tables |

mod entity;
mod pair;
mod partition;
mod roster;

pub use entity::{Entity, EntityId};
pub use pair::{PairHistory, PairKey, PAIR_SEPARATOR};
pub use partition::{Group, Partition, SizeSequence};
pub use roster::{Roster, RosterFormat};
