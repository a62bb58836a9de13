//! Persisted pair history.
//!
//! The engine only reads a [`PairHistory`] snapshot; stores own loading and
//! persisting it. Corrupt or unavailable stored history loads as empty
//! instead of failing, so generation never blocks on storage.
//!
//! # Persisted Shape
//!
//! ```json
//! { "pairs": { "Avery||Jordan": 2 }, "sessions": 3, "updatedAt": "2024-05-01T10:00:00Z" }
//! ```

mod file;
mod memory;

pub use file::JsonFileHistoryStore;
pub use memory::MemoryHistoryStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::GroupingResult;
use crate::models::{PairHistory, Partition};

/// Stored history: pair counts plus session metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    /// Pair co-occurrence counts.
    pub pairs: PairHistory,
    /// Number of saved sessions.
    #[serde(default)]
    pub sessions: u64,
    /// Time of the last save.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl HistoryRecord {
    /// Folds a partition in as one saved session at `at`.
    pub fn record_session(&mut self, partition: &Partition, at: DateTime<Utc>) {
        self.pairs.record(partition);
        self.sessions = self.sessions.saturating_add(1);
        self.updated_at = Some(at);
    }
}

/// Load/persist contract for pair history.
///
/// Implementors provide [`get`](HistoryStore::get) and
/// [`put`](HistoryStore::put); `save` and `clear` are built on them.
pub trait HistoryStore {
    /// Current record. Returns the empty default when nothing usable is stored.
    fn get(&self) -> HistoryRecord;

    /// Replaces the stored record.
    fn put(&mut self, record: &HistoryRecord) -> GroupingResult<()>;

    /// Adds one to every pair in `partition`, bumps the session counter, and
    /// stamps the current time. Returns the stored record.
    fn save(&mut self, partition: &Partition) -> GroupingResult<HistoryRecord> {
        let mut record = self.get();
        record.record_session(partition, Utc::now());
        self.put(&record)?;
        tracing::info!(
            sessions = record.sessions,
            pairs = record.pairs.distinct_pairs(),
            "history saved"
        );
        Ok(record)
    }

    /// Resets pairs and the session counter.
    fn clear(&mut self) -> GroupingResult<()> {
        self.put(&HistoryRecord::default())?;
        tracing::info!("history cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Entity, SizeSequence};
    use chrono::TimeZone;

    #[test]
    fn test_record_session() {
        let order: Vec<Entity> = ["A", "B", "C"].into_iter().map(Entity::new).collect();
        let p = Partition::from_order(&order, &SizeSequence::new(vec![2, 1]));
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap();

        let mut record = HistoryRecord::default();
        record.record_session(&p, at);
        assert_eq!(record.sessions, 1);
        assert_eq!(record.updated_at, Some(at));
        assert_eq!(record.pairs.count(&order[0], &order[1]), 1);
    }

    #[test]
    fn test_serialized_shape() {
        let order: Vec<Entity> = ["Jordan", "Avery"].into_iter().map(Entity::new).collect();
        let p = Partition::from_order(&order, &SizeSequence::new(vec![2]));
        let mut record = HistoryRecord::default();
        record.record_session(&p, Utc.with_ymd_and_hms(2024, 5, 1, 10, 0, 0).unwrap());

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["pairs"]["Avery||Jordan"], 1);
        assert_eq!(value["sessions"], 1);
        assert_eq!(value["updatedAt"], "2024-05-01T10:00:00Z");
    }

    #[test]
    fn test_empty_record_shape() {
        let value = serde_json::to_value(HistoryRecord::default()).unwrap();
        assert_eq!(value, serde_json::json!({"pairs": {}, "sessions": 0, "updatedAt": null}));
    }

    #[test]
    fn test_missing_metadata_defaults() {
        let record: HistoryRecord = serde_json::from_str(r#"{"pairs": {"A||B": 2}}"#).unwrap();
        assert_eq!(record.sessions, 0);
        assert_eq!(record.updated_at, None);
        assert_eq!(record.pairs.total_pairings(), 2);
    }
}
