//! In-memory history store.

use super::{HistoryRecord, HistoryStore};
use crate::error::GroupingResult;

/// History kept in process memory; lost when dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistoryStore {
    record: HistoryRecord,
}

impl MemoryHistoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store holding `record`.
    pub fn with_record(record: HistoryRecord) -> Self {
        Self { record }
    }
}

impl HistoryStore for MemoryHistoryStore {
    fn get(&self) -> HistoryRecord {
        self.record.clone()
    }

    fn put(&mut self, record: &HistoryRecord) -> GroupingResult<()> {
        self.record = record.clone();
        Ok(())
    }
}
