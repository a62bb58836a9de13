//! JSON file history store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

use super::{HistoryRecord, HistoryStore};
use crate::error::{GroupingError, GroupingResult};

/// History persisted as one JSON document on disk.
///
/// A missing, unreadable, or corrupt file loads as an empty record.
#[derive(Debug, Clone)]
pub struct JsonFileHistoryStore {
    path: PathBuf,
}

impl JsonFileHistoryStore {
    /// Creates a store backed by `path`. The file need not exist yet.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn storage_error(&self, source: std::io::Error) -> GroupingError {
        GroupingError::Storage {
            path: self.path.clone(),
            source,
        }
    }
}

impl HistoryStore for JsonFileHistoryStore {
    fn get(&self) -> HistoryRecord {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return HistoryRecord::default(),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history unreadable, starting empty");
                return HistoryRecord::default();
            }
        };
        match serde_json::from_str(&text) {
            Ok(record) => record,
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "history corrupt, starting empty");
                HistoryRecord::default()
            }
        }
    }

    fn put(&mut self, record: &HistoryRecord) -> GroupingResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| self.storage_error(e))?;
        }
        let json = serde_json::to_string_pretty(record)?;
        fs::write(&self.path, json).map_err(|e| self.storage_error(e))
    }
}
