//! Local Reminder Map
//!
//! A locally computed `{board_id: epoch_millis}` map used to flag overdue
//! boards. Compared against wall-clock time on board-list focus and when a
//! notification payload carrying a board id arrives. This map is entirely
//! client-side and does not interact with any backend alarm facility.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use crate::shared::StoreError;

const STORE_DIR: &str = "memore";
const STORE_FILE: &str = "alarms.json";

/// Current wall-clock time in epoch milliseconds.
pub fn now_ms() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[derive(Debug)]
pub struct AlarmStore {
    path: PathBuf,
    map: HashMap<i64, i64>,
}

impl AlarmStore {
    /// Load the map from the platform data directory. A missing file is an
    /// empty map.
    pub fn load() -> Result<Self, StoreError> {
        let dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Self::load_from(dir.join(STORE_DIR).join(STORE_FILE))
    }

    pub fn load_from(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let map = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(e) => return Err(e.into()),
        };
        Ok(Self { path, map })
    }

    /// An empty, in-memory-only starting point used when loading fails;
    /// mutations still try to persist to the given path.
    pub fn empty(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            map: HashMap::new(),
        }
    }

    pub fn set(&mut self, board_id: i64, when_ms: i64) -> Result<(), StoreError> {
        self.map.insert(board_id, when_ms);
        self.persist()
    }

    pub fn clear(&mut self, board_id: i64) -> Result<(), StoreError> {
        self.map.remove(&board_id);
        self.persist()
    }

    pub fn get(&self, board_id: i64) -> Option<i64> {
        self.map.get(&board_id).copied()
    }

    /// Whether the given board's reminder is at or before `now`.
    pub fn is_due(&self, board_id: i64, now: i64) -> bool {
        self.map.get(&board_id).is_some_and(|&when| when <= now)
    }

    /// Board ids whose reminder time is at or before `now`, sorted for
    /// stable display.
    pub fn overdue(&self, now: i64) -> Vec<i64> {
        let mut due: Vec<i64> = self
            .map
            .iter()
            .filter(|(_, &when)| when <= now)
            .map(|(&board, _)| board)
            .collect();
        due.sort_unstable();
        due
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string(&self.map)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, AlarmStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = AlarmStore::load_from(dir.path().join("alarms.json")).unwrap();
        (dir, store)
    }

    #[test]
    fn test_missing_file_is_empty() {
        let (_dir, store) = temp_store();
        assert!(store.overdue(now_ms()).is_empty());
    }

    #[test]
    fn test_overdue_includes_boundary() {
        let (_dir, mut store) = temp_store();
        store.set(3, 1_000).unwrap();
        store.set(5, 2_000).unwrap();
        // an entry exactly at `now` is overdue
        assert_eq!(store.overdue(1_000), vec![3]);
        assert_eq!(store.overdue(2_500), vec![3, 5]);
        assert!(store.overdue(999).is_empty());
    }

    #[test]
    fn test_is_due_single_board() {
        let (_dir, mut store) = temp_store();
        store.set(9, 500).unwrap();
        assert!(store.is_due(9, 500));
        assert!(!store.is_due(9, 499));
        assert!(!store.is_due(4, 10_000));
    }

    #[test]
    fn test_clear_and_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("alarms.json");
        let mut store = AlarmStore::load_from(&path).unwrap();
        store.set(1, 100).unwrap();
        store.set(2, 200).unwrap();
        store.clear(1).unwrap();

        let reloaded = AlarmStore::load_from(&path).unwrap();
        assert_eq!(reloaded.get(1), None);
        assert_eq!(reloaded.get(2), Some(200));
    }
}
