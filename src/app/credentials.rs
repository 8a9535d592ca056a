//! Credential Store
//!
//! Persists the session (token, user id, nickname) as a JSON file under
//! the per-user data directory so the session survives restarts. All
//! reads and writes go through this store; nothing else touches the file.

use std::fs;
use std::path::PathBuf;

use crate::app::session::Session;
use crate::shared::StoreError;

const STORE_DIR: &str = "memore";
const STORE_FILE: &str = "credentials.json";

/// On-disk store for the persisted session.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl CredentialStore {
    /// Store at the platform data directory (`.../memore/credentials.json`).
    pub fn new() -> Result<Self, StoreError> {
        let dir = dirs::data_dir().ok_or(StoreError::NoDataDir)?;
        Ok(Self {
            path: dir.join(STORE_DIR).join(STORE_FILE),
        })
    }

    /// Store at an explicit path, used by tests.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the persisted session. A missing file or an empty token both
    /// mean "not logged in" and yield `Ok(None)`.
    pub fn load(&self) -> Result<Option<Session>, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let session: Session = serde_json::from_str(&raw)?;
        if session.token.is_empty() {
            return Ok(None);
        }
        Ok(Some(session))
    }

    pub fn save(&self, session: &Session) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }

    /// Forget the persisted session. Clearing an absent file succeeds.
    pub fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_store() -> (tempfile::TempDir, CredentialStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = CredentialStore::with_path(dir.path().join("credentials.json"));
        (dir, store)
    }

    fn session() -> Session {
        Session {
            token: "tok".to_string(),
            user_id: 7,
            nickname: "mina".to_string(),
        }
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let (_dir, store) = temp_store();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_load_round_trip() {
        let (_dir, store) = temp_store();
        store.save(&session()).unwrap();
        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, session());
    }

    #[test]
    fn test_clear_removes_session() {
        let (_dir, store) = temp_store();
        store.save(&session()).unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear_on_missing_file_is_ok() {
        let (_dir, store) = temp_store();
        store.clear().unwrap();
    }

    #[test]
    fn test_empty_token_loads_as_none() {
        let (_dir, store) = temp_store();
        store
            .save(&Session {
                token: String::new(),
                user_id: 7,
                nickname: "mina".to_string(),
            })
            .unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let (_dir, store) = temp_store();
        fs::create_dir_all(store.path.parent().unwrap()).unwrap();
        fs::write(&store.path, "{ not json").unwrap();
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }
}
