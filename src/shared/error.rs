//! Shared Error Types
//!
//! Failures from the local persistence layer (credential store, alarm
//! store). API-call failures are user-presentable strings and never pass
//! through here.

use thiserror::Error;

/// Errors raised by the on-disk stores.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the store file failed
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The store file exists but does not parse
    #[error("corrupt store file: {0}")]
    Corrupt(#[from] serde_json::Error),

    /// No per-user data directory is available on this platform
    #[error("no data directory available")]
    NoDataDir,
}
