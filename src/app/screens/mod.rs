//! Screen State
//!
//! State structs for the two authenticated screens. Views render these
//! every frame; remote work runs on worker threads whose results come
//! back through `std::sync::mpsc` receivers polled by `apply_pending`.

pub mod board_list;
pub mod memo_board;

use std::sync::mpsc::{channel, Receiver};

use crate::app::types::Memo;

pub use board_list::BoardListState;
pub use memo_board::MemoBoardState;

/// Navigation payload for the memo board screen. `folder_id` is
/// mandatory; the rest are optimizations and flags supplied by the
/// board list.
#[derive(Debug, Clone, Default)]
pub struct MemoBoardParams {
    pub folder_id: i64,
    pub board_title: Option<String>,
    pub board_owner: Option<String>,
    pub is_guide: bool,
    /// Pre-fetched memos; a non-empty list lets the screen skip its own
    /// fetch entirely.
    pub preset_memos: Option<Vec<Memo>>,
}

/// Run `work` on a worker thread, delivering its result through the
/// returned receiver. Dropping the receiver abandons the result, which
/// is how a screen stops caring about requests it no longer wants.
pub(crate) fn spawn_worker<T, F>(work: F) -> Receiver<T>
where
    T: Send + 'static,
    F: FnOnce() -> T + Send + 'static,
{
    let (tx, rx) = channel();
    std::thread::spawn(move || {
        let _ = tx.send(work());
    });
    rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_spawn_worker_delivers_result() {
        let rx = spawn_worker(|| 41 + 1);
        let value = rx.recv_timeout(Duration::from_secs(2)).unwrap();
        assert_eq!(value, 42);
    }

    #[test]
    fn test_dropped_receiver_abandons_result() {
        let rx = spawn_worker(|| "ignored");
        drop(rx);
        // worker's send fails silently; nothing to assert beyond no panic
        std::thread::sleep(Duration::from_millis(20));
    }
}
