//! Guide Board
//!
//! The synthetic, locally constructed onboarding board. It carries the
//! reserved id 0, never round-trips to the backend, and rejects every
//! mutation (no memo add, no summarize).

use crate::app::types::{Board, Memo};

/// Reserved board id for the guide board.
pub const GUIDE_BOARD_ID: i64 = 0;

/// Title shown on the guide board screen.
pub const GUIDE_BOARD_TITLE: &str = "How to use MEMO-RE";

/// Instructional memo texts, in display order.
const GUIDE_STEPS: [&str; 4] = [
    "Welcome! This board shows you around. It is read-only, so the input below stays disabled here.",
    "Create a board from the list screen and tap it to start adding time-stamped memos.",
    "When a board fills up, press Summarize and the service condenses its memos into a short text.",
    "Add neighbors from the search row. Accepted neighbors share their boards with you in the shared section.",
];

pub fn is_guide(board_id: i64) -> bool {
    board_id == GUIDE_BOARD_ID
}

/// The guide board entry shown in the shared section.
pub fn guide_board() -> Board {
    Board {
        id: GUIDE_BOARD_ID,
        title: GUIDE_BOARD_TITLE.to_string(),
        category: "guide".to_string(),
        owner: None,
    }
}

/// The fixed ordered memo sequence for the guide board.
pub fn guide_memos() -> Vec<Memo> {
    let now = chrono::Utc::now().to_rfc3339();
    GUIDE_STEPS
        .iter()
        .enumerate()
        .map(|(i, text)| Memo {
            id: i as i64,
            board: GUIDE_BOARD_ID,
            content: (*text).to_string(),
            timestamp: now.clone(),
            is_finished: false,
            summary: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guide_board_has_reserved_id() {
        assert_eq!(guide_board().id, 0);
        assert!(is_guide(0));
        assert!(!is_guide(1));
    }

    #[test]
    fn test_guide_memos_are_ordered_and_local() {
        let memos = guide_memos();
        assert_eq!(memos.len(), GUIDE_STEPS.len());
        for (i, memo) in memos.iter().enumerate() {
            assert_eq!(memo.id, i as i64);
            assert_eq!(memo.board, GUIDE_BOARD_ID);
            assert_eq!(memo.content, GUIDE_STEPS[i]);
        }
    }
}
