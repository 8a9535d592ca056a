//! Memo Board Screen
//!
//! Renders and mutates one board's memo collection. The caller may hand
//! over a pre-fetched memo list (shared boards, guide board) in which
//! case the screen skips its own fetch. Mutations against the guide
//! board, a finished board, or a neighbor's read-only board are rejected
//! client-side and never reach the network.

use std::sync::mpsc::Receiver;

use crate::app::api::ApiClient;
use crate::app::guide;
use crate::app::screens::{spawn_worker, MemoBoardParams};
use crate::app::session::Session;
use crate::app::types::{Board, Memo};

pub type LoadMemosResult = Result<Vec<Memo>, String>;
pub type LoadTitleResult = Result<Board, String>;
pub type MemoResult = Result<Memo, String>;
pub type DeleteResult = Result<(), String>;
pub type SummaryResult = Result<String, String>;

/// Contextual hint banner, keyed purely on how many memos are loaded and
/// whether a summary exists yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hint {
    /// No memos yet: point at the input.
    AddFirstMemo,
    /// Exactly one memo: encourage a second.
    KeepGoing,
    /// Two or more memos, nothing summarized yet.
    TrySummarize,
}

/// Pure function behind the progressive-disclosure banners.
pub fn hint_for(memo_count: usize, summary_present: bool) -> Option<Hint> {
    if summary_present {
        return None;
    }
    match memo_count {
        0 => Some(Hint::AddFirstMemo),
        1 => Some(Hint::KeepGoing),
        _ => Some(Hint::TrySummarize),
    }
}

pub struct MemoBoardState {
    pub folder_id: i64,
    pub board_title: String,
    /// Owning username when viewing a neighbor's board; makes the whole
    /// screen read-only.
    pub owner: Option<String>,
    pub is_guide: bool,
    /// Whether the memo collection came pre-supplied by the caller;
    /// suppresses the hint banners.
    pub from_preset: bool,

    pub memos: Vec<Memo>,
    pub new_memo: String,
    pub summary_text: Option<String>,
    /// Set once a summarization has marked this board finished; further
    /// additions are rejected.
    pub finished: bool,
    pub error: Option<String>,
    /// Memo id currently being edited plus the edit buffer.
    pub editing: Option<(i64, String)>,

    pub is_loading: bool,
    pub is_summarizing: bool,

    pub load_generation: u64,
    pub pending_memos: Option<(u64, Receiver<LoadMemosResult>)>,
    pub pending_title: Option<(u64, Receiver<LoadTitleResult>)>,
    pub pending_add: Option<Receiver<MemoResult>>,
    pub pending_edit: Option<(i64, Receiver<MemoResult>)>,
    pub pending_delete: Option<(i64, Receiver<DeleteResult>)>,
    pub pending_summary: Option<Receiver<SummaryResult>>,
}

impl MemoBoardState {
    /// Mount the screen for the given navigation payload.
    ///
    /// Guide boards install the synthetic memo sequence and never touch
    /// the network. A non-empty caller-supplied memo list is used
    /// verbatim and the fetch is skipped; otherwise memos are fetched
    /// filtered by board id (and owner for a neighbor's board). The
    /// title is fetched only when the caller did not supply one.
    pub fn open(params: MemoBoardParams, api: &ApiClient, session: &Session) -> Self {
        let mut state = Self {
            folder_id: params.folder_id,
            board_title: params.board_title.clone().unwrap_or_default(),
            owner: params.board_owner.clone(),
            is_guide: params.is_guide,
            from_preset: false,
            memos: Vec::new(),
            new_memo: String::new(),
            summary_text: None,
            finished: false,
            error: None,
            editing: None,
            is_loading: false,
            is_summarizing: false,
            load_generation: 1,
            pending_memos: None,
            pending_title: None,
            pending_add: None,
            pending_edit: None,
            pending_delete: None,
            pending_summary: None,
        };

        if state.is_guide {
            state.memos = match params.preset_memos {
                Some(memos) if !memos.is_empty() => memos,
                _ => guide::guide_memos(),
            };
            if state.board_title.is_empty() {
                state.board_title = guide::GUIDE_BOARD_TITLE.to_string();
            }
            return state;
        }

        if params.board_title.is_none() {
            let (api_title, session_title) = (api.clone(), session.clone());
            let board_id = state.folder_id;
            state.pending_title = Some((
                state.load_generation,
                spawn_worker(move || api_title.get_board(&session_title, board_id)),
            ));
        }

        match params.preset_memos {
            Some(memos) if !memos.is_empty() => {
                state.finished = memos.iter().any(|m| m.is_finished);
                state.memos = memos;
                state.from_preset = true;
            }
            _ => {
                state.is_loading = true;
                let (api, session) = (api.clone(), session.clone());
                let board_id = state.folder_id;
                let owner = state.owner.clone();
                state.pending_memos = Some((
                    state.load_generation,
                    spawn_worker(move || api.list_memos(&session, board_id, owner.as_deref())),
                ));
            }
        }

        state
    }

    /// Whether this screen is a read-only view of a neighbor's board.
    pub fn read_only(&self) -> bool {
        self.owner.is_some()
    }

    /// The hint banner to show, if any. Suppressed on the guide board
    /// and on caller-supplied presets.
    pub fn hint(&self) -> Option<Hint> {
        if self.is_guide || self.from_preset {
            return None;
        }
        hint_for(self.memos.len(), self.summary_text.is_some() || self.finished)
    }

    /// Validate and submit the add-memo form.
    pub fn add_memo(&mut self, api: &ApiClient, session: &Session) {
        if self.is_guide {
            self.error = Some("The guide board is read-only.".to_string());
            return;
        }
        if self.read_only() {
            self.error = Some("You can only view a neighbor's board.".to_string());
            return;
        }
        if self.finished {
            self.error = Some("This board is finished; summarizing closed it.".to_string());
            return;
        }
        let content = self.new_memo.trim().to_string();
        if content.is_empty() {
            self.error = Some("Write something first.".to_string());
            return;
        }
        if self.pending_add.is_some() {
            return;
        }

        self.error = None;
        let (api, session) = (api.clone(), session.clone());
        let board_id = self.folder_id;
        self.pending_add = Some(spawn_worker(move || {
            api.create_memo(&session, board_id, &content)
        }));
    }

    pub fn begin_edit(&mut self, memo_id: i64) {
        if self.is_guide || self.read_only() {
            return;
        }
        if let Some(memo) = self.memos.iter().find(|m| m.id == memo_id) {
            self.editing = Some((memo_id, memo.content.clone()));
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Submit the in-progress edit as a PATCH.
    pub fn submit_edit(&mut self, api: &ApiClient, session: &Session) {
        let Some((memo_id, ref buffer)) = self.editing else {
            return;
        };
        let content = buffer.trim().to_string();
        if content.is_empty() {
            self.error = Some("A memo cannot be empty.".to_string());
            return;
        }
        if self.pending_edit.is_some() {
            return;
        }

        self.error = None;
        let (api, session) = (api.clone(), session.clone());
        self.pending_edit = Some((
            memo_id,
            spawn_worker(move || api.edit_memo(&session, memo_id, &content)),
        ));
        self.editing = None;
    }

    pub fn delete_memo(&mut self, api: &ApiClient, session: &Session, memo_id: i64) {
        if self.is_guide || self.read_only() || self.pending_delete.is_some() {
            return;
        }
        let (api, session) = (api.clone(), session.clone());
        self.pending_delete = Some((
            memo_id,
            spawn_worker(move || api.delete_memo(&session, memo_id)),
        ));
    }

    /// Request a remote summary of this board's memos.
    pub fn summarize(&mut self, api: &ApiClient, session: &Session) {
        if self.is_guide {
            self.error = Some("The guide board cannot be summarized.".to_string());
            return;
        }
        if self.read_only() {
            self.error = Some("You can only view a neighbor's board.".to_string());
            return;
        }
        if self.pending_summary.is_some() {
            return;
        }

        self.error = None;
        self.is_summarizing = true;
        let (api, session) = (api.clone(), session.clone());
        let board_id = self.folder_id;
        self.pending_summary = Some(spawn_worker(move || {
            api.summarize_board(&session, board_id)
        }));
    }

    /// Poll every pending operation once; called each frame.
    pub fn apply_pending(&mut self) {
        if let Some((generation, ref rx)) = self.pending_memos {
            if let Ok(result) = rx.try_recv() {
                self.pending_memos = None;
                self.is_loading = false;
                if generation == self.load_generation {
                    match result {
                        Ok(memos) => {
                            self.finished = memos.iter().any(|m| m.is_finished);
                            self.memos = memos;
                        }
                        Err(e) => tracing::error!("failed to load memos: {}", e),
                    }
                }
            }
        }

        if let Some((generation, ref rx)) = self.pending_title {
            if let Ok(result) = rx.try_recv() {
                self.pending_title = None;
                if generation == self.load_generation {
                    match result {
                        Ok(board) => self.board_title = board.title,
                        Err(e) => {
                            tracing::error!("failed to load board title: {}", e);
                            self.board_title = "Untitled board".to_string();
                        }
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_add {
            if let Ok(result) = rx.try_recv() {
                self.pending_add = None;
                match result {
                    Ok(memo) => {
                        // optimistic append, no re-fetch
                        self.memos.push(memo);
                        self.new_memo.clear();
                    }
                    Err(e) => {
                        tracing::error!("failed to add memo: {}", e);
                        self.error = Some(e);
                    }
                }
            }
        }

        if let Some((memo_id, ref rx)) = self.pending_edit {
            if let Ok(result) = rx.try_recv() {
                self.pending_edit = None;
                match result {
                    Ok(updated) => {
                        if let Some(memo) = self.memos.iter_mut().find(|m| m.id == memo_id) {
                            *memo = updated;
                        }
                    }
                    Err(e) => {
                        tracing::error!("failed to edit memo: {}", e);
                        self.error = Some(e);
                    }
                }
            }
        }

        if let Some((memo_id, ref rx)) = self.pending_delete {
            if let Ok(result) = rx.try_recv() {
                self.pending_delete = None;
                match result {
                    Ok(()) => self.memos.retain(|m| m.id != memo_id),
                    Err(e) => {
                        tracing::error!("failed to delete memo: {}", e);
                        self.error = Some(e);
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_summary {
            if let Ok(result) = rx.try_recv() {
                self.pending_summary = None;
                self.is_summarizing = false;
                match result {
                    Ok(summary) => {
                        self.summary_text = Some(summary);
                        // a summarized board is finished; no more additions
                        self.finished = true;
                        for memo in &mut self.memos {
                            memo.is_finished = true;
                        }
                    }
                    Err(e) => {
                        tracing::error!("summarize failed: {}", e);
                        self.error = Some(e);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::config::Config;
    use crate::app::guide::GUIDE_BOARD_ID;
    use std::sync::mpsc::channel;

    fn offline_api() -> (ApiClient, Session) {
        let api = ApiClient::new(Config::with_server_url("http://127.0.0.1:1"));
        let session = Session {
            token: "tok".to_string(),
            user_id: 1,
            nickname: "mina".to_string(),
        };
        (api, session)
    }

    fn memo(id: i64, board: i64, content: &str) -> Memo {
        Memo {
            id,
            board,
            content: content.to_string(),
            timestamp: "2026-08-27T10:00:00Z".to_string(),
            is_finished: false,
            summary: None,
        }
    }

    fn guide_params() -> MemoBoardParams {
        MemoBoardParams {
            folder_id: GUIDE_BOARD_ID,
            board_title: None,
            board_owner: None,
            is_guide: true,
            preset_memos: None,
        }
    }

    #[test]
    fn test_hint_for_is_pure_over_counts() {
        assert_eq!(hint_for(0, false), Some(Hint::AddFirstMemo));
        assert_eq!(hint_for(1, false), Some(Hint::KeepGoing));
        assert_eq!(hint_for(2, false), Some(Hint::TrySummarize));
        assert_eq!(hint_for(17, false), Some(Hint::TrySummarize));
        for count in 0..5 {
            assert_eq!(hint_for(count, true), None);
        }
    }

    #[test]
    fn test_open_guide_board_never_fetches() {
        let (api, session) = offline_api();
        let state = MemoBoardState::open(guide_params(), &api, &session);
        assert!(state.pending_memos.is_none());
        assert!(state.pending_title.is_none());
        assert!(!state.memos.is_empty());
        assert_eq!(state.board_title, guide::GUIDE_BOARD_TITLE);
        assert!(state.hint().is_none());
    }

    #[test]
    fn test_open_with_preset_skips_fetch() {
        let (api, session) = offline_api();
        let params = MemoBoardParams {
            folder_id: 7,
            board_title: Some("Alice's board".to_string()),
            board_owner: Some("alice".to_string()),
            is_guide: false,
            preset_memos: Some(vec![memo(1, 7, "one"), memo(2, 7, "two")]),
        };
        let state = MemoBoardState::open(params, &api, &session);
        assert!(state.pending_memos.is_none());
        assert!(state.pending_title.is_none());
        assert_eq!(state.memos.len(), 2);
        assert!(state.from_preset);
        assert!(state.read_only());
        assert!(state.hint().is_none());
    }

    #[test]
    fn test_guide_add_memo_is_guarded_without_request() {
        let (api, session) = offline_api();
        let mut state = MemoBoardState::open(guide_params(), &api, &session);
        state.new_memo = "hello".to_string();
        state.add_memo(&api, &session);
        assert!(state.pending_add.is_none());
        assert_eq!(state.error.as_deref(), Some("The guide board is read-only."));
    }

    #[test]
    fn test_guide_summarize_is_guarded_without_request() {
        let (api, session) = offline_api();
        let mut state = MemoBoardState::open(guide_params(), &api, &session);
        state.summarize(&api, &session);
        assert!(state.pending_summary.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("The guide board cannot be summarized.")
        );
    }

    #[test]
    fn test_neighbor_board_is_read_only() {
        let (api, session) = offline_api();
        let params = MemoBoardParams {
            folder_id: 7,
            board_title: Some("Alice's board".to_string()),
            board_owner: Some("alice".to_string()),
            is_guide: false,
            preset_memos: Some(vec![memo(1, 7, "one")]),
        };
        let mut state = MemoBoardState::open(params, &api, &session);
        state.new_memo = "mine now".to_string();
        state.add_memo(&api, &session);
        assert!(state.pending_add.is_none());

        state.summarize(&api, &session);
        assert!(state.pending_summary.is_none());

        state.begin_edit(1);
        assert!(state.editing.is_none());

        state.delete_memo(&api, &session, 1);
        assert!(state.pending_delete.is_none());
    }

    #[test]
    fn test_finished_board_rejects_additions() {
        let (api, session) = offline_api();
        let mut state = MemoBoardState::open(
            MemoBoardParams {
                folder_id: 3,
                board_title: Some("Done".to_string()),
                ..Default::default()
            },
            &api,
            &session,
        );
        // fetch is pending; simulate a prior summarization having landed
        state.pending_memos = None;
        state.finished = true;
        state.new_memo = "late addition".to_string();
        state.add_memo(&api, &session);
        assert!(state.pending_add.is_none());
        assert!(state.error.as_deref().unwrap().contains("finished"));
    }

    #[test]
    fn test_empty_memo_rejected_without_request() {
        let (api, session) = offline_api();
        let mut state = MemoBoardState::open(
            MemoBoardParams {
                folder_id: 3,
                board_title: Some("Board".to_string()),
                ..Default::default()
            },
            &api,
            &session,
        );
        state.pending_memos = None;
        state.new_memo = "   ".to_string();
        state.add_memo(&api, &session);
        assert!(state.pending_add.is_none());
        assert_eq!(state.error.as_deref(), Some("Write something first."));
    }

    #[test]
    fn test_add_memo_applies_append_and_clears_input() {
        let (api, session) = offline_api();
        let mut state = MemoBoardState::open(
            MemoBoardParams {
                folder_id: 3,
                board_title: Some("Board".to_string()),
                ..Default::default()
            },
            &api,
            &session,
        );
        state.pending_memos = None;
        state.new_memo = "milk".to_string();

        let (tx, rx) = channel();
        state.pending_add = Some(rx);
        tx.send(Ok(memo(10, 3, "milk"))).unwrap();

        state.apply_pending();
        assert_eq!(state.memos.len(), 1);
        assert_eq!(state.memos[0].content, "milk");
        assert!(state.new_memo.is_empty());
    }

    #[test]
    fn test_edit_applies_in_place() {
        let (api, session) = offline_api();
        let mut state = MemoBoardState::open(
            MemoBoardParams {
                folder_id: 3,
                board_title: Some("Board".to_string()),
                preset_memos: Some(vec![memo(1, 3, "old"), memo(2, 3, "keep")]),
                ..Default::default()
            },
            &api,
            &session,
        );

        let (tx, rx) = channel();
        state.pending_edit = Some((1, rx));
        tx.send(Ok(memo(1, 3, "new"))).unwrap();

        state.apply_pending();
        assert_eq!(state.memos[0].content, "new");
        assert_eq!(state.memos[1].content, "keep");
    }

    #[test]
    fn test_delete_applies_removal() {
        let (api, session) = offline_api();
        let mut state = MemoBoardState::open(
            MemoBoardParams {
                folder_id: 3,
                board_title: Some("Board".to_string()),
                preset_memos: Some(vec![memo(1, 3, "gone"), memo(2, 3, "stays")]),
                ..Default::default()
            },
            &api,
            &session,
        );

        let (tx, rx) = channel();
        state.pending_delete = Some((1, rx));
        tx.send(Ok(())).unwrap();

        state.apply_pending();
        assert_eq!(state.memos.len(), 1);
        assert_eq!(state.memos[0].id, 2);
    }

    #[test]
    fn test_summary_applies_and_finishes_board() {
        let (api, session) = offline_api();
        let mut state = MemoBoardState::open(
            MemoBoardParams {
                folder_id: 3,
                board_title: Some("Board".to_string()),
                preset_memos: Some(vec![memo(1, 3, "a"), memo(2, 3, "b")]),
                ..Default::default()
            },
            &api,
            &session,
        );
        state.from_preset = false;
        assert_eq!(state.hint(), Some(Hint::TrySummarize));

        let (tx, rx) = channel();
        state.pending_summary = Some(rx);
        tx.send(Ok("Two short notes.".to_string())).unwrap();

        state.apply_pending();
        assert_eq!(state.summary_text.as_deref(), Some("Two short notes."));
        assert!(state.finished);
        assert!(state.memos.iter().all(|m| m.is_finished));
        assert_eq!(state.hint(), None);

        // additions are closed from now on
        state.new_memo = "too late".to_string();
        state.add_memo(&api, &session);
        assert!(state.pending_add.is_none());
    }

    #[test]
    fn test_stale_memo_load_is_dropped() {
        let (api, session) = offline_api();
        let mut state = MemoBoardState::open(
            MemoBoardParams {
                folder_id: 3,
                board_title: Some("Board".to_string()),
                preset_memos: Some(vec![memo(1, 3, "current")]),
                ..Default::default()
            },
            &api,
            &session,
        );
        state.load_generation = 2;

        let (tx, rx) = channel();
        state.pending_memos = Some((1, rx));
        tx.send(Ok(vec![memo(9, 3, "stale")])).unwrap();

        state.apply_pending();
        assert_eq!(state.memos.len(), 1);
        assert_eq!(state.memos[0].content, "current");
    }

    #[test]
    fn test_loaded_finished_memos_close_the_board() {
        let (api, session) = offline_api();
        let mut state = MemoBoardState::open(
            MemoBoardParams {
                folder_id: 3,
                board_title: Some("Board".to_string()),
                ..Default::default()
            },
            &api,
            &session,
        );

        let mut finished_memo = memo(1, 3, "done");
        finished_memo.is_finished = true;

        let (tx, rx) = channel();
        state.pending_memos = Some((state.load_generation, rx));
        tx.send(Ok(vec![finished_memo])).unwrap();

        state.apply_pending();
        assert!(state.finished);
    }
}
