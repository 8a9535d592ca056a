//! Board List Screen
//!
//! The most stateful screen. Every focus re-fetches four independent
//! collections in parallel: own boards, neighbor-shared content (boards
//! plus their memos in bulk), the accepted-neighbor list, and pending
//! incoming follow requests.
//!
//! Load results are tagged with a generation counter taken at spawn
//! time; `apply_pending` drops any result whose tag is no longer
//! current, so a stale response can never overwrite newer state. Each of
//! the four branches applies independently: a failed branch logs and
//! leaves only its own previously-loaded data untouched.

use std::sync::mpsc::Receiver;

use crate::app::api::ApiClient;
use crate::app::guide::{self, GUIDE_BOARD_ID};
use crate::app::screens::{spawn_worker, MemoBoardParams};
use crate::app::session::Session;
use crate::app::types::{Board, FollowRequest, Memo, NeighborContent, UserSummary};

pub type LoadBoardsResult = Result<Vec<Board>, String>;
pub type LoadNeighborContentResult = Result<NeighborContent, String>;
pub type LoadNeighborsResult = Result<Vec<UserSummary>, String>;
pub type LoadRequestsResult = Result<Vec<FollowRequest>, String>;
pub type CreateBoardResult = Result<Board, String>;
pub type SearchUsersResult = Result<Vec<UserSummary>, String>;
pub type FollowActionResult = Result<(), String>;

/// Default category assigned to boards created from this screen.
const DEFAULT_CATEGORY: &str = "general";

pub struct BoardListState {
    /// The user's own boards.
    pub own_boards: Vec<Board>,
    /// Boards shared by accepted neighbors (read-only to this user).
    pub shared_boards: Vec<Board>,
    /// Bulk pre-fetched memos of all shared boards, filtered locally on
    /// navigation so opening a shared board costs no extra round trip.
    pub neighbor_memos: Vec<Memo>,
    /// Accepted neighbors.
    pub neighbors: Vec<UserSummary>,
    /// Pending incoming follow requests.
    pub incoming_requests: Vec<FollowRequest>,
    /// Results of the last user search.
    pub search_results: Vec<UserSummary>,

    pub new_board_title: String,
    pub search_input: String,

    /// Transient user-facing failure line.
    pub error: Option<String>,
    /// Board ids whose local reminder is overdue, set on focus.
    pub overdue_boards: Vec<i64>,

    pub is_loading_boards: bool,
    pub is_loading_shared: bool,
    pub is_loading_neighbors: bool,
    pub is_loading_requests: bool,
    pub is_creating_board: bool,
    pub is_searching: bool,

    /// Bumped on every focus; load results tagged with an older value
    /// are dropped unapplied.
    pub load_generation: u64,

    pub pending_own_boards: Option<(u64, Receiver<LoadBoardsResult>)>,
    pub pending_neighbor_content: Option<(u64, Receiver<LoadNeighborContentResult>)>,
    pub pending_neighbors: Option<(u64, Receiver<LoadNeighborsResult>)>,
    pub pending_requests: Option<(u64, Receiver<LoadRequestsResult>)>,
    pub pending_create_board: Option<Receiver<CreateBoardResult>>,
    pub pending_search: Option<Receiver<SearchUsersResult>>,
    pub pending_follow_action: Option<Receiver<FollowActionResult>>,

    /// Set when a server-confirmed follow mutation requires a full
    /// re-fetch; the app state triggers `focus` on the next frame.
    pub should_reload: bool,
}

impl Default for BoardListState {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardListState {
    pub fn new() -> Self {
        Self {
            own_boards: Vec::new(),
            shared_boards: Vec::new(),
            neighbor_memos: Vec::new(),
            neighbors: Vec::new(),
            incoming_requests: Vec::new(),
            search_results: Vec::new(),
            new_board_title: String::new(),
            search_input: String::new(),
            error: None,
            overdue_boards: Vec::new(),
            is_loading_boards: false,
            is_loading_shared: false,
            is_loading_neighbors: false,
            is_loading_requests: false,
            is_creating_board: false,
            is_searching: false,
            load_generation: 0,
            pending_own_boards: None,
            pending_neighbor_content: None,
            pending_neighbors: None,
            pending_requests: None,
            pending_create_board: None,
            pending_search: None,
            pending_follow_action: None,
            should_reload: false,
        }
    }

    /// Focus entry point: issue the four independent fetches
    /// concurrently. Replacing the pending receivers abandons any
    /// still-running loads from a previous focus.
    pub fn focus(&mut self, api: &ApiClient, session: &Session) {
        self.load_generation += 1;
        self.should_reload = false;
        let generation = self.load_generation;

        self.is_loading_boards = true;
        self.is_loading_shared = true;
        self.is_loading_neighbors = true;
        self.is_loading_requests = true;

        let (api_boards, session_boards) = (api.clone(), session.clone());
        self.pending_own_boards = Some((
            generation,
            spawn_worker(move || api_boards.list_boards(&session_boards)),
        ));

        let (api_shared, session_shared) = (api.clone(), session.clone());
        self.pending_neighbor_content = Some((
            generation,
            spawn_worker(move || api_shared.neighbor_content(&session_shared)),
        ));

        let (api_neighbors, session_neighbors) = (api.clone(), session.clone());
        self.pending_neighbors = Some((
            generation,
            spawn_worker(move || api_neighbors.neighbor_list(&session_neighbors)),
        ));

        let (api_requests, session_requests) = (api.clone(), session.clone());
        self.pending_requests = Some((
            generation,
            spawn_worker(move || api_requests.pending_requests(&session_requests)),
        ));
    }

    /// Validate and submit the create-board form. Empty and duplicate
    /// titles are rejected before any request is issued.
    pub fn submit_new_board(&mut self, api: &ApiClient, session: &Session) {
        let title = self.new_board_title.trim().to_string();
        if title.is_empty() {
            self.error = Some("Enter a board name first.".to_string());
            return;
        }
        if self.own_boards.iter().any(|b| b.title == title) {
            self.error = Some("A board with that name already exists.".to_string());
            return;
        }
        if self.pending_create_board.is_some() {
            return;
        }

        self.error = None;
        self.is_creating_board = true;
        let (api, session) = (api.clone(), session.clone());
        self.pending_create_board = Some(spawn_worker(move || {
            api.create_board(&session, &title, DEFAULT_CATEGORY)
        }));
    }

    /// Search users by username substring; replaces the result list and
    /// never mutates follow state.
    pub fn submit_search(&mut self, api: &ApiClient, session: &Session) {
        let query = self.search_input.trim().to_string();
        if query.is_empty() {
            self.search_results.clear();
            return;
        }

        self.is_searching = true;
        let (api, session) = (api.clone(), session.clone());
        self.pending_search = Some(spawn_worker(move || api.search_users(&session, &query)));
    }

    pub fn send_follow_request(&mut self, api: &ApiClient, session: &Session, username: &str) {
        let username = username.to_string();
        let (api, session) = (api.clone(), session.clone());
        self.spawn_follow_action(move || api.send_request(&session, &username));
    }

    /// Accept or decline an incoming request. The backend is the source
    /// of truth; nothing is fabricated locally and the ensuing re-fetch
    /// settles the lists.
    pub fn respond_to_request(
        &mut self,
        api: &ApiClient,
        session: &Session,
        username: &str,
        accept: bool,
    ) {
        let username = username.to_string();
        let (api, session) = (api.clone(), session.clone());
        self.spawn_follow_action(move || {
            if accept {
                api.accept_request(&session, &username)
            } else {
                api.decline_request(&session, &username)
            }
        });
    }

    pub fn remove_neighbor(&mut self, api: &ApiClient, session: &Session, username: &str) {
        let username = username.to_string();
        let (api, session) = (api.clone(), session.clone());
        self.spawn_follow_action(move || api.remove_neighbor(&session, &username));
    }

    fn spawn_follow_action<F>(&mut self, work: F)
    where
        F: FnOnce() -> FollowActionResult + Send + 'static,
    {
        // one follow mutation at a time; buttons disable while pending
        if self.pending_follow_action.is_some() {
            return;
        }
        self.error = None;
        self.pending_follow_action = Some(spawn_worker(work));
    }

    pub fn is_follow_action_pending(&self) -> bool {
        self.pending_follow_action.is_some()
    }

    /// Poll every pending operation once; called each frame.
    pub fn apply_pending(&mut self) {
        if let Some((generation, ref rx)) = self.pending_own_boards {
            if let Ok(result) = rx.try_recv() {
                self.pending_own_boards = None;
                self.is_loading_boards = false;
                if generation == self.load_generation {
                    match result {
                        Ok(boards) => self.own_boards = boards,
                        Err(e) => tracing::error!("failed to load boards: {}", e),
                    }
                }
            }
        }

        if let Some((generation, ref rx)) = self.pending_neighbor_content {
            if let Ok(result) = rx.try_recv() {
                self.pending_neighbor_content = None;
                self.is_loading_shared = false;
                if generation == self.load_generation {
                    match result {
                        Ok(content) => {
                            self.shared_boards = content.boards;
                            self.neighbor_memos = content.memos;
                        }
                        Err(e) => tracing::error!("failed to load shared content: {}", e),
                    }
                }
            }
        }

        if let Some((generation, ref rx)) = self.pending_neighbors {
            if let Ok(result) = rx.try_recv() {
                self.pending_neighbors = None;
                self.is_loading_neighbors = false;
                if generation == self.load_generation {
                    match result {
                        Ok(neighbors) => self.neighbors = neighbors,
                        Err(e) => tracing::error!("failed to load neighbor list: {}", e),
                    }
                }
            }
        }

        if let Some((generation, ref rx)) = self.pending_requests {
            if let Ok(result) = rx.try_recv() {
                self.pending_requests = None;
                self.is_loading_requests = false;
                if generation == self.load_generation {
                    match result {
                        Ok(requests) => self.incoming_requests = requests,
                        Err(e) => tracing::error!("failed to load follow requests: {}", e),
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_create_board {
            if let Ok(result) = rx.try_recv() {
                self.pending_create_board = None;
                self.is_creating_board = false;
                match result {
                    Ok(board) => {
                        // optimistic append, no re-fetch
                        self.own_boards.push(board);
                        self.new_board_title.clear();
                    }
                    Err(e) => {
                        tracing::error!("failed to create board: {}", e);
                        self.error = Some(e);
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_search {
            if let Ok(result) = rx.try_recv() {
                self.pending_search = None;
                self.is_searching = false;
                match result {
                    Ok(users) => self.search_results = users,
                    Err(e) => {
                        tracing::error!("user search failed: {}", e);
                        self.error = Some(e);
                    }
                }
            }
        }

        if let Some(ref rx) = self.pending_follow_action {
            if let Ok(result) = rx.try_recv() {
                self.pending_follow_action = None;
                match result {
                    // server-confirmed; re-fetch all four collections
                    Ok(()) => self.should_reload = true,
                    Err(e) => {
                        tracing::error!("follow action failed: {}", e);
                        self.error = Some(e);
                    }
                }
            }
        }
    }

    /// Navigation payload for one of the user's own boards.
    pub fn params_for_own_board(&self, board: &Board) -> MemoBoardParams {
        MemoBoardParams {
            folder_id: board.id,
            board_title: Some(board.title.clone()),
            board_owner: None,
            is_guide: false,
            preset_memos: None,
        }
    }

    /// Navigation payload for a shared board. The guide board gets a
    /// locally synthesized payload; any other shared board gets the
    /// pre-filtered subset of the bulk-fetched neighbor memos plus the
    /// owning username, so the memo screen skips its own fetch.
    pub fn params_for_shared_board(&self, board: &Board) -> MemoBoardParams {
        if board.id == GUIDE_BOARD_ID {
            return MemoBoardParams {
                folder_id: GUIDE_BOARD_ID,
                board_title: Some(guide::GUIDE_BOARD_TITLE.to_string()),
                board_owner: None,
                is_guide: true,
                preset_memos: Some(guide::guide_memos()),
            };
        }

        let memos: Vec<Memo> = self
            .neighbor_memos
            .iter()
            .filter(|m| m.board == board.id)
            .cloned()
            .collect();
        MemoBoardParams {
            folder_id: board.id,
            board_title: Some(board.title.clone()),
            board_owner: board.owner.clone(),
            is_guide: false,
            preset_memos: Some(memos),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc::channel;

    fn board(id: i64, title: &str) -> Board {
        Board {
            id,
            title: title.to_string(),
            category: String::new(),
            owner: None,
        }
    }

    fn shared_board(id: i64, title: &str, owner: &str) -> Board {
        Board {
            id,
            title: title.to_string(),
            category: String::new(),
            owner: Some(owner.to_string()),
        }
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

    fn offline_api() -> (ApiClient, Session) {
        // the guards under test fire before any request is spawned, so
        // the client never touches this address
        let api = ApiClient::new(crate::app::config::Config::with_server_url(
            "http://127.0.0.1:1",
        ));
        let session = Session {
            token: "tok".to_string(),
            user_id: 1,
            nickname: "mina".to_string(),
        };
        (api, session)
    }

    #[test]
    fn test_empty_title_rejected_without_request() {
        let (api, session) = offline_api();
        let mut state = BoardListState::new();
        state.new_board_title = "   ".to_string();

        state.submit_new_board(&api, &session);
        assert!(state.pending_create_board.is_none());
        assert_eq!(state.error.as_deref(), Some("Enter a board name first."));
    }

    #[test]
    fn test_duplicate_title_rejected_without_request() {
        let (api, session) = offline_api();
        let mut state = BoardListState::new();
        state.own_boards.push(board(1, "Groceries"));
        state.new_board_title = "Groceries".to_string();

        state.submit_new_board(&api, &session);
        assert!(state.pending_create_board.is_none());
        assert_eq!(
            state.error.as_deref(),
            Some("A board with that name already exists.")
        );
    }

    #[test]
    fn test_empty_search_clears_results_without_request() {
        let (api, session) = offline_api();
        let mut state = BoardListState::new();
        state.search_results.push(UserSummary {
            username: "old".to_string(),
            nickname: String::new(),
        });
        state.search_input = "  ".to_string();

        state.submit_search(&api, &session);
        assert!(state.search_results.is_empty());
        assert!(state.pending_search.is_none());
    }

    #[test]
    fn test_create_board_applies_append_and_clears_input() {
        let mut state = BoardListState::new();
        state.own_boards.push(board(1, "Groceries"));
        state.new_board_title = "Travel".to_string();
        state.is_creating_board = true;

        let (tx, rx) = channel();
        state.pending_create_board = Some(rx);
        tx.send(Ok(board(2, "Travel"))).unwrap();

        state.apply_pending();
        assert_eq!(state.own_boards.len(), 2);
        assert_eq!(state.own_boards[1].title, "Travel");
        assert!(state.new_board_title.is_empty());
        assert!(!state.is_creating_board);
        assert!(state.pending_create_board.is_none());
    }

    #[test]
    fn test_stale_generation_result_is_dropped() {
        let mut state = BoardListState::new();
        state.own_boards.push(board(1, "Current"));
        state.load_generation = 5;

        // a load spawned at generation 4 completes late
        let (tx, rx) = channel();
        state.pending_own_boards = Some((4, rx));
        tx.send(Ok(vec![board(9, "Stale")])).unwrap();

        state.apply_pending();
        assert_eq!(state.own_boards, vec![board(1, "Current")]);
        assert!(state.pending_own_boards.is_none());
    }

    #[test]
    fn test_current_generation_result_applies() {
        let mut state = BoardListState::new();
        state.load_generation = 5;

        let (tx, rx) = channel();
        state.pending_own_boards = Some((5, rx));
        tx.send(Ok(vec![board(2, "Fresh")])).unwrap();

        state.apply_pending();
        assert_eq!(state.own_boards, vec![board(2, "Fresh")]);
    }

    #[test]
    fn test_failed_branch_leaves_only_its_own_state() {
        let mut state = BoardListState::new();
        state.own_boards.push(board(1, "Kept"));
        state.load_generation = 1;

        let (tx_boards, rx_boards) = channel();
        let (tx_content, rx_content) = channel();
        state.pending_own_boards = Some((1, rx_boards));
        state.pending_neighbor_content = Some((1, rx_content));

        tx_boards.send(Err("network down".to_string())).unwrap();
        tx_content
            .send(Ok(NeighborContent {
                boards: vec![shared_board(7, "Alice's board", "alice")],
                memos: vec![memo(1, 7, "hi")],
            }))
            .unwrap();

        state.apply_pending();
        // failed branch untouched, successful branch applied
        assert_eq!(state.own_boards, vec![board(1, "Kept")]);
        assert_eq!(state.shared_boards.len(), 1);
        assert_eq!(state.neighbor_memos.len(), 1);
    }

    #[test]
    fn test_follow_action_success_triggers_full_reload() {
        let mut state = BoardListState::new();
        state.incoming_requests.push(FollowRequest {
            from_username: "bob".to_string(),
            from_nickname: "Bob".to_string(),
        });

        let (tx, rx) = channel();
        state.pending_follow_action = Some(rx);
        tx.send(Ok(())).unwrap();

        state.apply_pending();
        assert!(state.should_reload);
        // no local fabrication: lists settle only via the re-fetch
        assert_eq!(state.incoming_requests.len(), 1);
        assert!(state.neighbors.is_empty());
    }

    #[test]
    fn test_follow_action_failure_keeps_state_and_surfaces_error() {
        let mut state = BoardListState::new();
        let (tx, rx) = channel();
        state.pending_follow_action = Some(rx);
        tx.send(Err("User not found".to_string())).unwrap();

        state.apply_pending();
        assert!(!state.should_reload);
        assert_eq!(state.error.as_deref(), Some("User not found"));
    }

    #[test]
    fn test_search_replaces_results() {
        let mut state = BoardListState::new();
        state.search_results.push(UserSummary {
            username: "old".to_string(),
            nickname: String::new(),
        });

        let (tx, rx) = channel();
        state.pending_search = Some(rx);
        tx.send(Ok(vec![UserSummary {
            username: "alice".to_string(),
            nickname: "Alice".to_string(),
        }]))
        .unwrap();

        state.apply_pending();
        assert_eq!(state.search_results.len(), 1);
        assert_eq!(state.search_results[0].username, "alice");
    }

    #[test]
    fn test_params_for_shared_board_prefilters_memos() {
        let mut state = BoardListState::new();
        let alice_board = shared_board(7, "Alice's board", "alice");
        state.shared_boards.push(alice_board.clone());
        state.neighbor_memos.push(memo(1, 7, "one"));
        state.neighbor_memos.push(memo(2, 8, "other board"));
        state.neighbor_memos.push(memo(3, 7, "two"));

        let params = state.params_for_shared_board(&alice_board);
        assert_eq!(params.folder_id, 7);
        assert_eq!(params.board_owner.as_deref(), Some("alice"));
        assert!(!params.is_guide);
        let preset = params.preset_memos.unwrap();
        assert_eq!(preset.len(), 2);
        assert!(preset.iter().all(|m| m.board == 7));
    }

    #[test]
    fn test_params_for_guide_board_are_synthesized_locally() {
        let state = BoardListState::new();
        let params = state.params_for_shared_board(&guide::guide_board());
        assert_eq!(params.folder_id, GUIDE_BOARD_ID);
        assert!(params.is_guide);
        assert!(params.board_owner.is_none());
        let preset = params.preset_memos.unwrap();
        assert!(!preset.is_empty());
        assert!(preset.iter().all(|m| m.board == GUIDE_BOARD_ID));
    }

    #[test]
    fn test_params_for_own_board() {
        let state = BoardListState::new();
        let params = state.params_for_own_board(&board(3, "Groceries"));
        assert_eq!(params.folder_id, 3);
        assert_eq!(params.board_title.as_deref(), Some("Groceries"));
        assert!(params.preset_memos.is_none());
        assert!(!params.is_guide);
    }
}
