//! Central application state shared across egui views.
//!
//! `AppState` owns the session gate and is its single writer: the
//! startup credential check, login/signup results, and logout all pass
//! through here. Screens read the session, never write it.

use std::sync::mpsc::Receiver;

use crate::app::alarms::{self, AlarmStore};
use crate::app::api::{self, ApiClient};
use crate::app::config::Config;
use crate::app::credentials::CredentialStore;
use crate::app::screens::{spawn_worker, BoardListState, MemoBoardParams, MemoBoardState};
use crate::app::session::{Session, SessionGate};

/// Current app view/mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Login/signup/reset screen
    Auth,
    /// The user's boards plus everything neighbors share
    BoardList,
    /// One board's memos
    MemoBoard,
}

/// Which auth form is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
    ForgotPassword,
}

pub struct AppState {
    pub config: Config,
    pub api: ApiClient,
    pub credentials: CredentialStore,
    pub alarms: AlarmStore,

    pub gate: SessionGate,
    pub current_view: AppView,
    pub auth_mode: AuthMode,

    pub email_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub nickname_input: String,
    pub new_password_input: String,

    pub auth_error: Option<String>,
    pub auth_notice: Option<String>,
    pub auth_loading: bool,

    pub startup_result: Option<Receiver<Option<Session>>>,
    pub auth_result: Option<Receiver<Result<Session, String>>>,
    pub reset_result: Option<Receiver<Result<(), String>>>,

    pub board_list: BoardListState,
    pub memo_board: Option<MemoBoardState>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        let credentials = CredentialStore::new().unwrap_or_else(|e| {
            tracing::warn!("no data directory, using temp credential store: {}", e);
            CredentialStore::with_path(std::env::temp_dir().join("memore-credentials.json"))
        });
        // reminder map load is independent of the login check; a failure
        // here must not block gate resolution
        let alarm_store = AlarmStore::load().unwrap_or_else(|e| {
            tracing::warn!("failed to load reminder map: {}", e);
            AlarmStore::empty(std::env::temp_dir().join("memore-alarms.json"))
        });
        Self::with_stores(config, credentials, alarm_store)
    }

    /// Build the state around explicit stores; tests point these at
    /// temporary files.
    pub fn with_stores(config: Config, credentials: CredentialStore, alarm_store: AlarmStore) -> Self {
        let api = ApiClient::new(config.clone());

        // startup credential check; the gate stays `Checking` until this
        // lands on a later frame
        let store = credentials.clone();
        let startup_result = Some(spawn_worker(move || match store.load() {
            Ok(session) => session,
            Err(e) => {
                tracing::error!("credential read failed: {}", e);
                None
            }
        }));

        Self {
            config,
            api,
            credentials,
            alarms: alarm_store,
            gate: SessionGate::new(),
            current_view: AppView::Auth,
            auth_mode: AuthMode::Login,
            email_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            nickname_input: String::new(),
            new_password_input: String::new(),
            auth_error: None,
            auth_notice: None,
            auth_loading: false,
            startup_result,
            auth_result: None,
            reset_result: None,
            board_list: BoardListState::new(),
            memo_board: None,
        }
    }

    /// Per-frame pump: resolve pending results, then let the active
    /// screen apply its own.
    pub fn process_frame(&mut self) {
        self.check_startup_result();
        self.check_auth_result();
        self.check_reset_result();

        if let Some(session) = self.gate.session().cloned() {
            self.board_list.apply_pending();
            if self.board_list.should_reload {
                self.board_list.focus(&self.api, &session);
            }
            if let Some(ref mut memo_board) = self.memo_board {
                memo_board.apply_pending();
            }
        }
    }

    fn check_startup_result(&mut self) {
        if let Some(ref rx) = self.startup_result {
            if let Ok(stored) = rx.try_recv() {
                self.startup_result = None;
                self.gate.resolve(stored);
                if self.gate.is_authenticated() {
                    tracing::info!("stored session found, mounting board list");
                    self.enter_board_list();
                }
            }
        }
    }

    fn check_auth_result(&mut self) {
        if let Some(ref rx) = self.auth_result {
            if let Ok(result) = rx.try_recv() {
                self.auth_result = None;
                self.auth_loading = false;

                match result {
                    Ok(session) => {
                        tracing::info!("authenticated as {}", session.nickname);
                        if let Err(e) = self.credentials.save(&session) {
                            // session still works for this run
                            tracing::error!("failed to persist credentials: {}", e);
                        }
                        self.gate.log_in(session);
                        self.auth_error = None;
                        self.auth_notice = None;
                        self.password_input.clear();
                        self.confirm_password_input.clear();
                        self.enter_board_list();
                    }
                    Err(e) => {
                        tracing::error!("authentication failed: {}", e);
                        self.auth_error = Some(e);
                    }
                }
            }
        }
    }

    fn check_reset_result(&mut self) {
        if let Some(ref rx) = self.reset_result {
            if let Ok(result) = rx.try_recv() {
                self.reset_result = None;
                self.auth_loading = false;

                match result {
                    Ok(()) => {
                        self.auth_notice =
                            Some("Password updated. Log in with your new password.".to_string());
                        self.auth_error = None;
                        self.new_password_input.clear();
                        self.auth_mode = AuthMode::Login;
                    }
                    Err(e) => self.auth_error = Some(e),
                }
            }
        }
    }

    pub fn handle_login(&mut self) {
        if self.email_input.is_empty() || self.password_input.is_empty() {
            self.auth_error = Some("Email and password are required.".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let config = self.config.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();
        self.auth_result = Some(spawn_worker(move || api::auth::login(&config, email, password)));
    }

    pub fn handle_signup(&mut self) {
        if self.email_input.is_empty()
            || self.password_input.is_empty()
            || self.confirm_password_input.is_empty()
            || self.nickname_input.is_empty()
        {
            self.auth_error = Some("All fields are required.".to_string());
            return;
        }
        if !self.email_input.contains('@') || !self.email_input.contains('.') {
            self.auth_error = Some("Please enter a valid email address.".to_string());
            return;
        }
        if self.password_input != self.confirm_password_input {
            self.auth_error = Some("Passwords do not match.".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let config = self.config.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();
        let nickname = self.nickname_input.clone();
        self.auth_result = Some(spawn_worker(move || {
            api::auth::signup(&config, email, password, nickname)
        }));
    }

    pub fn handle_reset_password(&mut self) {
        if self.email_input.is_empty() || self.new_password_input.is_empty() {
            self.auth_error = Some("Email and a new password are required.".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let config = self.config.clone();
        let email = self.email_input.clone();
        let new_password = self.new_password_input.clone();
        self.reset_result = Some(spawn_worker(move || {
            api::auth::reset_password(&config, email, new_password)
        }));
    }

    /// Log out: forget the persisted session and drop every pending
    /// receiver so in-flight results under the old identity are never
    /// applied.
    pub fn logout(&mut self) {
        if let Err(e) = self.credentials.clear() {
            tracing::error!("failed to clear credential store: {}", e);
        }
        self.gate.log_out();
        self.board_list = BoardListState::new();
        self.memo_board = None;
        self.auth_result = None;
        self.reset_result = None;
        self.auth_loading = false;
        self.auth_mode = AuthMode::Login;
        self.current_view = AppView::Auth;
        self.email_input.clear();
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.nickname_input.clear();
        self.new_password_input.clear();
        self.auth_error = None;
        self.auth_notice = None;
    }

    pub fn switch_auth_mode(&mut self, mode: AuthMode) {
        self.auth_mode = mode;
        self.auth_error = None;
        self.auth_notice = None;
        self.password_input.clear();
        self.confirm_password_input.clear();
        self.new_password_input.clear();
    }

    /// Navigate into a board.
    pub fn open_board(&mut self, params: MemoBoardParams) {
        let Some(session) = self.gate.session().cloned() else {
            return;
        };
        self.memo_board = Some(MemoBoardState::open(params, &self.api, &session));
        self.current_view = AppView::MemoBoard;
    }

    /// Navigate back; dropping the memo screen abandons its in-flight
    /// requests, and the list re-fetches on every re-entry.
    pub fn back_to_board_list(&mut self) {
        self.memo_board = None;
        self.enter_board_list();
    }

    fn enter_board_list(&mut self) {
        let Some(session) = self.gate.session().cloned() else {
            return;
        };
        self.current_view = AppView::BoardList;
        self.board_list.focus(&self.api, &session);
        self.board_list.overdue_boards = self.alarms.overdue(alarms::now_ms());
    }

    /// Entry point for a delivered notification payload carrying a board
    /// id: flag the board if its local reminder is due.
    pub fn handle_notification(&mut self, board_id: i64) {
        if self.alarms.is_due(board_id, alarms::now_ms())
            && !self.board_list.overdue_boards.contains(&board_id)
        {
            self.board_list.overdue_boards.push(board_id);
            self.board_list.overdue_boards.sort_unstable();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
