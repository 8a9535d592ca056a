//! Board endpoints.

use serde_json::json;

use crate::app::api::ApiClient;
use crate::app::session::Session;
use crate::app::types::{Board, SummaryResponse};

impl ApiClient {
    /// List the user's own boards.
    pub fn list_boards(&self, session: &Session) -> Result<Vec<Board>, String> {
        self.execute(session, |client, url| client.get(url), "/api/boards/")
    }

    /// Create a board; the response is the stored board with its id.
    pub fn create_board(
        &self,
        session: &Session,
        title: &str,
        category: &str,
    ) -> Result<Board, String> {
        let body = json!({ "title": title, "category": category });
        self.execute(
            session,
            move |client, url| client.post(url).json(&body),
            "/api/boards/",
        )
    }

    /// Fetch a single board, used when a screen needs only the title.
    pub fn get_board(&self, session: &Session, board_id: i64) -> Result<Board, String> {
        self.execute(
            session,
            |client, url| client.get(url),
            &format!("/api/boards/{}/", board_id),
        )
    }

    /// Ask the service to condense the board's memos into a short text.
    pub fn summarize_board(&self, session: &Session, board_id: i64) -> Result<String, String> {
        let response: SummaryResponse = self.execute(
            session,
            |client, url| client.post(url),
            &format!("/api/boards/{}/summarize/", board_id),
        )?;
        Ok(response.summary)
    }
}
