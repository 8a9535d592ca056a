//! Memo endpoints.

use serde_json::json;

use crate::app::api::ApiClient;
use crate::app::session::Session;
use crate::app::types::Memo;

impl ApiClient {
    /// List the memos of one board. `owner` narrows the query to a
    /// neighbor's board when viewing shared content.
    pub fn list_memos(
        &self,
        session: &Session,
        board_id: i64,
        owner: Option<&str>,
    ) -> Result<Vec<Memo>, String> {
        let mut query = vec![("board".to_string(), board_id.to_string())];
        if let Some(owner) = owner {
            query.push(("user".to_string(), owner.to_string()));
        }
        self.execute(
            session,
            move |client, url| client.get(url).query(&query),
            "/api/memos/",
        )
    }

    pub fn create_memo(
        &self,
        session: &Session,
        board_id: i64,
        content: &str,
    ) -> Result<Memo, String> {
        let body = json!({ "board": board_id, "content": content, "is_finished": false });
        self.execute(
            session,
            move |client, url| client.post(url).json(&body),
            "/api/memos/",
        )
    }

    pub fn edit_memo(&self, session: &Session, memo_id: i64, content: &str) -> Result<Memo, String> {
        let body = json!({ "content": content });
        self.execute(
            session,
            move |client, url| client.patch(url).json(&body),
            &format!("/api/memos/{}/", memo_id),
        )
    }

    pub fn delete_memo(&self, session: &Session, memo_id: i64) -> Result<(), String> {
        self.execute_no_content(
            session,
            |client, url| client.delete(url),
            &format!("/api/memos/{}/", memo_id),
        )
    }
}
