//! Neighbor (follow) endpoints.
//!
//! A neighbor edge is keyed by username and moves through
//! `requested -> {accepted | declined}`; acceptance exposes the
//! followee's boards through the shared content read path.

use serde_json::json;

use crate::app::api::ApiClient;
use crate::app::session::Session;
use crate::app::types::{FollowRequest, NeighborContent, UserSummary};

impl ApiClient {
    /// Accepted neighbors.
    pub fn neighbor_list(&self, session: &Session) -> Result<Vec<UserSummary>, String> {
        self.execute(session, |client, url| client.get(url), "/api/neighbor/list/")
    }

    /// Everything the user's neighbors share: their boards plus their
    /// memos pre-fetched in bulk, so opening a shared board needs no
    /// second round trip.
    pub fn neighbor_content(&self, session: &Session) -> Result<NeighborContent, String> {
        self.execute(
            session,
            |client, url| client.get(url),
            "/api/neighbor/content/",
        )
    }

    /// Pending incoming follow requests.
    pub fn pending_requests(&self, session: &Session) -> Result<Vec<FollowRequest>, String> {
        self.execute(
            session,
            |client, url| client.get(url),
            "/api/neighbor/requests/",
        )
    }

    /// Search users by username substring.
    pub fn search_users(&self, session: &Session, query: &str) -> Result<Vec<UserSummary>, String> {
        let query = [("q".to_string(), query.to_string())];
        self.execute(
            session,
            move |client, url| client.get(url).query(&query),
            "/api/neighbor/search/",
        )
    }

    pub fn send_request(&self, session: &Session, username: &str) -> Result<(), String> {
        let body = json!({ "username": username });
        self.execute_no_content(
            session,
            move |client, url| client.post(url).json(&body),
            "/api/neighbor/request/",
        )
    }

    pub fn accept_request(&self, session: &Session, username: &str) -> Result<(), String> {
        let body = json!({ "username": username });
        self.execute_no_content(
            session,
            move |client, url| client.post(url).json(&body),
            "/api/neighbor/accept/",
        )
    }

    pub fn decline_request(&self, session: &Session, username: &str) -> Result<(), String> {
        let body = json!({ "username": username });
        self.execute_no_content(
            session,
            move |client, url| client.post(url).json(&body),
            "/api/neighbor/cancel/",
        )
    }

    /// Remove an accepted neighbor edge.
    pub fn remove_neighbor(&self, session: &Session, username: &str) -> Result<(), String> {
        let body = json!({ "username": username });
        self.execute_no_content(
            session,
            move |client, url| client.post(url).json(&body),
            "/api/neighbor/remove/",
        )
    }
}
