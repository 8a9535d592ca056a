//! Wire Types
//!
//! Request and response bodies exchanged with the MEMO-RE backend, plus
//! the domain types the screens hold in local state. Optional fields the
//! backend may omit are defaulted so older server builds keep parsing.

use serde::{Deserialize, Serialize};

/// A named container of memos, owned by one user.
///
/// `id == 0` is reserved for the synthetic guide board which never
/// round-trips to the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub category: String,
    /// Username of the owner; set on boards fetched through the shared
    /// neighbor view, absent on the user's own boards.
    #[serde(default)]
    pub owner: Option<String>,
}

/// A timestamped text entry belonging to a board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Memo {
    pub id: i64,
    pub board: i64,
    pub content: String,
    pub timestamp: String,
    #[serde(default)]
    pub is_finished: bool,
    #[serde(default)]
    pub summary: Option<String>,
}

/// Bulk payload of everything the user's neighbors share.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NeighborContent {
    #[serde(default)]
    pub boards: Vec<Board>,
    #[serde(default)]
    pub memos: Vec<Memo>,
}

/// A pending incoming follow request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FollowRequest {
    pub from_username: String,
    #[serde(default)]
    pub from_nickname: String,
}

/// A user as returned by the neighbor list and user search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSummary {
    pub username: String,
    #[serde(default)]
    pub nickname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub id: i64,
    pub nickname: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
    pub password2: String,
    pub nickname: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResetPasswordRequest {
    pub email: String,
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryResponse {
    pub summary: String,
}
