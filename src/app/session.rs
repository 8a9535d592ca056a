//! Session Gate
//!
//! One-shot startup state machine plus the later authenticated and
//! unauthenticated toggling: `Checking -> {Authenticated <-> Unauthenticated}`.
//! The gate owns the [`Session`]; login, signup, and logout in the app
//! state are its only writers, every API call is a reader.

use serde::{Deserialize, Serialize};

/// The logged-in identity, persisted by the credential store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user_id: i64,
    pub nickname: String,
}

/// Which screen graph to mount.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionGate {
    /// Startup credential read still in flight; render a spinner.
    Checking,
    Authenticated(Session),
    Unauthenticated,
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::Checking
    }
}

impl SessionGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply the startup credential read. Only valid while `Checking`;
    /// a second resolution is ignored, the gate never re-enters `Checking`.
    pub fn resolve(&mut self, stored: Option<Session>) {
        if !matches!(self, Self::Checking) {
            return;
        }
        *self = match stored {
            Some(session) if !session.token.is_empty() => Self::Authenticated(session),
            _ => Self::Unauthenticated,
        };
    }

    /// Side-channel transition after a successful login or signup.
    pub fn log_in(&mut self, session: Session) {
        *self = Self::Authenticated(session);
    }

    /// Side-channel transition on logout.
    pub fn log_out(&mut self) {
        *self = Self::Unauthenticated;
    }

    pub fn is_checking(&self) -> bool {
        matches!(self, Self::Checking)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The current session, if any. Screens must refuse to issue
    /// authenticated API calls when this is `None`.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(token: &str) -> Session {
        Session {
            token: token.to_string(),
            user_id: 1,
            nickname: "mina".to_string(),
        }
    }

    #[test]
    fn test_resolve_with_token_authenticates() {
        let mut gate = SessionGate::new();
        assert!(gate.is_checking());
        gate.resolve(Some(session("tok")));
        assert!(gate.is_authenticated());
        assert_eq!(gate.session().unwrap().token, "tok");
    }

    #[test]
    fn test_resolve_without_token_is_unauthenticated() {
        let mut gate = SessionGate::new();
        gate.resolve(None);
        assert_eq!(gate, SessionGate::Unauthenticated);
        assert!(gate.session().is_none());
    }

    #[test]
    fn test_empty_token_counts_as_not_logged_in() {
        let mut gate = SessionGate::new();
        gate.resolve(Some(session("")));
        assert_eq!(gate, SessionGate::Unauthenticated);
    }

    #[test]
    fn test_resolve_is_one_shot() {
        let mut gate = SessionGate::new();
        gate.resolve(None);
        gate.resolve(Some(session("late")));
        assert_eq!(gate, SessionGate::Unauthenticated);
    }

    #[test]
    fn test_login_logout_toggle() {
        let mut gate = SessionGate::new();
        gate.resolve(None);
        gate.log_in(session("tok"));
        assert!(gate.is_authenticated());
        gate.log_out();
        assert_eq!(gate, SessionGate::Unauthenticated);
        // a later login is still possible
        gate.log_in(session("tok2"));
        assert_eq!(gate.session().unwrap().token, "tok2");
    }
}
