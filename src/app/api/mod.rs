//! Backend API Client
//!
//! HTTP access to the MEMO-RE backend. [`auth`] holds the unauthenticated
//! account calls; everything else goes through [`ApiClient`], which
//! attaches the bearer token from the caller's [`Session`]. All functions
//! return user-presentable `Result<_, String>` errors; screens run them on
//! worker threads and surface failures without retrying.

pub mod auth;
pub mod boards;
pub mod memos;
pub mod neighbors;

use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use tokio::runtime::Runtime;

use crate::app::config::Config;
use crate::app::session::Session;

/// Authenticated API client. Cheap to clone; worker threads take a clone.
#[derive(Debug, Clone)]
pub struct ApiClient {
    config: Config,
    client: Client,
}

impl ApiClient {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        self.config.api_url(path)
    }

    /// Send an authenticated request and decode a JSON body.
    fn execute<T: DeserializeOwned>(
        &self,
        session: &Session,
        build: impl FnOnce(&Client, String) -> RequestBuilder,
        path: &str,
    ) -> Result<T, String> {
        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = build(&self.client, self.url(path))
                .header("Authorization", format!("Bearer {}", session.token))
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(error_message(status, &body));
            }

            response
                .json::<T>()
                .await
                .map_err(|e| format!("Failed to parse response: {}", e))
        })
    }

    /// Send an authenticated request, ignoring any response body.
    fn execute_no_content(
        &self,
        session: &Session,
        build: impl FnOnce(&Client, String) -> RequestBuilder,
        path: &str,
    ) -> Result<(), String> {
        let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

        rt.block_on(async {
            let response = build(&self.client, self.url(path))
                .header("Authorization", format!("Bearer {}", session.token))
                .send()
                .await
                .map_err(|e| format!("Network error: {}", e))?;

            if !response.status().is_success() {
                let status = response.status();
                let body = response.text().await.unwrap_or_default();
                return Err(error_message(status, &body));
            }

            Ok(())
        })
    }
}

/// Extract a user-presentable message from a backend error payload.
///
/// The backend answers with `{"error": ...}` or `{"error_message": ...}`,
/// and validation failures come back DRF-style as field-level string
/// arrays. Fall back to the status code when nothing readable is found.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error_message", "error", "detail"] {
            if let Some(message) = value.get(key).and_then(|v| v.as_str()) {
                return message.to_string();
            }
        }
        if let Some(map) = value.as_object() {
            for field in map.values() {
                if let Some(message) = field.as_array().and_then(|a| a.first()).and_then(|v| v.as_str()) {
                    return message.to_string();
                }
            }
        }
    }
    format!("Request failed: {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_prefers_error_field() {
        let msg = error_message(StatusCode::UNAUTHORIZED, r#"{"error": "Wrong password."}"#);
        assert_eq!(msg, "Wrong password.");
    }

    #[test]
    fn test_error_message_reads_field_level_arrays() {
        let msg = error_message(
            StatusCode::BAD_REQUEST,
            r#"{"username": ["This username is already taken."]}"#,
        );
        assert_eq!(msg, "This username is already taken.");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        let msg = error_message(StatusCode::INTERNAL_SERVER_ERROR, "<html>oops</html>");
        assert_eq!(msg, "Request failed: 500 Internal Server Error");
    }

    #[test]
    fn test_error_message_prefers_error_message_key() {
        let msg = error_message(
            StatusCode::BAD_REQUEST,
            r#"{"error_message": "Signup failed.", "error": "other"}"#,
        );
        assert_eq!(msg, "Signup failed.");
    }
}
