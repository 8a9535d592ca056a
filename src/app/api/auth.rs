//! Account API
//!
//! Unauthenticated account calls: login, signup (with the automatic
//! follow-up login the service expects), and password reset.

use reqwest::Client;
use tokio::runtime::Runtime;

use crate::app::api::error_message;
use crate::app::config::Config;
use crate::app::session::Session;
use crate::app::types::{LoginRequest, LoginResponse, ResetPasswordRequest, SignupRequest};

/// Log in with username and password, yielding the session to persist.
pub fn login(config: &Config, username: String, password: String) -> Result<Session, String> {
    let client = Client::new();
    let url = config.api_url("/api/login/");

    let request = LoginRequest { username, password };

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }

        let login_response: LoginResponse = response
            .json()
            .await
            .map_err(|e| format!("Failed to parse response: {}", e))?;

        Ok(Session {
            token: login_response.token,
            user_id: login_response.id,
            nickname: login_response.nickname,
        })
    })
}

/// Create an account, then log straight in with the new credentials.
pub fn signup(
    config: &Config,
    email: String,
    password: String,
    nickname: String,
) -> Result<Session, String> {
    let client = Client::new();
    let url = config.api_url("/api/signup/");

    // The service keys accounts by email; the username field carries it.
    let request = SignupRequest {
        username: email.clone(),
        password: password.clone(),
        password2: password.clone(),
        nickname,
        email: email.clone(),
    };

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(error_message(status, &body));
        }

        Ok(())
    })?;

    login(config, email, password)
}

/// Reset the password for the account registered under `email`.
pub fn reset_password(config: &Config, email: String, new_password: String) -> Result<(), String> {
    let client = Client::new();
    let url = config.api_url("/api/reset-password/");

    let request = ResetPasswordRequest {
        email,
        new_password,
    };

    let rt = Runtime::new().map_err(|e| format!("Failed to create runtime: {}", e))?;

    rt.block_on(async {
        let response = client
            .post(&url)
            .json(&request)
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
