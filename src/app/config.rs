/// Default server URL
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";

/// Application configuration wrapper.
///
/// Holds only the backend location. The session token deliberately does
/// not live here; it belongs to the session gate, which has a single
/// writer (login/logout).
#[derive(Debug, Clone)]
pub struct Config {
    server_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let server_url =
            std::env::var("MEMORE_API_URL").unwrap_or_else(|_| DEFAULT_SERVER_URL.to_string());
        Self { server_url }
    }
}

impl Config {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration pointing at an explicit server
    pub fn with_server_url(url: impl Into<String>) -> Self {
        let mut url = url.into();
        while url.ends_with('/') {
            url.pop();
        }
        Self { server_url: url }
    }

    pub fn server_url(&self) -> &str {
        &self.server_url
    }

    /// Get the full URL for an API endpoint
    pub fn api_url(&self, path: &str) -> String {
        format!("{}{}", self.server_url, path)
    }
}
