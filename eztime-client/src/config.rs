//! Client configuration

use std::env;

/// Environment variable holding the backend base URL
pub const ENV_BASE_URL: &str = "EZTIME_BASE_URL";
/// Environment variable holding the bearer token for the /v1 API
pub const ENV_API_TOKEN: &str = "EZTIME_API_TOKEN";

/// Token used by demo deployments when none is configured
pub const DEFAULT_TOKEN: &str = "demo-token";

/// Client configuration for connecting to the EZTIME backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Server base URL (e.g. "http://localhost:8000")
    pub base_url: String,

    /// Bearer token for the /v1 payroll API
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: Some(DEFAULT_TOKEN.to_string()),
            timeout: 30,
        }
    }

    /// Read configuration from `EZTIME_BASE_URL` / `EZTIME_API_TOKEN`,
    /// falling back to the demo defaults
    pub fn from_env() -> Self {
        let base_url =
            env::var(ENV_BASE_URL).unwrap_or_else(|_| "http://localhost:8000".to_string());
        let token = env::var(ENV_API_TOKEN).unwrap_or_else(|_| DEFAULT_TOKEN.to_string());
        Self::new(base_url).with_token(token)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Drop the bearer token (the /v1 API will reject such calls)
    pub fn without_token(mut self) -> Self {
        self.token = None;
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8000")
    }
}
