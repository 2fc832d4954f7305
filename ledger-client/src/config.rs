//! Client configuration
//!
//! Loaded from environment variables (a `.env` file is honoured by the
//! binaries):
//!
//! | Variable | Default |
//! |---|---|
//! | `API_BASE_URL` | `http://localhost:8000/api` |
//! | `API_TOKEN` | unset |
//! | `REQUEST_TIMEOUT_SECS` | `15` |
//! | `LOG_LEVEL` | `info` |
//! | `LOG_DIR` | unset (stdout only) |

use crate::{ClientResult, NetworkApiClient};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Client configuration for connecting to the ledger backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, including the `/api` prefix
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,

    pub log_level: String,

    /// Directory for daily rolling log files
    pub log_dir: Option<String>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: DEFAULT_TIMEOUT_SECS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            log_dir: None,
        }
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_blank = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        Self {
            base_url: non_blank("API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            token: non_blank("API_TOKEN"),
            timeout: non_blank("REQUEST_TIMEOUT_SECS")
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            log_level: non_blank("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir: non_blank("LOG_DIR"),
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub fn with_log_dir(mut self, dir: impl Into<String>) -> Self {
        self.log_dir = Some(dir.into());
        self
    }

    /// Create an API client from this configuration
    pub fn build_client(&self) -> ClientResult<NetworkApiClient> {
        NetworkApiClient::from_config(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
