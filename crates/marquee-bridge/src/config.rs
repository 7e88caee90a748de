use serde::{Deserialize, Serialize};

/// Configuration for the connection to the remote movie API.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base origin of the remote API; all request paths are joined onto it.
    pub base_url: String,
    /// Overall timeout applied uniformly to every request, in seconds.
    pub timeout_secs: u64,
    /// Fixed delay before the single automatic retry, in milliseconds.
    pub retry_delay_ms: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            timeout_secs: 10,
            retry_delay_ms: 1000,
        }
    }
}

/// Global application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Configuration for the request pipeline to the remote API.
    pub api: ApiConfig,
    /// Default lifetime of an auto-expiring notification, in milliseconds.
    pub notification_duration_ms: u64,
    /// Whether catalog sections and subscriptions are served from the
    /// built-in data instead of the remote API.
    pub use_mock_catalog: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            notification_duration_ms: 3000,
            use_mock_catalog: true,
        }
    }
}
