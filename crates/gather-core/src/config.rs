//! Client configuration

use std::time::Duration;

/// Base URL used when nothing else is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Configuration for the HTTP client wrapper.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL every request path is joined onto.
    pub base_url: String,
    /// Artificial latency applied to every response, success or failure.
    pub latency: Duration,
    /// Transport-level request timeout.
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            latency: Duration::from_millis(1000),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ClientConfig {
    /// Default configuration pointed at a different backend.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
