//! Client configuration

use std::time::Duration;

/// Configuration for connecting to the gym backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST base URL including the API prefix (e.g., "http://localhost:8080/api")
    pub base_url: String,

    /// Live stream address (for the access-event stream client)
    pub stream_addr: Option<String>,

    /// REST request timeout in seconds
    pub timeout: u64,

    /// Delay between stream reconnection attempts
    pub reconnect_delay: Duration,

    /// How long an access notification stays visible
    pub notice_ttl: Duration,
}

impl ClientConfig {
    /// Create a new configuration with baseline timings
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            stream_addr: None,
            timeout: 10,
            reconnect_delay: Duration::from_secs(5),
            notice_ttl: Duration::from_millis(2500),
        }
    }

    /// Set the live stream address
    pub fn with_stream_addr(mut self, addr: impl Into<String>) -> Self {
        self.stream_addr = Some(addr.into());
        self
    }

    /// Set the REST request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Set the stream reconnection delay
    pub fn with_reconnect_delay(mut self, delay: Duration) -> Self {
        self.reconnect_delay = delay;
        self
    }

    /// Set the notification visible duration
    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080/api")
    }
}
