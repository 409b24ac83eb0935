use std::time::Duration;

use serde::Deserialize;

/// Transport settings used when binding a stub to a worker.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ClientConfig {
    /// URI scheme for the transport (`http` or `https`).
    pub scheme: String,
    pub connect_timeout_ms: u64,
    /// Per-call deadline; `0` disables it.
    pub request_timeout_ms: u64,
    pub tcp_nodelay: bool,
    /// HTTP/2 keep-alive ping interval.
    pub keep_alive_interval_ms: Option<u64>,
}

impl ClientConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_ms > 0).then(|| Duration::from_millis(self.request_timeout_ms))
    }

    pub fn keep_alive_interval(&self) -> Option<Duration> {
        self.keep_alive_interval_ms.map(Duration::from_millis)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            scheme: "http".to_string(),
            connect_timeout_ms: 5_000,
            request_timeout_ms: 30_000,
            tcp_nodelay: true,
            keep_alive_interval_ms: None,
        }
    }
}
