//! HTTP client settings for remote sources.

use std::time::Duration;

use serde::{Deserialize, Serialize};

const fn default_timeout_secs() -> u64 {
    10
}

fn default_user_agent() -> String {
    String::from("dss/0.1")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct HttpConfig {
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpConfig {
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = HttpConfig::default();
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert_eq!(config.user_agent, "dss/0.1");
    }
}
