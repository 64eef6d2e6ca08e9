//! Client configuration types

use crate::constants::{CLIENT_DEFAULT_TIMEOUT_SECS, DEFAULT_SERVER_URL};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Login client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL of the authd server
    pub server_url: String,

    /// Per-call deadline in seconds
    pub timeout_secs: u64,
}

impl ClientConfig {
    /// Per-call deadline
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            timeout_secs: CLIENT_DEFAULT_TIMEOUT_SECS,
        }
    }
}
