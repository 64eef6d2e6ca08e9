//! Application configuration root

use super::{AuthConfig, ClientConfig, LoggingConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,

    /// Token, password hashing, seed users and access rules
    pub auth: AuthConfig,

    /// Settings for the `login` client
    pub client: ClientConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}
