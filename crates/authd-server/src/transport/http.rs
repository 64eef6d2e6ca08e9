//! HTTP Transport
//!
//! Serves the authentication API with Rocket on the configured address.

use crate::api::{AuthState, auth_rocket};
use authd_infrastructure::config::ServerConfig;
use rocket::{Build, Rocket};
use tracing::info;

/// HTTP transport configuration
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl From<&ServerConfig> for HttpTransportConfig {
    fn from(config: &ServerConfig) -> Self {
        Self {
            host: config.host.clone(),
            port: config.port,
        }
    }
}

/// HTTP transport for the authentication API
pub struct HttpTransport {
    config: HttpTransportConfig,
    state: AuthState,
}

impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(config: HttpTransportConfig, state: AuthState) -> Self {
        Self { config, state }
    }

    /// Build the Rocket application
    pub fn rocket(&self) -> Rocket<Build> {
        let figment = rocket::Config::figment()
            .merge(("address", self.config.host.clone()))
            .merge(("port", self.config.port));

        auth_rocket(self.state.clone()).configure(figment)
    }

    /// Serve until Rocket shuts down (Ctrl+C)
    pub async fn start(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        info!(host = %self.config.host, port = self.config.port, "HTTP transport listening");

        self.rocket()
            .launch()
            .await
            .map_err(|e| Box::new(e) as Box<dyn std::error::Error + Send + Sync>)?;

        Ok(())
    }
}
