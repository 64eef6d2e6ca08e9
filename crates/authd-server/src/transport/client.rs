//! Login client
//!
//! Calls `POST /auth/login` on a remote server under a fixed deadline. The
//! deadline is enforced by dropping the in-flight request future; nothing is
//! retried and the returned token is neither parsed nor cached.

use crate::api::models::{ErrorResponse, LoginRequest, LoginResponse};
use authd_domain::error::{Error, Result};
use authd_infrastructure::config::ClientConfig;
use authd_infrastructure::error_ext::ErrorContext;
use reqwest::StatusCode;
use std::time::Duration;
use tracing::{debug, info};

/// Client for the login endpoint
#[derive(Debug, Clone)]
pub struct AuthClient {
    client: reqwest::Client,
    server_url: String,
    timeout: Duration,
}

impl AuthClient {
    /// Create a client for `server_url` with a per-call deadline
    pub fn new(server_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .network_context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            server_url: server_url.into(),
            timeout,
        })
    }

    /// Create a client from configuration
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        Self::new(config.server_url.clone(), config.timeout())
    }

    /// Log in and return the raw access token
    ///
    /// # Errors
    ///
    /// - [`Error::Denied`] when the server rejects the credentials
    /// - [`Error::Internal`] when the server reports an internal failure
    /// - [`Error::Timeout`] when no answer arrives before the deadline
    /// - [`Error::Network`] for transport failures and unexpected responses
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let url = format!("{}/auth/login", self.server_url.trim_end_matches('/'));
        debug!(url = %url, username = %username, "Sending login request");

        let token = tokio::time::timeout(self.timeout, self.send_login(&url, username, password))
            .await
            .map_err(|_| Error::timeout(self.timeout))??;

        info!(username = %username, "Login succeeded");
        Ok(token)
    }

    async fn send_login(&self, url: &str, username: &str, password: &str) -> Result<String> {
        let request = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::timeout(self.timeout)
                } else {
                    Error::network_with_source(format!("HTTP request to {url} failed"), e)
                }
            })?;

        match response.status() {
            StatusCode::OK => {
                let body: LoginResponse = response
                    .json()
                    .await
                    .network_context("Invalid login response body")?;
                Ok(body.access_token)
            }
            StatusCode::UNAUTHORIZED => Err(Error::Denied),
            StatusCode::INTERNAL_SERVER_ERROR => {
                let message = response
                    .json::<ErrorResponse>()
                    .await
                    .map_or_else(|_| "internal error".to_string(), |body| body.message);
                Err(Error::internal(message))
            }
            other => Err(Error::network(format!(
                "Unexpected status {other} from {url}"
            ))),
        }
    }
}
