//! Server and client initialization
//!
//! Wires configuration, logging, the seeded user store, the password and
//! token services and the login use case together.
//!
//! # Configuration
//!
//! - Config file: `authd.toml` (or `--config PATH`)
//! - Environment variables: `AUTHD__SECTION__KEY`, e.g. `AUTHD__AUTH__JWT__SECRET`

use crate::api::{AccessPolicy, AuthState};
use crate::transport::{AuthClient, HttpTransport, HttpTransportConfig};
use authd_application::AuthService;
use authd_domain::error::Result;
use authd_infrastructure::SystemClock;
use authd_infrastructure::config::{AppConfig, ConfigLoader};
use authd_infrastructure::crypto::{PasswordService, TokenManager};
use authd_infrastructure::logging::init_logging;
use authd_infrastructure::store::{InMemoryUserStore, seed_users};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

/// Run the authd server
///
/// Loads configuration, initializes logging, seeds the user store and serves
/// the HTTP API until shutdown.
pub async fn run_server(
    config_path: Option<&Path>,
) -> std::result::Result<(), Box<dyn std::error::Error>> {
    let loader = config_loader(config_path);
    let config = loader.load()?;
    init_logging(&config.logging)?;
    loader.log_source();

    info!(
        host = %config.server.host,
        port = config.server.port,
        "Starting authd server"
    );

    let state = build_state(&config).await?;
    HttpTransport::new(HttpTransportConfig::from(&config.server), state)
        .start()
        .await
        .map_err(|e| e as Box<dyn std::error::Error>)
}

/// Log in against a running server and return the access token
///
/// `server_url` overrides `client.server_url` from configuration.
pub async fn run_login(
    config_path: Option<&Path>,
    server_url: Option<String>,
    username: &str,
    password: &str,
) -> Result<String> {
    let mut client_config = config_loader(config_path).load_client_config()?;
    if let Some(url) = server_url {
        client_config.server_url = url;
    }

    AuthClient::from_config(&client_config)?
        .login(username, password)
        .await
}

/// Write the default configuration to `path` as a starting point
///
/// The written file has an empty signing secret, so `serve` refuses it until
/// `auth.jwt.secret` is filled in.
pub fn run_init_config(path: &Path) -> Result<()> {
    ConfigLoader::new().save_to_file(&AppConfig::default(), path)
}

/// Build handler state from configuration
///
/// Every configured user is hashed and saved before this returns, so the
/// store is fully seeded before the first request is served.
pub async fn build_state(config: &AppConfig) -> Result<AuthState> {
    let passwords = Arc::new(PasswordService::new(&config.auth.password)?);

    let store = Arc::new(InMemoryUserStore::new());
    seed_users(store.as_ref(), &passwords, &config.auth.users).await?;
    if store.is_empty() {
        warn!("No users configured; every login will be denied");
    }

    let tokens = Arc::new(TokenManager::new(&config.auth.jwt, Arc::new(SystemClock))?);
    let auth = AuthService::new(store, passwords, tokens);

    Ok(AuthState::new(
        auth,
        AccessPolicy::new(config.auth.access.clone()),
    ))
}

fn config_loader(config_path: Option<&Path>) -> ConfigLoader {
    match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    }
}
