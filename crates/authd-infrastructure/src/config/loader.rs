//! Configuration loader
//!
//! Handles loading configuration from TOML files, environment variables and
//! default values.

use crate::config::{AppConfig, ClientConfig};
use crate::constants::{
    CONFIG_ENV_PREFIX, CONFIG_ENV_SEPARATOR, DEFAULT_CONFIG_DIR, DEFAULT_CONFIG_FILENAME,
    JWT_SECRET_MIN_LENGTH,
};
use crate::error_ext::ErrorContext;
use crate::logging::log_config_loaded;
use authd_domain::constants::USERNAME_MAX_LENGTH;
use authd_domain::error::{Error, Result};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader with default settings
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Set the configuration file path
    #[must_use]
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Load configuration from all sources
    ///
    /// Configuration sources are merged in this order (later sources override earlier):
    /// 1. Default values from `AppConfig::default()`
    /// 2. TOML configuration file (if exists)
    /// 3. Environment variables with prefix (e.g., `AUTHD__SERVER__PORT`)
    pub fn load(&self) -> Result<AppConfig> {
        let app_config: AppConfig = self
            .figment()
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&app_config)?;

        Ok(app_config)
    }

    /// Load only the `client` section
    ///
    /// The login client never needs the signing secret, so server-side
    /// sections are neither extracted nor validated.
    pub fn load_client_config(&self) -> Result<ClientConfig> {
        let client: ClientConfig = self
            .figment()
            .extract_inner("client")
            .config_context("Failed to extract client configuration")?;

        validate_client_timeout(&client)?;

        Ok(client)
    }

    /// Save configuration to file
    ///
    /// Refuses to overwrite an existing file.
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let path = path.as_ref();
        if path.exists() {
            return Err(Error::already_exists(path.display().to_string()));
        }

        let toml_string =
            toml::to_string_pretty(config).context("Failed to serialize config to TOML")?;

        std::fs::write(path, toml_string).io_context("Failed to write config file")?;

        Ok(())
    }

    /// Get the configured file path, if any
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// The file `load` reads: the explicit path, else the first default
    /// location that exists
    ///
    /// An explicit path is returned even when it does not exist, in which
    /// case loading falls back to defaults and the environment.
    pub fn resolved_config_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(Self::find_default_config_path)
    }

    /// Log which file configuration came from
    ///
    /// Call once a subscriber is installed; loading itself runs before
    /// logging is configured.
    pub fn log_source(&self) {
        if let Some(path) = self.resolved_config_path() {
            log_config_loaded(&path, path.exists());
        }
    }

    /// Merge defaults, the TOML file and the environment
    fn figment(&self) -> Figment {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        if let Some(path) = self.resolved_config_path().filter(|p| p.exists()) {
            figment = figment.merge(Toml::file(path));
        }

        let prefix = format!("{CONFIG_ENV_PREFIX}{CONFIG_ENV_SEPARATOR}");
        figment.merge(Env::prefixed(&prefix).split(CONFIG_ENV_SEPARATOR))
    }

    /// First existing file among the default locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate application configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_server_config(config)?;
    validate_jwt_config(config)?;
    validate_seed_users(config)?;
    validate_client_config(config)?;
    Ok(())
}

fn validate_server_config(config: &AppConfig) -> Result<()> {
    if config.server.port == 0 {
        return Err(Error::configuration("Server port cannot be 0"));
    }
    Ok(())
}

fn validate_jwt_config(config: &AppConfig) -> Result<()> {
    let jwt = &config.auth.jwt;
    if jwt.secret.is_empty() {
        return Err(Error::configuration(
            "JWT secret cannot be empty; set AUTHD__AUTH__JWT__SECRET",
        ));
    }
    if jwt.secret.len() < JWT_SECRET_MIN_LENGTH {
        return Err(Error::configuration(format!(
            "JWT secret should be at least {JWT_SECRET_MIN_LENGTH} characters long"
        )));
    }
    if jwt.expiration_secs == 0 {
        return Err(Error::configuration("JWT expiration cannot be 0"));
    }
    if jwt.issuer.trim().is_empty() {
        return Err(Error::configuration("JWT issuer cannot be empty"));
    }
    Ok(())
}

fn validate_seed_users(config: &AppConfig) -> Result<()> {
    let mut seen = HashSet::new();
    for user in &config.auth.users {
        if user.username.is_empty() {
            return Err(Error::configuration("Seed user with empty username"));
        }
        if user.username.len() > USERNAME_MAX_LENGTH {
            return Err(Error::configuration(format!(
                "Seed username '{}' exceeds {USERNAME_MAX_LENGTH} characters",
                user.username
            )));
        }
        if !seen.insert(user.username.as_str()) {
            return Err(Error::configuration(format!(
                "Seed user '{}' is declared twice",
                user.username
            )));
        }
    }
    Ok(())
}

fn validate_client_config(config: &AppConfig) -> Result<()> {
    validate_client_timeout(&config.client)
}

fn validate_client_timeout(client: &ClientConfig) -> Result<()> {
    if client.timeout_secs == 0 {
        return Err(Error::configuration("Client timeout cannot be 0"));
    }
    Ok(())
}
