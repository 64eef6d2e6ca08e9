//! Configuration management
//!
//! Layered configuration: built-in defaults, then a TOML file, then
//! `AUTHD__`-prefixed environment variables.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{
    AccessRules, AppConfig, AuthConfig, ClientConfig, JwtConfig, LoggingConfig,
    PasswordHashConfig, SeedUser, ServerConfig,
};
