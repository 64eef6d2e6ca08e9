//! Configuration types module

pub mod app;
pub mod auth;
pub mod client;
pub mod logging;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AccessRules, AuthConfig, JwtConfig, PasswordHashConfig, SeedUser};
pub use client::ClientConfig;
pub use logging::LoggingConfig;
pub use server::ServerConfig;
