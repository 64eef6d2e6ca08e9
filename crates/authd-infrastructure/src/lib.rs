//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns that support the application and domain layers.
//!
//! ## Module Categories
//!
//! ### Security & Authentication
//! | Module | Description |
//! |--------|-------------|
//! | [`crypto`] | Argon2id password hashing, JWT token manager, constant-time helpers |
//!
//! ### Data & Storage
//! | Module | Description |
//! |--------|-------------|
//! | [`store`] | Concurrent in-memory user store and startup seeding |
//!
//! ### Configuration
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-layered TOML + environment configuration |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

pub mod config;
pub mod constants;
pub mod crypto;
pub mod error_ext;
pub mod logging;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use error_ext::ErrorContext;
pub use utils::{ManualClock, SystemClock};
