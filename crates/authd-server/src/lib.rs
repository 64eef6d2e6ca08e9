//! # authd Server
//!
//! HTTP transport, login client and process wiring for the authd
//! authentication service.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use authd_server::run_server;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // authd.toml in the working directory + AUTHD__* environment
//!     run_server(None).await
//! }
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`api::AuthState`] | Rocket-managed login service and access policy |
//! | [`api::AuthenticatedUser`] | Bearer token request guard |
//! | [`transport::AuthClient`] | Login client with a per-call deadline |

pub mod api;
pub mod init;
pub mod transport;

pub use init::{build_state, run_init_config, run_login, run_server};
