//! Application Layer - authd
//!
//! Use cases that orchestrate the domain ports. The layer owns no state of
//! its own: every collaborator is injected as a trait object, so many
//! service instances can share one user store.
//!
//! ## Use Cases
//!
//! - Login: credential check and access token issuance
//! - Token verification for protected calls
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `authd-domain`: entities, ports and errors
//! - `tokio` / `tracing` for the blocking pool and logging

pub mod use_cases;

pub use use_cases::AuthService;
