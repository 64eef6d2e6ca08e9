//! Infrastructure Ports
//!
//! Contracts for the technical capabilities the login flow depends on.
//!
//! | Port | Description |
//! |------|-------------|
//! | [`PasswordVerifier`] | One-way password hash verification |
//! | [`TokenService`] | Access token issuance and verification |
//! | [`Clock`] | Source of the current Unix time |

/// Clock port
pub mod clock;
/// Password verification port
pub mod password;
/// Token service port
pub mod token;

pub use clock::Clock;
pub use password::PasswordVerifier;
pub use token::TokenService;
