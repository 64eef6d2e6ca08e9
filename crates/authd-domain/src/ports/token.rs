//! Token Service Port
//!
//! Defines the contract for issuing and verifying signed access tokens.

use crate::entities::{Claims, User};
use crate::error::Result;

/// Access token service interface
///
/// Implementations hold only immutable configuration, so a single instance
/// can be shared across concurrent requests.
pub trait TokenService: Send + Sync {
    /// Sign a new access token for `user`
    ///
    /// Fails only when the signing key is unusable.
    fn issue(&self, user: &User) -> Result<String>;

    /// Validate a token and return its claims
    ///
    /// Fails with `TokenInvalid` on a bad signature or structure and with
    /// `TokenExpired` once the current time reaches `exp`.
    fn verify(&self, token: &str) -> Result<Claims>;
}
