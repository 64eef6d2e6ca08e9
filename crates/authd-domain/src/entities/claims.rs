//! Access token claims
//!
//! Defines the payload signed into every access token.

use super::user::{Role, User};
use serde::{Deserialize, Serialize};

/// JWT claims structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (username)
    pub sub: String,
    /// User role
    pub role: Role,
    /// Issued at timestamp
    pub iat: u64,
    /// Expiration timestamp
    pub exp: u64,
    /// Issuer
    pub iss: String,
    /// Token ID
    pub jti: String,
}

impl Claims {
    /// Create claims for a user issued at `issued_at`
    ///
    /// `exp` is always `iat + lifetime_secs`.
    pub fn for_user(
        user: &User,
        issuer: impl Into<String>,
        token_id: impl Into<String>,
        issued_at: u64,
        lifetime_secs: u64,
    ) -> Self {
        Self {
            sub: user.username.clone(),
            role: user.role,
            iat: issued_at,
            exp: issued_at.saturating_add(lifetime_secs),
            iss: issuer.into(),
            jti: token_id.into(),
        }
    }

    /// Check if the token has expired at `now`
    pub fn is_expired_at(&self, now: u64) -> bool {
        now >= self.exp
    }

    /// Configured lifetime the token was issued with
    pub fn lifetime_secs(&self) -> u64 {
        self.exp.saturating_sub(self.iat)
    }
}
