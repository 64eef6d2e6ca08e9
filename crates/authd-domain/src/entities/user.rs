//! User records and roles

use crate::error::Result;
use crate::ports::PasswordVerifier;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried by a user and embedded in issued tokens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access
    Admin,
    /// Regular account
    User,
}

impl Role {
    /// Lowercase tag used on the wire and in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A credential record owned by the user store
///
/// The password is held only as a salted one-way hash (PHC string).
#[derive(Clone)]
pub struct User {
    /// Unique username (store key)
    pub username: String,
    /// User role
    pub role: Role,
    password_hash: String,
}

impl User {
    /// Create a user from an already computed password hash
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
            password_hash: password_hash.into(),
        }
    }

    /// Stored password hash
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    /// Check a candidate password against the stored hash
    pub fn verify_password(&self, candidate: &str, verifier: &dyn PasswordVerifier) -> Result<bool> {
        verifier.verify_password(candidate, &self.password_hash)
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("username", &self.username)
            .field("role", &self.role)
            .field("password_hash", &"<redacted>")
            .finish()
    }
}
