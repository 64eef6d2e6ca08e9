//! Authentication configuration types

use crate::constants::{
    ARGON2_DEFAULT_ITERATIONS, ARGON2_DEFAULT_MEMORY_KIB, ARGON2_DEFAULT_PARALLELISM,
    JWT_DEFAULT_EXPIRATION_SECS, JWT_DEFAULT_ISSUER,
};
use authd_domain::Role;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Route path to the roles allowed to call it
///
/// A path without an entry is open to any authenticated caller.
pub type AccessRules = HashMap<String, Vec<Role>>;

/// JWT configuration
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JwtConfig {
    /// HMAC signing secret
    ///
    /// **REQUIRED**. Configure via `AUTHD__AUTH__JWT__SECRET` or
    /// `auth.jwt.secret` in the config file. At least 32 characters.
    pub secret: String,

    /// Access token lifetime in seconds
    pub expiration_secs: u64,

    /// Value of the `iss` claim, checked on verification
    pub issuer: String,
}

/// Returns default JWT configuration with:
/// - Empty secret (MUST be configured)
/// - 15 minute token lifetime
impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            expiration_secs: JWT_DEFAULT_EXPIRATION_SECS,
            issuer: JWT_DEFAULT_ISSUER.to_string(),
        }
    }
}

impl fmt::Debug for JwtConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JwtConfig")
            .field("secret", &"<redacted>")
            .field("expiration_secs", &self.expiration_secs)
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// Argon2id cost parameters used for new hashes
///
/// Existing hashes are always verified with the parameters they carry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PasswordHashConfig {
    /// Memory cost in KiB
    pub memory_kib: u32,

    /// Number of passes
    pub iterations: u32,

    /// Degree of parallelism
    pub parallelism: u32,
}

impl Default for PasswordHashConfig {
    fn default() -> Self {
        Self {
            memory_kib: ARGON2_DEFAULT_MEMORY_KIB,
            iterations: ARGON2_DEFAULT_ITERATIONS,
            parallelism: ARGON2_DEFAULT_PARALLELISM,
        }
    }
}

/// User created in the store at startup
#[derive(Clone, Serialize, Deserialize)]
pub struct SeedUser {
    /// Username
    pub username: String,

    /// Plaintext password, hashed before it reaches the store
    pub password: String,

    /// Role granted to the user
    pub role: Role,
}

impl fmt::Debug for SeedUser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeedUser")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("role", &self.role)
            .finish()
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// JWT configuration
    pub jwt: JwtConfig,

    /// Password hashing cost
    pub password: PasswordHashConfig,

    /// Users seeded into the store at startup
    pub users: Vec<SeedUser>,

    /// Roles allowed per protected route
    pub access: AccessRules,
}

/// Returns default authentication configuration with:
/// - Default JWT and Argon2id settings
/// - No seeded users
/// - `/auth/me` open to both roles
impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt: JwtConfig::default(),
            password: PasswordHashConfig::default(),
            users: Vec::new(),
            access: HashMap::from([("/auth/me".to_string(), vec![Role::Admin, Role::User])]),
        }
    }
}
