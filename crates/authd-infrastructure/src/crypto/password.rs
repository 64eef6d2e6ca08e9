//! Password hashing service using Argon2id

use super::utils::HashUtils;
use crate::config::PasswordHashConfig;
use crate::constants::DECOY_PASSWORD;
use argon2::{
    Algorithm, Argon2, Params, PasswordHasher, Version,
    password_hash::{PasswordHash, SaltString, rand_core::OsRng},
};
use authd_domain::PasswordVerifier;
use authd_domain::error::{Error, Result};

/// Password hashing service using Argon2id
///
/// New hashes use the configured cost; verification re-derives the hash with
/// the algorithm, version, parameters and salt stored in the PHC string.
#[derive(Clone)]
pub struct PasswordService {
    /// Argon2 instance for new hashes
    argon2: Argon2<'static>,

    /// Hash of a fixed input, verified against when the user is unknown
    decoy_hash: String,
}

impl PasswordService {
    /// Create a password service with the given cost parameters
    pub fn new(config: &PasswordHashConfig) -> Result<Self> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| Error::configuration(format!("Invalid Argon2 parameters: {e}")))?;

        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
        let decoy_hash = hash_with(&argon2, DECOY_PASSWORD)?;

        Ok(Self { argon2, decoy_hash })
    }

    /// Hash a password using Argon2id with a fresh random salt
    pub fn hash_password(&self, password: &str) -> Result<String> {
        hash_with(&self.argon2, password)
    }
}

impl PasswordVerifier for PasswordService {
    fn verify_password(&self, candidate: &str, hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| Error::infrastructure(format!("Invalid password hash format: {e}")))?;
        let (Some(salt), Some(expected)) = (parsed.salt, parsed.hash) else {
            return Err(Error::infrastructure(
                "Invalid password hash format: missing salt or output",
            ));
        };
        let params = Params::try_from(&parsed)
            .map_err(|e| Error::infrastructure(format!("Invalid Argon2 parameters: {e}")))?;

        let computed = Argon2::default()
            .hash_password_customized(
                candidate.as_bytes(),
                Some(parsed.algorithm),
                parsed.version,
                params,
                salt,
            )
            .map_err(|e| Error::infrastructure(format!("Password hashing failed: {e}")))?;
        let Some(actual) = computed.hash else {
            return Err(Error::infrastructure("Password hashing produced no output"));
        };

        Ok(HashUtils::constant_time_eq(
            actual.as_bytes(),
            expected.as_bytes(),
        ))
    }

    fn decoy_verify(&self, candidate: &str) {
        let _ = self.verify_password(candidate, &self.decoy_hash);
    }
}

fn hash_with(argon2: &Argon2<'_>, password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);

    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| Error::infrastructure(format!("Password hashing failed: {e}")))?;

    Ok(password_hash.to_string())
}
