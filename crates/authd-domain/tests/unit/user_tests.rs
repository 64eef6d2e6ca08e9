//! Unit tests for users and roles

use authd_domain::{Error, PasswordVerifier, Result, Role, User};

/// Verifier that accepts a single fixed password regardless of hash
struct FixedVerifier(&'static str);

impl PasswordVerifier for FixedVerifier {
    fn verify_password(&self, candidate: &str, _hash: &str) -> Result<bool> {
        Ok(candidate == self.0)
    }
}

/// Verifier that rejects every hash as malformed
struct BrokenVerifier;

impl PasswordVerifier for BrokenVerifier {
    fn verify_password(&self, _candidate: &str, _hash: &str) -> Result<bool> {
        Err(Error::infrastructure("Invalid password hash format"))
    }
}

#[test]
fn test_role_serde_is_lowercase() {
    let json = serde_json::to_string(&Role::Admin).unwrap();
    assert_eq!(json, "\"admin\"");
    let role: Role = serde_json::from_str("\"user\"").unwrap();
    assert_eq!(role, Role::User);
}

#[test]
fn test_user_debug_redacts_hash() {
    let user = User::new("alice", "$argon2id$v=19$secret-hash", Role::User);
    let debug = format!("{user:?}");
    assert!(debug.contains("alice"));
    assert!(!debug.contains("secret-hash"));
}

#[test]
fn test_verify_password_delegates_to_verifier() {
    let user = User::new("alice", "$argon2id$stub", Role::User);
    assert!(user.verify_password("s3cret", &FixedVerifier("s3cret")).unwrap());
    assert!(!user.verify_password("wrong", &FixedVerifier("s3cret")).unwrap());
}

#[test]
fn test_verify_password_propagates_hash_errors() {
    let user = User::new("alice", "garbage", Role::User);
    assert!(user.verify_password("s3cret", &BrokenVerifier).is_err());
}
