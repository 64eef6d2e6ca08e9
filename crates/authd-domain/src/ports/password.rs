//! Password Verification Port
//!
//! Defines the contract for checking candidate passwords against stored
//! one-way hashes.

use crate::error::Result;

/// Password verification interface
pub trait PasswordVerifier: Send + Sync {
    /// Verify `candidate` against a stored hash
    ///
    /// Implementations re-hash the candidate with the algorithm, parameters
    /// and salt recorded in `hash` and compare in constant time. Returns
    /// `Ok(false)` on mismatch; errors are reserved for unusable hashes.
    fn verify_password(&self, candidate: &str, hash: &str) -> Result<bool>;

    /// Spend the cost of one verification without a stored hash
    ///
    /// Called when the username is unknown so the response time does not
    /// reveal whether the account exists.
    fn decoy_verify(&self, candidate: &str) {
        let _ = candidate;
    }
}
