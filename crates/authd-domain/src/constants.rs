//! Domain layer constants
//!
//! Infrastructure-specific constants remain in `authd_infrastructure::constants`.

/// Message returned for every invalid-credential condition.
///
/// Unknown usernames and wrong passwords share it so callers cannot
/// enumerate accounts.
pub const DENIED_MESSAGE: &str = "incorrect username/password";

/// Maximum accepted username length
pub const USERNAME_MAX_LENGTH: usize = 64;
