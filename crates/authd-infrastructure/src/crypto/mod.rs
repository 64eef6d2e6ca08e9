//! Cryptographic services module
//!
//! This module provides cryptographic primitives for:
//! - Password hashing with Argon2id
//! - HS256 access token issuance and verification
//! - Constant-time comparison

mod password;
mod token;
mod utils;

pub use password::PasswordService;
pub use token::TokenManager;
pub use utils::HashUtils;
