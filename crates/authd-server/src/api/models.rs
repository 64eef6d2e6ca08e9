//! Request and response bodies

use authd_domain::Role;
use authd_domain::constants::DENIED_MESSAGE;
use rocket::http::Status;
use rocket::serde::json::Json;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Body of `POST /auth/login`
#[derive(Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    /// Username
    pub username: String,
    /// Plaintext password
    pub password: String,
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful login
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Signed access token
    pub access_token: String,
}

/// Identity behind a verified token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WhoAmIResponse {
    /// Token subject
    pub username: String,
    /// Role carried by the token
    pub role: Role,
    /// Expiry as Unix seconds
    pub expires_at: u64,
}

/// Liveness probe response
#[derive(Debug, Serialize, Deserialize)]
pub struct LiveResponse {
    /// Always `"ok"`
    pub status: String,
}

/// Error body shared by every failure response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error kind
    pub error: String,
    /// Human-readable message
    pub message: String,
}

impl ErrorResponse {
    /// Create an error body
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
        }
    }

    /// Unknown username or wrong password
    pub fn denied() -> (Status, Json<Self>) {
        (
            Status::Unauthorized,
            Json(Self::new("denied", DENIED_MESSAGE)),
        )
    }

    /// Server-side failure with a caller-safe message
    pub fn internal(message: impl Into<String>) -> (Status, Json<Self>) {
        (
            Status::InternalServerError,
            Json(Self::new("internal", message)),
        )
    }
}
