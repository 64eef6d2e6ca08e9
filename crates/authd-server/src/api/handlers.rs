//! HTTP handlers for login, identity and liveness

use super::guard::{AccessPolicy, AuthenticatedUser};
use super::models::{ErrorResponse, LiveResponse, LoginRequest, LoginResponse, WhoAmIResponse};
use authd_application::AuthService;
use authd_domain::error::Error;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get, post};
use std::sync::Arc;
use tracing::warn;

/// Shared state managed by Rocket
#[derive(Clone)]
pub struct AuthState {
    /// Login use case
    pub auth: AuthService,
    /// Role rules for protected routes
    pub policy: Arc<AccessPolicy>,
}

impl AuthState {
    /// Create handler state
    pub fn new(auth: AuthService, policy: AccessPolicy) -> Self {
        Self {
            auth,
            policy: Arc::new(policy),
        }
    }
}

/// Exchange credentials for an access token
///
/// POST /auth/login
#[post("/auth/login", format = "json", data = "<request>")]
pub async fn login(
    state: &State<AuthState>,
    request: Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (Status, Json<ErrorResponse>)> {
    match state.auth.login(&request.username, &request.password).await {
        Ok(access_token) => Ok(Json(LoginResponse { access_token })),
        Err(Error::Denied) => Err(ErrorResponse::denied()),
        Err(Error::Internal { message }) => Err(ErrorResponse::internal(message)),
        Err(e) => {
            warn!(error = %e, "Unclassified login failure");
            Err(ErrorResponse::internal("internal error"))
        }
    }
}

/// Identity behind the presented token (protected)
///
/// GET /auth/me
#[get("/auth/me")]
pub fn me(user: AuthenticatedUser) -> Json<WhoAmIResponse> {
    Json(WhoAmIResponse {
        username: user.claims.sub,
        role: user.claims.role,
        expires_at: user.claims.exp,
    })
}

/// Liveness probe
///
/// GET /live
#[get("/live")]
pub fn live() -> Json<LiveResponse> {
    Json(LiveResponse {
        status: "ok".to_string(),
    })
}
