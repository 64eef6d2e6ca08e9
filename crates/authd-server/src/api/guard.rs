//! Bearer token authentication and role-based access
//!
//! Protected handlers take an [`AuthenticatedUser`] argument. The guard reads
//! `Authorization: Bearer <token>`, verifies the token and then checks the
//! caller's role against the [`AccessPolicy`] entry for the matched route.
//! Rules are keyed on the route's declared path (e.g. `/auth/me`), so encoded
//! or non-canonical spellings of a request path resolve to the same rule.
//!
//! | Condition | Status |
//! |-----------|--------|
//! | Missing, malformed, tampered or expired token | 401 |
//! | Role not allowed for the path | 403 |

use super::handlers::AuthState;
use authd_domain::error::{Error, Result};
use authd_domain::{Claims, Role};
use authd_infrastructure::config::AccessRules;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};
use tracing::{debug, error};

/// Roles allowed per route path
#[derive(Debug, Clone, Default)]
pub struct AccessPolicy {
    rules: AccessRules,
}

impl AccessPolicy {
    /// Create a policy from configured rules
    pub fn new(rules: AccessRules) -> Self {
        Self { rules }
    }

    /// Whether `role` may call `path`
    ///
    /// Paths without a rule are open to any authenticated caller.
    pub fn allows(&self, path: &str, role: Role) -> bool {
        self.rules
            .get(path)
            .is_none_or(|roles| roles.contains(&role))
    }

    /// Like [`AccessPolicy::allows`], failing with `PermissionDenied`
    pub fn check(&self, path: &str, role: Role) -> Result<()> {
        if self.allows(path, role) {
            Ok(())
        } else {
            Err(Error::permission_denied(format!(
                "role '{role}' may not access {path}"
            )))
        }
    }
}

/// Request guard for bearer token authentication
///
/// ```rust,ignore
/// #[get("/protected")]
/// fn protected(user: AuthenticatedUser) -> String {
///     user.claims.sub
/// }
/// ```
#[derive(Debug)]
pub struct AuthenticatedUser {
    /// Verified token claims
    pub claims: Claims,
}

/// Reasons the guard rejected a request
#[derive(Debug)]
pub enum AuthGuardError {
    /// No `AuthState` is managed by this Rocket instance
    NotConfigured,
    /// Missing or non-bearer `Authorization` header
    MissingToken,
    /// Signature, structure or issuer check failed
    InvalidToken,
    /// Token past its expiry
    ExpiredToken,
    /// Token verification failed for a reason other than the token itself
    VerificationFailed,
    /// Role not in the path's access list
    Forbidden,
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedUser {
    type Error = AuthGuardError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(state) = request.rocket().state::<AuthState>() else {
            return Outcome::Error((Status::InternalServerError, AuthGuardError::NotConfigured));
        };

        let Some(token) = request
            .headers()
            .get_one("Authorization")
            .and_then(bearer_token)
        else {
            return Outcome::Error((Status::Unauthorized, AuthGuardError::MissingToken));
        };

        let claims = match state.auth.verify_token(token) {
            Ok(claims) => claims,
            Err(Error::TokenExpired) => {
                return Outcome::Error((Status::Unauthorized, AuthGuardError::ExpiredToken));
            }
            Err(e) if e.is_token_error() => {
                debug!(error = %e, "Rejected bearer token");
                return Outcome::Error((Status::Unauthorized, AuthGuardError::InvalidToken));
            }
            Err(e) => {
                error!(error = %e, "Bearer token verification failed");
                return Outcome::Error((
                    Status::InternalServerError,
                    AuthGuardError::VerificationFailed,
                ));
            }
        };

        // Guards only run once a route has matched
        let Some(route) = request.route() else {
            return Outcome::Error((Status::Forbidden, AuthGuardError::Forbidden));
        };
        if let Err(e) = state.policy.check(route.uri.path(), claims.role) {
            debug!(subject = %claims.sub, error = %e, "Access refused");
            return Outcome::Error((Status::Forbidden, AuthGuardError::Forbidden));
        }

        Outcome::Success(AuthenticatedUser { claims })
    }
}

/// Extract the token from a `Bearer <token>` header value
fn bearer_token(header: &str) -> Option<&str> {
    let (scheme, token) = header.split_once(' ')?;
    let token = token.trim();
    (scheme.eq_ignore_ascii_case("bearer") && !token.is_empty()).then_some(token)
}
