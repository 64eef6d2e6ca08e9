//! Authentication Service Use Case
//!
//! Single-shot login: look up the user, verify the password, issue a token.
//! Every failure leaves this service as either [`Error::Denied`] or
//! [`Error::Internal`]; raw store and crypto errors are logged here and never
//! returned to the caller.

use authd_domain::error::{Error, Result};
use authd_domain::{Claims, PasswordVerifier, TokenService, User, UserStore};
use std::sync::Arc;
use tracing::{debug, error, info};

/// Login orchestration over a user store, a password verifier and a token
/// service
#[derive(Clone)]
pub struct AuthService {
    user_store: Arc<dyn UserStore>,
    passwords: Arc<dyn PasswordVerifier>,
    tokens: Arc<dyn TokenService>,
}

impl AuthService {
    /// Create new auth service with injected dependencies
    pub fn new(
        user_store: Arc<dyn UserStore>,
        passwords: Arc<dyn PasswordVerifier>,
        tokens: Arc<dyn TokenService>,
    ) -> Self {
        Self {
            user_store,
            passwords,
            tokens,
        }
    }

    /// Authenticate `username`/`password` and return a signed access token
    ///
    /// # Errors
    ///
    /// - [`Error::Denied`] for an unknown username or a wrong password (the
    ///   two cases are indistinguishable)
    /// - [`Error::Internal`] when the store lookup, password check or token
    ///   signing fails
    pub async fn login(&self, username: &str, password: &str) -> Result<String> {
        let user = if username.is_empty() {
            None
        } else {
            self.user_store.find(username).await.map_err(|e| {
                error!(error = %e, "User store lookup failed");
                Error::internal("cannot find user")
            })?
        };

        let (user, matches) = self.check_password(user, password).await?;
        let user = match user {
            Some(user) if matches => user,
            _ => {
                debug!("Login denied");
                return Err(Error::Denied);
            }
        };

        let token = self.tokens.issue(&user).map_err(|e| {
            error!(error = %e, "Token issuance failed");
            Error::internal("cannot generate access token")
        })?;

        info!(subject = %user.username, role = %user.role, "Access token issued");
        Ok(token)
    }

    /// Verify a presented access token
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        self.tokens.verify(token)
    }

    /// Run the password check on the blocking pool
    ///
    /// Without a user a decoy verification still runs so both denial paths
    /// cost the same.
    async fn check_password(
        &self,
        user: Option<User>,
        candidate: &str,
    ) -> Result<(Option<User>, bool)> {
        let verifier = Arc::clone(&self.passwords);
        let candidate = candidate.to_owned();

        let outcome = tokio::task::spawn_blocking(move || {
            let matches = match &user {
                Some(user) => user.verify_password(&candidate, verifier.as_ref()),
                None => {
                    verifier.decoy_verify(&candidate);
                    Ok(false)
                }
            };
            matches.map(|m| (user, m))
        })
        .await;

        match outcome {
            Ok(Ok(checked)) => Ok(checked),
            Ok(Err(e)) => {
                error!(error = %e, "Password verification failed");
                Err(Error::internal("cannot verify password"))
            }
            Err(e) => {
                error!(error = %e, "Password verification task aborted");
                Err(Error::internal("cannot verify password"))
            }
        }
    }
}
