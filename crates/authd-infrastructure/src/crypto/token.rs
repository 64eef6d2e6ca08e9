//! Access token manager (JWT, HS256)

use crate::config::JwtConfig;
use authd_domain::error::{Error, Result};
use authd_domain::{Claims, Clock, TokenService, User};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use std::sync::Arc;
use uuid::Uuid;

/// Stateless HS256 signer and verifier
///
/// Holds only the immutable key material, issuer and lifetime, so one
/// instance is shared by every request.
pub struct TokenManager {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    issuer: String,
    lifetime_secs: u64,
    clock: Arc<dyn Clock>,
}

impl TokenManager {
    /// Build a token manager from JWT configuration
    ///
    /// Fails with a configuration error for an empty secret or a zero lifetime.
    pub fn new(config: &JwtConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        if config.secret.is_empty() {
            return Err(Error::configuration("JWT secret cannot be empty"));
        }
        if config.expiration_secs == 0 {
            return Err(Error::configuration("JWT expiration cannot be 0"));
        }

        // Expiry is checked against the injected clock after decoding
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_issuer(&[&config.issuer]);
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.secret.as_bytes()),
            validation,
            issuer: config.issuer.clone(),
            lifetime_secs: config.expiration_secs,
            clock,
        })
    }
}

impl TokenService for TokenManager {
    fn issue(&self, user: &User) -> Result<String> {
        let claims = Claims::for_user(
            user,
            self.issuer.as_str(),
            Uuid::new_v4().to_string(),
            self.clock.now_unix_secs(),
            self.lifetime_secs,
        );

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| Error::infrastructure_with_source("Token signing failed", e))
    }

    fn verify(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => Error::TokenExpired,
                _ => Error::token_invalid(e.to_string()),
            }
        })?;

        if data.claims.is_expired_at(self.clock.now_unix_secs()) {
            return Err(Error::TokenExpired);
        }

        Ok(data.claims)
    }
}
