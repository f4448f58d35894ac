//! HS256 JWT validation against the identity provider's shared secret.

use async_trait::async_trait;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use tracing::debug;

use flowboard_core::config::AuthConfig;
use flowboard_core::error::AppError;
use flowboard_core::result::AppResult;
use flowboard_core::types::UserId;

use super::claims::Claims;
use super::{Identity, IdentityProvider};

/// Validates identity provider access tokens locally.
#[derive(Clone)]
pub struct JwtIdentityProvider {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtIdentityProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtIdentityProvider")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtIdentityProvider {
    /// Creates a provider from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;
        match &config.jwt_audience {
            Some(audience) => validation.set_audience(&[audience.as_str()]),
            None => validation.validate_aud = false,
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    fn decode_claims(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::authentication("Token has expired")
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::authentication("Invalid token signature")
                }
                jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                    AppError::authentication("Invalid token audience")
                }
                _ => AppError::authentication(format!("Token validation failed: {e}")),
            })
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn authenticate(&self, token: &str) -> AppResult<Identity> {
        let claims = self.decode_claims(token)?;
        debug!(user_id = %claims.sub, "Bearer token accepted");

        Ok(Identity {
            user_id: UserId::from_uuid(claims.sub),
            email: claims.email,
        })
    }
}
