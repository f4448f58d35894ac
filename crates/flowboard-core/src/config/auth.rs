//! Identity provider configuration.

use serde::{Deserialize, Serialize};

/// Bearer token validation settings.
///
/// Tokens are HS256 JWTs issued by the external identity provider; the
/// `sub` claim carries the caller's user id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret used to verify token signatures.
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Expected `aud` claim. `None` disables audience validation.
    #[serde(default = "default_audience")]
    pub jwt_audience: Option<String>,
    /// Allowed clock skew in seconds when checking `exp`.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_audience: default_audience(),
            leeway_seconds: default_leeway(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_audience() -> Option<String> {
    Some("authenticated".to_string())
}

fn default_leeway() -> u64 {
    5
}
