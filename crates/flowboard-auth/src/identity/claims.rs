//! Claims carried by identity provider access tokens.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The subset of Supabase-style access token claims the gateway reads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the user ID.
    pub sub: Uuid,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Audience, normally `authenticated`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<String>,
    /// User email.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// Provider role (`authenticated`, `anon`, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}
