//! Bearer token → caller identity.

pub mod claims;
pub mod jwt;

use async_trait::async_trait;

use flowboard_core::result::AppResult;
use flowboard_core::types::UserId;

pub use claims::Claims;
pub use jwt::JwtIdentityProvider;

/// The authenticated caller behind a bearer token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// Caller's user id (the token subject).
    pub user_id: UserId,
    /// Email, when the provider includes it.
    pub email: Option<String>,
}

/// Resolves bearer tokens into identities.
///
/// Any rejection is an `Authentication` error.
#[async_trait]
pub trait IdentityProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Validate `token` and return the caller it identifies.
    async fn authenticate(&self, token: &str) -> AppResult<Identity>;
}
