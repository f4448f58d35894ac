//! Manage-authority over shareable resources.
//!
//! A caller may create, list, and revoke links on a resource when they own
//! it or hold an editor grant on it.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use flowboard_core::error::AppError;
use flowboard_core::result::AppResult;
use flowboard_core::types::UserId;
use flowboard_entity::link::ResourceRef;

pub use memory::StaticAuthority;
pub use postgres::PgAuthority;

/// A caller's relationship to a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Standing {
    /// Owns the resource (or, for business units, its client).
    Owner,
    /// Holds an editor grant.
    Editor,
    /// Holds a viewer grant.
    Viewer,
}

impl Standing {
    /// Parse a stored permission grant.
    pub fn from_grant(role: &str) -> Option<Self> {
        match role {
            "owner" => Some(Self::Owner),
            "editor" => Some(Self::Editor),
            "viewer" => Some(Self::Viewer),
            _ => None,
        }
    }

    /// Whether this standing allows managing links.
    pub fn can_manage(&self) -> bool {
        matches!(self, Self::Owner | Self::Editor)
    }
}

/// Answers what standing a user has on a resource.
#[async_trait]
pub trait AuthorizationOracle: Send + Sync + std::fmt::Debug + 'static {
    /// The caller's standing, or `None` when they have no relationship.
    async fn standing(&self, resource: ResourceRef, user: UserId) -> AppResult<Option<Standing>>;
}

/// Fails with `Authorization` unless `user` may manage links on `resource`.
pub async fn require_manage(
    oracle: &dyn AuthorizationOracle,
    resource: ResourceRef,
    user: UserId,
) -> AppResult<Standing> {
    match oracle.standing(resource, user).await? {
        Some(standing) if standing.can_manage() => Ok(standing),
        other => {
            warn!(
                user_id = %user,
                resource = %resource,
                standing = ?other,
                "Manage-authority denied"
            );
            Err(AppError::authorization(
                "You do not have permission to manage links for this resource",
            ))
        }
    }
}
