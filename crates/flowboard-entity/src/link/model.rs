//! Access link entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flowboard_core::types::{LinkId, UserId};

use super::resource::{LinkScope, ResourceRef};
use super::role::LinkRole;

/// A password-protected share link bound to one resource.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessLink {
    /// Unique link identifier (store-generated).
    pub id: LinkId,
    /// Which kind of resource the link belongs to.
    pub scope: LinkScope,
    /// ID of the owning resource.
    pub resource_id: Uuid,
    /// Board links always carry a role; business unit links never do.
    pub role: Option<LinkRole>,
    /// Argon2id PHC string.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Absolute expiry; `None` never expires.
    pub expires_at: Option<DateTime<Utc>>,
    /// When the link was created.
    pub created_at: DateTime<Utc>,
    /// Caller who created the link (business unit links only).
    pub created_by: Option<UserId>,
}

impl AccessLink {
    /// The resource this link grants access to.
    pub fn resource(&self) -> ResourceRef {
        ResourceRef::from_parts(self.scope, self.resource_id)
    }

    /// A link is dead once `now` reaches its expiry instant.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|expires| now >= expires)
    }

    /// Non-secret view of the link.
    pub fn summary(&self) -> LinkSummary {
        LinkSummary {
            id: self.id,
            role: self.role,
            expires_at: self.expires_at,
            created_at: self.created_at,
            created_by: self.created_by,
        }
    }
}

/// Data required to persist a new link.
#[derive(Debug, Clone)]
pub struct NewAccessLink {
    /// Owning resource.
    pub resource: ResourceRef,
    /// Normalized role (boards only).
    pub role: Option<LinkRole>,
    /// Hash of the generated secret.
    pub password_hash: String,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Creating caller, recorded for business unit links.
    pub created_by: Option<UserId>,
}

/// Listing view of a link. Carries no secret material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSummary {
    /// Link identifier.
    pub id: LinkId,
    /// Role (boards only).
    pub role: Option<LinkRole>,
    /// Optional expiry.
    pub expires_at: Option<DateTime<Utc>>,
    /// Creation time.
    pub created_at: DateTime<Utc>,
    /// Creating caller (business unit links only).
    pub created_by: Option<UserId>,
}
