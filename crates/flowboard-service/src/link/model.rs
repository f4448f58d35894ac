//! Inputs and outputs of the link lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use flowboard_core::types::LinkId;
use flowboard_entity::link::{LinkRole, LinkScope, ResourceRef};

/// Parameters for creating a link.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateLinkRequest {
    /// Requested role; ignored for business unit links.
    pub role: Option<String>,
    /// Lifetime in hours. Missing, zero, or negative means no expiry.
    pub expires_in_hours: Option<i64>,
}

/// Result of creating a link. The only place the plaintext secret appears.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedLink {
    pub link_id: LinkId,
    pub password: String,
    pub role: Option<LinkRole>,
    pub expires_at: Option<DateTime<Utc>>,
    pub share_url: String,
}

/// Result of a successful verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifiedLink {
    pub link_id: LinkId,
    pub scope: LinkScope,
    pub resource_id: Uuid,
    pub role: Option<LinkRole>,
}

impl VerifiedLink {
    /// The resource the verified link unlocks.
    pub fn resource(&self) -> ResourceRef {
        ResourceRef::from_parts(self.scope, self.resource_id)
    }
}
