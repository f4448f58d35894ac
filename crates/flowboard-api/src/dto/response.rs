//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use flowboard_core::types::{BoardId, BusinessUnitId, LinkId, UserId};
use flowboard_entity::link::{LinkRole, LinkSummary};
use flowboard_service::link::{CreatedLink, VerifiedLink};

/// Creation result. The plaintext password appears here and nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedLinkResponse {
    pub link_id: LinkId,
    pub password: String,
    pub expires_at: Option<DateTime<Utc>>,
    pub share_url: String,
}

impl From<CreatedLink> for CreatedLinkResponse {
    fn from(link: CreatedLink) -> Self {
        Self {
            link_id: link.link_id,
            password: link.password,
            expires_at: link.expires_at,
            share_url: link.share_url,
        }
    }
}

/// Board link listing entry. Listing rows keep snake_case field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardLinkResponse {
    pub id: LinkId,
    pub board_id: BoardId,
    pub role: LinkRole,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl BoardLinkResponse {
    pub fn from_summary(board_id: BoardId, summary: LinkSummary) -> Self {
        Self {
            id: summary.id,
            board_id,
            role: summary.role.unwrap_or(LinkRole::Viewer),
            expires_at: summary.expires_at,
            created_at: summary.created_at,
        }
    }
}

/// Business unit link listing entry, snake_case like board listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitLinkResponse {
    pub id: LinkId,
    pub business_unit_id: BusinessUnitId,
    pub expires_at: Option<DateTime<Utc>>,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}

impl UnitLinkResponse {
    pub fn from_summary(business_unit_id: BusinessUnitId, summary: LinkSummary) -> Self {
        Self {
            id: summary.id,
            business_unit_id,
            expires_at: summary.expires_at,
            created_by: summary.created_by,
            created_at: summary.created_at,
        }
    }
}

/// Successful board link verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardVerifyResponse {
    pub board_id: BoardId,
    pub role: LinkRole,
}

impl From<VerifiedLink> for BoardVerifyResponse {
    fn from(verified: VerifiedLink) -> Self {
        Self {
            board_id: BoardId::from_uuid(verified.resource_id),
            role: verified.role.unwrap_or(LinkRole::Viewer),
        }
    }
}

/// Body of `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok`, or `unavailable` when the database ping fails.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `ok`, `unavailable`, or `memory` when no database is configured.
    pub database: String,
}
