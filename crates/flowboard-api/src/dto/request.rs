//! Request DTOs.

use serde::{Deserialize, Serialize};

use flowboard_service::link::CreateLinkRequest;

/// POST /api/boards/{id}/links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoardLinkRequest {
    /// `viewer` or `editor`; anything else becomes `viewer`.
    #[serde(default)]
    pub role: Option<String>,
    /// Hours until expiry.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl From<CreateBoardLinkRequest> for CreateLinkRequest {
    fn from(req: CreateBoardLinkRequest) -> Self {
        Self {
            role: req.role,
            expires_in_hours: req.expires_in,
        }
    }
}

/// POST /api/business-units/{buId}/links
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUnitLinkRequest {
    /// Hours until expiry.
    #[serde(default)]
    pub expires_in: Option<i64>,
}

impl From<CreateUnitLinkRequest> for CreateLinkRequest {
    fn from(req: CreateUnitLinkRequest) -> Self {
        Self {
            role: None,
            expires_in_hours: req.expires_in,
        }
    }
}

/// POST /api/public/.../verify
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerifyLinkRequest {
    #[serde(default)]
    pub password: String,
}

/// `?token=` on the public fetch routes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenQuery {
    #[serde(default)]
    pub token: String,
}
