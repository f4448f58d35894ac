//! Business unit access link management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use flowboard_core::types::{BusinessUnitId, LinkId};
use flowboard_entity::link::ResourceRef;

use crate::dto::request::CreateUnitLinkRequest;
use crate::dto::response::{CreatedLinkResponse, UnitLinkResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthUser, parse_id};
use crate::state::AppState;

/// POST /api/business-units/{bu_id}/links
pub async fn create_unit_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(bu_id): Path<String>,
    ApiJson(req): ApiJson<CreateUnitLinkRequest>,
) -> Result<(StatusCode, Json<CreatedLinkResponse>), ApiError> {
    let unit_id: BusinessUnitId = parse_id(&bu_id)?;

    let created = state
        .link_service
        .create_link(&auth, ResourceRef::BusinessUnit(unit_id), req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/business-units/{bu_id}/links
pub async fn list_unit_links(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(bu_id): Path<String>,
) -> Result<Json<Vec<UnitLinkResponse>>, ApiError> {
    let unit_id: BusinessUnitId = parse_id(&bu_id)?;

    let links = state
        .link_service
        .list_links(&auth, ResourceRef::BusinessUnit(unit_id))
        .await?;

    Ok(Json(
        links
            .into_iter()
            .map(|summary| UnitLinkResponse::from_summary(unit_id, summary))
            .collect(),
    ))
}

/// DELETE /api/business-units/{bu_id}/links/{link_id}
pub async fn revoke_unit_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((bu_id, link_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let unit_id: BusinessUnitId = parse_id(&bu_id)?;
    let link_id: LinkId = parse_id(&link_id)?;

    state
        .link_service
        .revoke_link(&auth, ResourceRef::BusinessUnit(unit_id), link_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
