//! Board access link management handlers.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;

use flowboard_core::types::{BoardId, LinkId};
use flowboard_entity::link::ResourceRef;

use crate::dto::request::CreateBoardLinkRequest;
use crate::dto::response::{BoardLinkResponse, CreatedLinkResponse};
use crate::error::ApiError;
use crate::extractors::{ApiJson, AuthUser, parse_id};
use crate::state::AppState;

/// POST /api/boards/{id}/links
pub async fn create_board_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<CreateBoardLinkRequest>,
) -> Result<(StatusCode, Json<CreatedLinkResponse>), ApiError> {
    let board_id: BoardId = parse_id(&id)?;

    let created = state
        .link_service
        .create_link(&auth, ResourceRef::Board(board_id), req.into())
        .await?;

    Ok((StatusCode::CREATED, Json(created.into())))
}

/// GET /api/boards/{id}/links
pub async fn list_board_links(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<BoardLinkResponse>>, ApiError> {
    let board_id: BoardId = parse_id(&id)?;

    let links = state
        .link_service
        .list_links(&auth, ResourceRef::Board(board_id))
        .await?;

    Ok(Json(
        links
            .into_iter()
            .map(|summary| BoardLinkResponse::from_summary(board_id, summary))
            .collect(),
    ))
}

/// DELETE /api/boards/{id}/links/{link_id}
pub async fn revoke_board_link(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((id, link_id)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let board_id: BoardId = parse_id(&id)?;
    let link_id: LinkId = parse_id(&link_id)?;

    state
        .link_service
        .revoke_link(&auth, ResourceRef::Board(board_id), link_id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
