//! Public (unauthenticated) link redemption handlers.
//!
//! Redemption is two-step: POST the password to `verify`, then GET the
//! payload with the same password as `?token=`. Both steps run the full
//! expiry and password checks.

use axum::Json;
use axum::extract::{Path, Query, State};

use flowboard_core::types::LinkId;
use flowboard_service::gated::{SharedBoard, SharedBusinessUnit, UnitLinkVerification};

use crate::dto::request::{TokenQuery, VerifyLinkRequest};
use crate::dto::response::BoardVerifyResponse;
use crate::error::ApiError;
use crate::extractors::{ApiJson, parse_id};
use crate::state::AppState;

/// POST /api/public/links/{link_id}/verify
pub async fn verify_board_link(
    State(state): State<AppState>,
    Path(link_id): Path<String>,
    ApiJson(req): ApiJson<VerifyLinkRequest>,
) -> Result<Json<BoardVerifyResponse>, ApiError> {
    let link_id: LinkId = parse_id(&link_id)?;

    let verified = state
        .gated_service
        .verify_board_link(link_id, &req.password)
        .await?;

    Ok(Json(verified.into()))
}

/// GET /api/public/links/{link_id}/board?token=
pub async fn get_shared_board(
    State(state): State<AppState>,
    Path(link_id): Path<String>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<SharedBoard>, ApiError> {
    let link_id: LinkId = parse_id(&link_id)?;

    let shared = state
        .gated_service
        .fetch_board(link_id, &query.token)
        .await?;

    Ok(Json(shared))
}

/// POST /api/public/unit-links/{link_id}/verify
pub async fn verify_unit_link(
    State(state): State<AppState>,
    Path(link_id): Path<String>,
    ApiJson(req): ApiJson<VerifyLinkRequest>,
) -> Result<Json<UnitLinkVerification>, ApiError> {
    let link_id: LinkId = parse_id(&link_id)?;

    let verified = state
        .gated_service
        .verify_unit_link(link_id, &req.password)
        .await?;

    Ok(Json(verified))
}

/// GET /api/public/unit-links/{link_id}/business-unit?token=
pub async fn get_shared_business_unit(
    State(state): State<AppState>,
    Path(link_id): Path<String>,
    Query(query): Query<TokenQuery>,
) -> Result<Json<SharedBusinessUnit>, ApiError> {
    let link_id: LinkId = parse_id(&link_id)?;

    let shared = state
        .gated_service
        .fetch_business_unit(link_id, &query.token)
        .await?;

    Ok(Json(shared))
}
