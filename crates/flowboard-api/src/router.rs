//! Route definitions for the Flowboard HTTP API.
//!
//! All routes are mounted under `/api`. Management routes require a bearer
//! token (enforced by the `AuthUser` extractor); `/public` routes do not.

use axum::{
    Router,
    routing::{delete, get, post},
};

use crate::handlers;
use crate::state::AppState;

/// Build the API router without cross-cutting layers.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(board_link_routes())
        .merge(unit_link_routes())
        .merge(public_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Board link management
fn board_link_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/boards/{id}/links",
            post(handlers::board_links::create_board_link)
                .get(handlers::board_links::list_board_links),
        )
        .route(
            "/boards/{id}/links/{link_id}",
            delete(handlers::board_links::revoke_board_link),
        )
}

/// Business unit link management
fn unit_link_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/business-units/{bu_id}/links",
            post(handlers::unit_links::create_unit_link)
                .get(handlers::unit_links::list_unit_links),
        )
        .route(
            "/business-units/{bu_id}/links/{link_id}",
            delete(handlers::unit_links::revoke_unit_link),
        )
}

/// Anonymous redemption
fn public_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/public/links/{link_id}/verify",
            post(handlers::public::verify_board_link),
        )
        .route(
            "/public/links/{link_id}/board",
            get(handlers::public::get_shared_board),
        )
        .route(
            "/public/unit-links/{link_id}/verify",
            post(handlers::public::verify_unit_link),
        )
        .route(
            "/public/unit-links/{link_id}/business-unit",
            get(handlers::public::get_shared_business_unit),
        )
}

fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
