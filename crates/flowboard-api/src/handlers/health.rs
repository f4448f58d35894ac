//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /api/health
///
/// Pings Postgres when the stores are database-backed and answers 503 if the
/// ping fails.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let (code, database) = match &state.database {
        None => (StatusCode::OK, "memory"),
        Some(db) => match db.health_check().await {
            Ok(_) => (StatusCode::OK, "ok"),
            Err(e) => {
                warn!(error = %e, "Database health check failed");
                (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
            }
        },
    };

    let status = if code.is_success() { "ok" } else { "unavailable" };
    (
        code,
        Json(HealthResponse {
            status: status.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database.to_string(),
        }),
    )
}
