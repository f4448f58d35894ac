//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use flowboard_core::error::{AppError, ErrorKind};

/// Apply the embedded migrations (link tables and the resource tables
/// read by the redemption path).
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Applying database migrations");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}
