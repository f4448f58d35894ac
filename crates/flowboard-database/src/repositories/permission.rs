//! Ownership and permission grant lookups.

use sqlx::PgPool;
use uuid::Uuid;

use flowboard_core::error::{AppError, ErrorKind};
use flowboard_core::result::AppResult;
use flowboard_core::types::{BoardId, BusinessUnitId, UserId};

/// Repository answering "who owns this" and "what was this user granted".
#[derive(Debug, Clone)]
pub struct PermissionRepository {
    pool: PgPool,
}

impl PermissionRepository {
    /// Create a new permission repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Owner of a board.
    pub async fn board_owner(&self, board_id: BoardId) -> AppResult<Option<UserId>> {
        sqlx::query_scalar::<_, Uuid>("SELECT owner_id FROM boards WHERE id = $1")
            .bind(board_id)
            .fetch_optional(&self.pool)
            .await
            .map(|owner| owner.map(UserId::from_uuid))
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to load board owner", e)
            })
    }

    /// Role granted to a user on a board via `board_permissions`.
    pub async fn board_grant(&self, board_id: BoardId, user_id: UserId) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT role FROM board_permissions WHERE board_id = $1 AND user_id = $2",
        )
        .bind(board_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Persistence, "Failed to load board permission", e)
        })
    }

    /// Owner of the client a business unit belongs to.
    pub async fn business_unit_owner(&self, unit_id: BusinessUnitId) -> AppResult<Option<UserId>> {
        sqlx::query_scalar::<_, Uuid>(
            "SELECT c.owner_id FROM business_units bu \
             JOIN clients c ON c.id = bu.client_id WHERE bu.id = $1",
        )
        .bind(unit_id)
        .fetch_optional(&self.pool)
        .await
        .map(|owner| owner.map(UserId::from_uuid))
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                "Failed to load business unit owner",
                e,
            )
        })
    }

    /// Role granted to a user on a business unit via `bu_permissions`.
    pub async fn business_unit_grant(
        &self,
        unit_id: BusinessUnitId,
        user_id: UserId,
    ) -> AppResult<Option<String>> {
        sqlx::query_scalar::<_, String>(
            "SELECT role FROM bu_permissions WHERE business_unit_id = $1 AND user_id = $2",
        )
        .bind(unit_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                "Failed to load business unit permission",
                e,
            )
        })
    }
}
