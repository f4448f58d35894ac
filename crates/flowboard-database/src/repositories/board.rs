//! Board repository implementation.

use sqlx::PgPool;

use flowboard_core::error::{AppError, ErrorKind};
use flowboard_core::result::AppResult;
use flowboard_core::types::BoardId;
use flowboard_entity::board::{Board, BoardSnapshot};

/// Read-only repository for boards and their snapshots.
#[derive(Debug, Clone)]
pub struct BoardRepository {
    pool: PgPool,
}

impl BoardRepository {
    /// Create a new board repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a board by ID.
    pub async fn find_by_id(&self, id: BoardId) -> AppResult<Option<Board>> {
        sqlx::query_as::<_, Board>(
            "SELECT id, name, description, owner_id, created_at, updated_at \
             FROM boards WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Persistence, "Failed to find board", e))
    }

    /// The most recently updated snapshot for a board.
    pub async fn latest_snapshot(&self, id: BoardId) -> AppResult<Option<BoardSnapshot>> {
        sqlx::query_as::<_, BoardSnapshot>(
            "SELECT id, board_id, version, data, updated_at FROM board_snapshots \
             WHERE board_id = $1 ORDER BY updated_at DESC LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Persistence, "Failed to load board snapshot", e)
        })
    }
}
