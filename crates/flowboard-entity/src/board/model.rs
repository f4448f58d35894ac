//! Board and snapshot models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use flowboard_core::types::{BoardId, UserId};

/// A legacy design board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Board {
    /// Unique board identifier.
    pub id: BoardId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
    /// Owning user.
    pub owner_id: UserId,
    /// When the board was created.
    pub created_at: DateTime<Utc>,
    /// When the board was last updated.
    pub updated_at: DateTime<Utc>,
}

/// A saved version of a board's canvas.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BoardSnapshot {
    /// Snapshot identifier.
    pub id: Uuid,
    /// Board the snapshot belongs to.
    pub board_id: BoardId,
    /// Monotonic version number.
    pub version: i32,
    /// Canvas contents.
    pub data: serde_json::Value,
    /// When the snapshot was last written.
    pub updated_at: DateTime<Utc>,
}
