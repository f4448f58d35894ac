//! Access link repository implementation.
//!
//! Board and business unit links live in separate tables with slightly
//! different columns; both decode into [`AccessLink`].

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::warn;
use uuid::Uuid;

use flowboard_core::error::{AppError, ErrorKind};
use flowboard_core::result::AppResult;
use flowboard_core::types::{LinkId, UserId};
use flowboard_entity::link::{AccessLink, LinkRole, LinkScope, NewAccessLink, ResourceRef};

use crate::store::LinkStore;

const BOARD_COLUMNS: &str = "id, board_id, role, password_hash, expires_at, created_at";
const UNIT_COLUMNS: &str =
    "id, business_unit_id, password_hash, expires_at, created_by, created_at";

/// Raw `board_access_links` row.
#[derive(Debug, FromRow)]
struct BoardLinkRow {
    id: Uuid,
    board_id: Uuid,
    role: String,
    password_hash: String,
    expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<BoardLinkRow> for AccessLink {
    type Error = AppError;

    fn try_from(row: BoardLinkRow) -> Result<Self, Self::Error> {
        let role = LinkRole::parse(&row.role).ok_or_else(|| {
            AppError::persistence(format!(
                "Board link {} has unknown role '{}'",
                row.id, row.role
            ))
        })?;
        if row.password_hash.is_empty() {
            return Err(AppError::persistence(format!(
                "Board link {} has an empty password hash",
                row.id
            )));
        }
        Ok(AccessLink {
            id: LinkId::from_uuid(row.id),
            scope: LinkScope::Board,
            resource_id: row.board_id,
            role: Some(role),
            password_hash: row.password_hash,
            expires_at: row.expires_at,
            created_at: row.created_at,
            created_by: None,
        })
    }
}

/// Raw `bu_access_links` row.
#[derive(Debug, FromRow)]
struct UnitLinkRow {
    id: Uuid,
    business_unit_id: Uuid,
    password_hash: String,
    expires_at: Option<DateTime<Utc>>,
    created_by: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl TryFrom<UnitLinkRow> for AccessLink {
    type Error = AppError;

    fn try_from(row: UnitLinkRow) -> Result<Self, Self::Error> {
        if row.password_hash.is_empty() {
            return Err(AppError::persistence(format!(
                "Business unit link {} has an empty password hash",
                row.id
            )));
        }
        Ok(AccessLink {
            id: LinkId::from_uuid(row.id),
            scope: LinkScope::BusinessUnit,
            resource_id: row.business_unit_id,
            role: None,
            password_hash: row.password_hash,
            expires_at: row.expires_at,
            created_at: row.created_at,
            created_by: row.created_by.map(UserId::from_uuid),
        })
    }
}

/// Decode rows, dropping (and logging) the ones that do not form a valid link.
fn decode_rows<R>(rows: Vec<R>) -> Vec<AccessLink>
where
    AccessLink: TryFrom<R, Error = AppError>,
{
    rows.into_iter()
        .filter_map(|row| match AccessLink::try_from(row) {
            Ok(link) => Some(link),
            Err(e) => {
                warn!(error = %e, "Skipping malformed access link row");
                None
            }
        })
        .collect()
}

/// Repository for both access link tables.
#[derive(Debug, Clone)]
pub struct LinkRepository {
    pool: PgPool,
}

impl LinkRepository {
    /// Create a new link repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkStore for LinkRepository {
    async fn insert(&self, link: &NewAccessLink) -> AppResult<AccessLink> {
        let inserted = match link.resource {
            ResourceRef::Board(board_id) => {
                let role = link.role.unwrap_or(LinkRole::Viewer);
                sqlx::query_as::<_, BoardLinkRow>(&format!(
                    "INSERT INTO board_access_links (board_id, role, password_hash, expires_at) \
                     VALUES ($1, $2, $3, $4) RETURNING {BOARD_COLUMNS}"
                ))
                .bind(board_id)
                .bind(role.as_str())
                .bind(&link.password_hash)
                .bind(link.expires_at)
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Persistence, "Failed to create board link", e)
                })?
                .map(AccessLink::try_from)
                .transpose()?
            }
            ResourceRef::BusinessUnit(unit_id) => sqlx::query_as::<_, UnitLinkRow>(&format!(
                "INSERT INTO bu_access_links (business_unit_id, password_hash, expires_at, created_by) \
                 VALUES ($1, $2, $3, $4) RETURNING {UNIT_COLUMNS}"
            ))
            .bind(unit_id)
            .bind(&link.password_hash)
            .bind(link.expires_at)
            .bind(link.created_by)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Persistence,
                    "Failed to create business unit link",
                    e,
                )
            })?
            .map(AccessLink::try_from)
            .transpose()?,
        };

        inserted.ok_or_else(|| AppError::persistence("Link insert returned no row"))
    }

    async fn list_for_resource(&self, resource: ResourceRef) -> AppResult<Vec<AccessLink>> {
        match resource {
            ResourceRef::Board(board_id) => {
                let rows = sqlx::query_as::<_, BoardLinkRow>(&format!(
                    "SELECT {BOARD_COLUMNS} FROM board_access_links WHERE board_id = $1"
                ))
                .bind(board_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Persistence, "Failed to list board links", e)
                })?;
                Ok(decode_rows(rows))
            }
            ResourceRef::BusinessUnit(unit_id) => {
                let rows = sqlx::query_as::<_, UnitLinkRow>(&format!(
                    "SELECT {UNIT_COLUMNS} FROM bu_access_links WHERE business_unit_id = $1"
                ))
                .bind(unit_id)
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Persistence,
                        "Failed to list business unit links",
                        e,
                    )
                })?;
                Ok(decode_rows(rows))
            }
        }
    }

    async fn find(&self, scope: LinkScope, id: LinkId) -> AppResult<Option<AccessLink>> {
        match scope {
            LinkScope::Board => sqlx::query_as::<_, BoardLinkRow>(&format!(
                "SELECT {BOARD_COLUMNS} FROM board_access_links WHERE id = $1"
            ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Persistence, "Failed to find board link", e)
            })?
            .map(AccessLink::try_from)
            .transpose(),
            LinkScope::BusinessUnit => sqlx::query_as::<_, UnitLinkRow>(&format!(
                "SELECT {UNIT_COLUMNS} FROM bu_access_links WHERE id = $1"
            ))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Persistence,
                    "Failed to find business unit link",
                    e,
                )
            })?
            .map(AccessLink::try_from)
            .transpose(),
        }
    }

    async fn delete(&self, resource: ResourceRef, id: LinkId) -> AppResult<bool> {
        let (sql, label) = match resource {
            ResourceRef::Board(_) => (
                "DELETE FROM board_access_links WHERE id = $1 AND board_id = $2",
                "board",
            ),
            ResourceRef::BusinessUnit(_) => (
                "DELETE FROM bu_access_links WHERE id = $1 AND business_unit_id = $2",
                "business unit",
            ),
        };

        let result = sqlx::query(sql)
            .bind(id)
            .bind(resource.uuid())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Persistence,
                    format!("Failed to delete {label} link"),
                    e,
                )
            })?;
        Ok(result.rows_affected() > 0)
    }
}
