//! Authorization oracle reading ownership and grants from PostgreSQL.

use async_trait::async_trait;
use tracing::warn;

use flowboard_core::result::AppResult;
use flowboard_core::types::UserId;
use flowboard_database::repositories::PermissionRepository;
use flowboard_entity::link::ResourceRef;

use super::{AuthorizationOracle, Standing};

/// Boards: `boards.owner_id`, then `board_permissions`.
/// Business units: the parent client's `owner_id`, then `bu_permissions`.
#[derive(Debug, Clone)]
pub struct PgAuthority {
    permissions: PermissionRepository,
}

impl PgAuthority {
    /// Creates a new oracle.
    pub fn new(permissions: PermissionRepository) -> Self {
        Self { permissions }
    }
}

fn parse_grant(resource: ResourceRef, user: UserId, role: Option<String>) -> Option<Standing> {
    let role = role?;
    let standing = Standing::from_grant(&role);
    if standing.is_none() {
        warn!(resource = %resource, user_id = %user, role = %role, "Ignoring unknown permission grant");
    }
    standing
}

#[async_trait]
impl AuthorizationOracle for PgAuthority {
    async fn standing(&self, resource: ResourceRef, user: UserId) -> AppResult<Option<Standing>> {
        let owner = match resource {
            ResourceRef::Board(board_id) => self.permissions.board_owner(board_id).await?,
            ResourceRef::BusinessUnit(unit_id) => {
                self.permissions.business_unit_owner(unit_id).await?
            }
        };
        if owner == Some(user) {
            return Ok(Some(Standing::Owner));
        }

        let grant = match resource {
            ResourceRef::Board(board_id) => self.permissions.board_grant(board_id, user).await?,
            ResourceRef::BusinessUnit(unit_id) => {
                self.permissions.business_unit_grant(unit_id, user).await?
            }
        };
        Ok(parse_grant(resource, user, grant))
    }
}
