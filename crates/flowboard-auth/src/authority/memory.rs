//! In-memory authorization oracle.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use flowboard_core::result::AppResult;
use flowboard_core::types::UserId;
use flowboard_entity::link::ResourceRef;

use super::{AuthorizationOracle, Standing};

/// Oracle backed by an explicit table of grants.
#[derive(Debug, Clone, Default)]
pub struct StaticAuthority {
    grants: Arc<DashMap<(ResourceRef, UserId), Standing>>,
}

impl StaticAuthority {
    /// Create an oracle with no grants.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) a user's standing on a resource.
    pub fn grant(&self, resource: ResourceRef, user: UserId, standing: Standing) {
        self.grants.insert((resource, user), standing);
    }

    /// Remove a user's standing on a resource.
    pub fn revoke(&self, resource: ResourceRef, user: UserId) {
        self.grants.remove(&(resource, user));
    }
}

#[async_trait]
impl AuthorizationOracle for StaticAuthority {
    async fn standing(&self, resource: ResourceRef, user: UserId) -> AppResult<Option<Standing>> {
        Ok(self.grants.get(&(resource, user)).map(|s| *s))
    }
}
