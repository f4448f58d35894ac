//! Store traits consumed by the service layer.
//!
//! Each trait has a PostgreSQL implementation in [`crate::repositories`]
//! and an in-memory one in [`crate::memory`].

use async_trait::async_trait;

use flowboard_core::result::AppResult;
use flowboard_core::types::{BoardId, BusinessUnitId, EnvironmentId, LinkId};
use flowboard_entity::board::{Board, BoardSnapshot};
use flowboard_entity::business_unit::{BusinessUnit, Environment, Workflow, WorkflowEnvironment};
use flowboard_entity::link::{AccessLink, LinkScope, NewAccessLink, ResourceRef};

/// Persistence for access links.
#[async_trait]
pub trait LinkStore: Send + Sync + std::fmt::Debug + 'static {
    /// Persist a new link. The store assigns `id` and `created_at`.
    async fn insert(&self, link: &NewAccessLink) -> AppResult<AccessLink>;

    /// Every link bound to `resource`, in store-native order.
    ///
    /// Rows that fail to decode are skipped.
    async fn list_for_resource(&self, resource: ResourceRef) -> AppResult<Vec<AccessLink>>;

    /// Look up a link by id within one scope.
    async fn find(&self, scope: LinkScope, id: LinkId) -> AppResult<Option<AccessLink>>;

    /// Delete the link matching both `id` and `resource`.
    ///
    /// Returns whether a row was removed.
    async fn delete(&self, resource: ResourceRef, id: LinkId) -> AppResult<bool>;
}

/// Read access to the resources gated behind links.
#[async_trait]
pub trait ResourceStore: Send + Sync + std::fmt::Debug + 'static {
    /// Find a board by id.
    async fn find_board(&self, id: BoardId) -> AppResult<Option<Board>>;

    /// The most recently updated snapshot of a board.
    async fn latest_board_snapshot(&self, id: BoardId) -> AppResult<Option<BoardSnapshot>>;

    /// Find a business unit by id.
    async fn find_business_unit(&self, id: BusinessUnitId) -> AppResult<Option<BusinessUnit>>;

    /// Environments belonging to a business unit.
    async fn environments_for_unit(&self, id: BusinessUnitId) -> AppResult<Vec<Environment>>;

    /// Workflows belonging to a business unit.
    async fn workflows_for_unit(&self, id: BusinessUnitId) -> AppResult<Vec<Workflow>>;

    /// Workflow deployments into any of `environments`.
    async fn workflow_environments_for(
        &self,
        environments: &[EnvironmentId],
    ) -> AppResult<Vec<WorkflowEnvironment>>;
}
