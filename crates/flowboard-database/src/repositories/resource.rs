//! [`ResourceStore`] backed by PostgreSQL.

use async_trait::async_trait;
use sqlx::PgPool;

use flowboard_core::result::AppResult;
use flowboard_core::types::{BoardId, BusinessUnitId, EnvironmentId};
use flowboard_entity::board::{Board, BoardSnapshot};
use flowboard_entity::business_unit::{BusinessUnit, Environment, Workflow, WorkflowEnvironment};

use super::board::BoardRepository;
use super::business_unit::BusinessUnitRepository;
use crate::store::ResourceStore;

/// Combines the board and business unit repositories behind one store.
#[derive(Debug, Clone)]
pub struct PgResourceStore {
    boards: BoardRepository,
    units: BusinessUnitRepository,
}

impl PgResourceStore {
    /// Create a resource store over a shared pool.
    pub fn new(pool: PgPool) -> Self {
        Self {
            boards: BoardRepository::new(pool.clone()),
            units: BusinessUnitRepository::new(pool),
        }
    }
}

#[async_trait]
impl ResourceStore for PgResourceStore {
    async fn find_board(&self, id: BoardId) -> AppResult<Option<Board>> {
        self.boards.find_by_id(id).await
    }

    async fn latest_board_snapshot(&self, id: BoardId) -> AppResult<Option<BoardSnapshot>> {
        self.boards.latest_snapshot(id).await
    }

    async fn find_business_unit(&self, id: BusinessUnitId) -> AppResult<Option<BusinessUnit>> {
        self.units.find_by_id(id).await
    }

    async fn environments_for_unit(&self, id: BusinessUnitId) -> AppResult<Vec<Environment>> {
        self.units.find_environments(id).await
    }

    async fn workflows_for_unit(&self, id: BusinessUnitId) -> AppResult<Vec<Workflow>> {
        self.units.find_workflows(id).await
    }

    async fn workflow_environments_for(
        &self,
        environments: &[EnvironmentId],
    ) -> AppResult<Vec<WorkflowEnvironment>> {
        self.units.find_workflow_environments(environments).await
    }
}
