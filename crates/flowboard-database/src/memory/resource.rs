//! In-memory [`ResourceStore`] backed by `dashmap`.

use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;

use flowboard_core::result::AppResult;
use flowboard_core::types::{BoardId, BusinessUnitId, EnvironmentId, WorkflowId};
use flowboard_entity::board::{Board, BoardSnapshot};
use flowboard_entity::business_unit::{BusinessUnit, Environment, Workflow, WorkflowEnvironment};

use crate::store::ResourceStore;

/// In-memory resource store. Seed it with the `put_*` methods.
#[derive(Debug, Clone, Default)]
pub struct MemoryResourceStore {
    boards: Arc<DashMap<BoardId, Board>>,
    snapshots: Arc<DashMap<BoardId, Vec<BoardSnapshot>>>,
    units: Arc<DashMap<BusinessUnitId, BusinessUnit>>,
    environments: Arc<DashMap<EnvironmentId, Environment>>,
    workflows: Arc<DashMap<WorkflowId, Workflow>>,
    workflow_environments: Arc<DashMap<uuid::Uuid, WorkflowEnvironment>>,
}

impl MemoryResourceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a board.
    pub fn put_board(&self, board: Board) {
        self.boards.insert(board.id, board);
    }

    /// Append a snapshot to a board's history.
    pub fn put_snapshot(&self, snapshot: BoardSnapshot) {
        self.snapshots
            .entry(snapshot.board_id)
            .or_default()
            .push(snapshot);
    }

    /// Insert or replace a business unit.
    pub fn put_business_unit(&self, unit: BusinessUnit) {
        self.units.insert(unit.id, unit);
    }

    /// Insert or replace an environment.
    pub fn put_environment(&self, environment: Environment) {
        self.environments.insert(environment.id, environment);
    }

    /// Insert or replace a workflow.
    pub fn put_workflow(&self, workflow: Workflow) {
        self.workflows.insert(workflow.id, workflow);
    }

    /// Insert or replace a workflow deployment.
    pub fn put_workflow_environment(&self, deployment: WorkflowEnvironment) {
        self.workflow_environments.insert(deployment.id, deployment);
    }
}

#[async_trait]
impl ResourceStore for MemoryResourceStore {
    async fn find_board(&self, id: BoardId) -> AppResult<Option<Board>> {
        Ok(self.boards.get(&id).map(|b| b.clone()))
    }

    async fn latest_board_snapshot(&self, id: BoardId) -> AppResult<Option<BoardSnapshot>> {
        Ok(self
            .snapshots
            .get(&id)
            .and_then(|history| history.iter().max_by_key(|s| s.updated_at).cloned()))
    }

    async fn find_business_unit(&self, id: BusinessUnitId) -> AppResult<Option<BusinessUnit>> {
        Ok(self.units.get(&id).map(|u| u.clone()))
    }

    async fn environments_for_unit(&self, id: BusinessUnitId) -> AppResult<Vec<Environment>> {
        let mut found: Vec<Environment> = self
            .environments
            .iter()
            .filter(|e| e.business_unit_id == id)
            .map(|e| e.value().clone())
            .collect();
        found.sort_by_key(|e| e.created_at);
        Ok(found)
    }

    async fn workflows_for_unit(&self, id: BusinessUnitId) -> AppResult<Vec<Workflow>> {
        let mut found: Vec<Workflow> = self
            .workflows
            .iter()
            .filter(|w| w.business_unit_id == id)
            .map(|w| w.value().clone())
            .collect();
        found.sort_by_key(|w| w.created_at);
        Ok(found)
    }

    async fn workflow_environments_for(
        &self,
        environments: &[EnvironmentId],
    ) -> AppResult<Vec<WorkflowEnvironment>> {
        let mut found: Vec<WorkflowEnvironment> = self
            .workflow_environments
            .iter()
            .filter(|d| environments.contains(&d.environment_id))
            .map(|d| d.value().clone())
            .collect();
        found.sort_by_key(|d| d.created_at);
        Ok(found)
    }
}
