//! Business unit repository implementation.
//!
//! Environment and workflow tables keep JSON in text columns; rows are
//! read raw and decoded with [`decode_embedded`] before leaving this module.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use flowboard_core::error::{AppError, ErrorKind};
use flowboard_core::result::AppResult;
use flowboard_core::types::{BusinessUnitId, EnvironmentId, UserId, WorkflowId};
use flowboard_entity::business_unit::{BusinessUnit, Environment, Workflow, WorkflowEnvironment};
use flowboard_entity::payload::decode_embedded;

#[derive(Debug, FromRow)]
struct EnvironmentRow {
    id: Uuid,
    business_unit_id: Uuid,
    name: String,
    description: Option<String>,
    integration_type: Option<String>,
    variables: Option<String>,
    owner_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<EnvironmentRow> for Environment {
    fn from(row: EnvironmentRow) -> Self {
        Self {
            id: EnvironmentId::from_uuid(row.id),
            business_unit_id: BusinessUnitId::from_uuid(row.business_unit_id),
            name: row.name,
            description: row.description,
            integration_type: row.integration_type,
            variables: decode_embedded(row.variables.as_deref()),
            owner_id: row.owner_id.map(UserId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct WorkflowRow {
    id: Uuid,
    business_unit_id: Uuid,
    name: String,
    description: Option<String>,
    flow_data: Option<String>,
    owner_id: Option<Uuid>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WorkflowRow> for Workflow {
    fn from(row: WorkflowRow) -> Self {
        Self {
            id: WorkflowId::from_uuid(row.id),
            business_unit_id: BusinessUnitId::from_uuid(row.business_unit_id),
            name: row.name,
            description: row.description,
            flow_data: decode_embedded(row.flow_data.as_deref()),
            owner_id: row.owner_id.map(UserId::from_uuid),
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct WorkflowEnvironmentRow {
    id: Uuid,
    workflow_id: Uuid,
    environment_id: Uuid,
    flow_data_override: Option<String>,
    is_active: bool,
    deployed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<WorkflowEnvironmentRow> for WorkflowEnvironment {
    fn from(row: WorkflowEnvironmentRow) -> Self {
        Self {
            id: row.id,
            workflow_id: WorkflowId::from_uuid(row.workflow_id),
            environment_id: EnvironmentId::from_uuid(row.environment_id),
            flow_data_override: decode_embedded(row.flow_data_override.as_deref()),
            is_active: row.is_active,
            deployed_at: row.deployed_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Read-only repository for the business unit hierarchy.
#[derive(Debug, Clone)]
pub struct BusinessUnitRepository {
    pool: PgPool,
}

impl BusinessUnitRepository {
    /// Create a new business unit repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a business unit by ID.
    pub async fn find_by_id(&self, id: BusinessUnitId) -> AppResult<Option<BusinessUnit>> {
        sqlx::query_as::<_, BusinessUnit>(
            "SELECT id, client_id, name, description FROM business_units WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Persistence, "Failed to find business unit", e)
        })
    }

    /// Environments in a business unit, oldest first.
    pub async fn find_environments(&self, id: BusinessUnitId) -> AppResult<Vec<Environment>> {
        let rows = sqlx::query_as::<_, EnvironmentRow>(
            "SELECT id, business_unit_id, name, description, integration_type, variables, \
             owner_id, created_at, updated_at FROM environments \
             WHERE business_unit_id = $1 ORDER BY created_at ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Persistence, "Failed to list environments", e)
        })?;
        Ok(rows.into_iter().map(Environment::from).collect())
    }

    /// Workflows in a business unit, oldest first.
    pub async fn find_workflows(&self, id: BusinessUnitId) -> AppResult<Vec<Workflow>> {
        let rows = sqlx::query_as::<_, WorkflowRow>(
            "SELECT id, business_unit_id, name, description, flow_data, owner_id, \
             created_at, updated_at FROM workflows \
             WHERE business_unit_id = $1 ORDER BY created_at ASC",
        )
        .bind(id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Persistence, "Failed to list workflows", e))?;
        Ok(rows.into_iter().map(Workflow::from).collect())
    }

    /// Workflow deployments whose environment is one of `environments`.
    pub async fn find_workflow_environments(
        &self,
        environments: &[EnvironmentId],
    ) -> AppResult<Vec<WorkflowEnvironment>> {
        if environments.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = environments.iter().map(|id| id.into_uuid()).collect();

        let rows = sqlx::query_as::<_, WorkflowEnvironmentRow>(
            "SELECT id, workflow_id, environment_id, flow_data_override, is_active, \
             deployed_at, created_at, updated_at FROM workflow_environments \
             WHERE environment_id = ANY($1) ORDER BY created_at ASC",
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Persistence,
                "Failed to list workflow environments",
                e,
            )
        })?;
        Ok(rows.into_iter().map(WorkflowEnvironment::from).collect())
    }
}
