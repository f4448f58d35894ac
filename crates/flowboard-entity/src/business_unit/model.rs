//! Business unit, environment, and workflow models.
//!
//! Embedded JSON columns are already decoded here; see
//! [`crate::payload::decode_embedded`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;

use flowboard_core::types::{BusinessUnitId, ClientId, EnvironmentId, UserId, WorkflowId};

/// A business unit owned (through its client) by a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct BusinessUnit {
    /// Unique business unit identifier.
    pub id: BusinessUnitId,
    /// Parent client.
    pub client_id: ClientId,
    /// Display name.
    pub name: String,
    /// Free-form description.
    pub description: Option<String>,
}

/// A deployment environment inside a business unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Environment {
    pub id: EnvironmentId,
    pub business_unit_id: BusinessUnitId,
    pub name: String,
    pub description: Option<String>,
    pub integration_type: Option<String>,
    /// Decoded `variables` column.
    pub variables: Option<Value>,
    pub owner_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A workflow definition inside a business unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    pub id: WorkflowId,
    pub business_unit_id: BusinessUnitId,
    pub name: String,
    pub description: Option<String>,
    /// Decoded `flow_data` column.
    pub flow_data: Option<Value>,
    pub owner_id: Option<UserId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Deployment of a workflow into an environment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowEnvironment {
    pub id: uuid::Uuid,
    pub workflow_id: WorkflowId,
    pub environment_id: EnvironmentId,
    /// Decoded `flow_data_override` column.
    pub flow_data_override: Option<Value>,
    pub is_active: bool,
    pub deployed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
