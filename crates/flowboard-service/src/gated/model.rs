//! Payloads returned to link holders.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use flowboard_core::types::BusinessUnitId;
use flowboard_entity::board::Board;
use flowboard_entity::business_unit::{BusinessUnit, Environment, Workflow, WorkflowEnvironment};
use flowboard_entity::link::LinkRole;

/// A board with its latest canvas merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardPayload {
    /// Board columns, inlined.
    #[serde(flatten)]
    pub board: Board,
    /// `data` of the most recently updated snapshot.
    pub flow_data: Option<Value>,
}

/// What a board link holder receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedBoard {
    /// Board row plus its canvas.
    pub board: BoardPayload,
    /// Role granted by the link.
    pub role: LinkRole,
}

/// What a business unit link holder receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedBusinessUnit {
    /// The unit itself.
    pub business_unit: BusinessUnit,
    /// Environments in the unit, oldest first.
    pub environments: Vec<Environment>,
    /// Workflows in the unit, oldest first.
    pub workflows: Vec<Workflow>,
    /// Only deployments into this unit's environments.
    pub workflow_environments: Vec<WorkflowEnvironment>,
}

/// Outcome of verifying a business unit link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitLinkVerification {
    /// Unit the link grants access to.
    pub business_unit_id: BusinessUnitId,
    /// Unit name, absent if the unit no longer exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_unit_name: Option<String>,
}
