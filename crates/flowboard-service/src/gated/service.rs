//! Gated resource fetcher.
//!
//! Every fetch re-runs the full link verification; nothing about a
//! previous successful verify is remembered.

use std::sync::Arc;

use tracing::{debug, info};

use flowboard_core::error::AppError;
use flowboard_core::result::AppResult;
use flowboard_core::types::{BoardId, BusinessUnitId, EnvironmentId, LinkId};
use flowboard_database::store::ResourceStore;
use flowboard_entity::link::{LinkRole, LinkScope};

use super::model::{BoardPayload, SharedBoard, SharedBusinessUnit, UnitLinkVerification};
use crate::link::{LinkService, VerifiedLink};

/// Resolves link secrets into board and business unit payloads.
#[derive(Debug, Clone)]
pub struct GatedResourceService {
    /// Link verification.
    links: Arc<LinkService>,
    /// Resource reads.
    resources: Arc<dyn ResourceStore>,
}

impl GatedResourceService {
    /// Creates a new gated resource service.
    pub fn new(links: Arc<LinkService>, resources: Arc<dyn ResourceStore>) -> Self {
        Self { links, resources }
    }

    /// Verifies a board link secret.
    pub async fn verify_board_link(
        &self,
        link_id: LinkId,
        password: &str,
    ) -> AppResult<VerifiedLink> {
        if password.is_empty() {
            return Err(AppError::validation("password is required"));
        }
        self.links.verify_link(LinkScope::Board, link_id, password).await
    }

    /// Verifies a business unit link secret and looks up the unit's name.
    pub async fn verify_unit_link(
        &self,
        link_id: LinkId,
        password: &str,
    ) -> AppResult<UnitLinkVerification> {
        if password.is_empty() {
            return Err(AppError::validation("password is required"));
        }
        let verified = self
            .links
            .verify_link(LinkScope::BusinessUnit, link_id, password)
            .await?;
        let business_unit_id = BusinessUnitId::from_uuid(verified.resource_id);

        let business_unit_name = self
            .resources
            .find_business_unit(business_unit_id)
            .await?
            .map(|unit| unit.name);

        Ok(UnitLinkVerification {
            business_unit_id,
            business_unit_name,
        })
    }

    /// Returns the board behind a board link together with the link's role.
    pub async fn fetch_board(&self, link_id: LinkId, token: &str) -> AppResult<SharedBoard> {
        if token.is_empty() {
            return Err(AppError::invalid_credential("token is required"));
        }
        let verified = self.links.verify_link(LinkScope::Board, link_id, token).await?;
        let board_id = BoardId::from_uuid(verified.resource_id);

        let board = self
            .resources
            .find_board(board_id)
            .await?
            .ok_or_else(|| AppError::not_found("Board not found"))?;
        let snapshot = self.resources.latest_board_snapshot(board_id).await?;

        debug!(
            link_id = %link_id,
            board_id = %board_id,
            snapshot_version = ?snapshot.as_ref().map(|s| s.version),
            "Board redeemed through link"
        );

        Ok(SharedBoard {
            board: BoardPayload {
                board,
                flow_data: snapshot.map(|s| s.data),
            },
            role: verified.role.unwrap_or(LinkRole::Viewer),
        })
    }

    /// Returns the business unit aggregate behind a business unit link.
    pub async fn fetch_business_unit(
        &self,
        link_id: LinkId,
        token: &str,
    ) -> AppResult<SharedBusinessUnit> {
        if token.is_empty() {
            return Err(AppError::invalid_credential("token is required"));
        }
        let verified = self
            .links
            .verify_link(LinkScope::BusinessUnit, link_id, token)
            .await?;
        let unit_id = BusinessUnitId::from_uuid(verified.resource_id);

        let business_unit = self
            .resources
            .find_business_unit(unit_id)
            .await?
            .ok_or_else(|| AppError::not_found("Business unit not found"))?;

        let (environments, workflows) = tokio::try_join!(
            self.resources.environments_for_unit(unit_id),
            self.resources.workflows_for_unit(unit_id),
        )?;

        let environment_ids: Vec<EnvironmentId> = environments.iter().map(|e| e.id).collect();
        let workflow_environments = self
            .resources
            .workflow_environments_for(&environment_ids)
            .await?;

        info!(
            link_id = %link_id,
            business_unit_id = %unit_id,
            environments = environments.len(),
            workflows = workflows.len(),
            deployments = workflow_environments.len(),
            "Business unit redeemed through link"
        );

        Ok(SharedBusinessUnit {
            business_unit,
            environments,
            workflows,
            workflow_environments,
        })
    }
}
