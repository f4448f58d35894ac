//! Link lifecycle service.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{debug, info, warn};

use flowboard_auth::authority::{AuthorizationOracle, require_manage};
use flowboard_auth::credential::{SecretGenerator, SecretHasher};
use flowboard_core::config::LinkConfig;
use flowboard_core::error::AppError;
use flowboard_core::result::AppResult;
use flowboard_core::traits::Clock;
use flowboard_core::types::LinkId;
use flowboard_database::store::LinkStore;
use flowboard_entity::link::{LinkRole, LinkScope, LinkSummary, NewAccessLink, ResourceRef};

use super::model::{CreateLinkRequest, CreatedLink, VerifiedLink};
use crate::context::RequestContext;

/// Creates, lists, revokes, and verifies access links.
#[derive(Debug, Clone)]
pub struct LinkService {
    /// Link persistence.
    links: Arc<dyn LinkStore>,
    /// Manage-authority checks.
    authority: Arc<dyn AuthorizationOracle>,
    /// Secret generation.
    generator: SecretGenerator,
    /// Secret hashing and verification.
    hasher: SecretHasher,
    /// Time source for expiry.
    clock: Arc<dyn Clock>,
    /// Secret length and share URL layout.
    settings: LinkConfig,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(
        links: Arc<dyn LinkStore>,
        authority: Arc<dyn AuthorizationOracle>,
        clock: Arc<dyn Clock>,
        settings: LinkConfig,
    ) -> Self {
        Self {
            links,
            authority,
            generator: SecretGenerator::new(),
            hasher: SecretHasher::new(),
            clock,
            settings,
        }
    }

    /// Creates a link on `resource` and returns the one-time plaintext secret.
    pub async fn create_link(
        &self,
        ctx: &RequestContext,
        resource: ResourceRef,
        req: CreateLinkRequest,
    ) -> AppResult<CreatedLink> {
        require_manage(self.authority.as_ref(), resource, ctx.user_id).await?;

        let (role, created_by) = match resource.scope() {
            LinkScope::Board => (Some(LinkRole::normalize(req.role.as_deref())), None),
            LinkScope::BusinessUnit => (None, Some(ctx.user_id)),
        };
        let expires_at = expiry_from_hours(self.clock.now(), req.expires_in_hours)?;

        let password = self.generator.generate_secret(self.settings.password_length)?;
        let password_hash = self.hasher.hash_secret(&password)?;

        let link = self
            .links
            .insert(&NewAccessLink {
                resource,
                role,
                password_hash,
                expires_at,
                created_by,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            link_id = %link.id,
            resource = %resource,
            role = ?link.role,
            expires_at = ?link.expires_at,
            "Access link created"
        );

        Ok(CreatedLink {
            link_id: link.id,
            password,
            role: link.role,
            expires_at: link.expires_at,
            share_url: self.share_url(resource.scope(), link.id),
        })
    }

    /// Lists the non-secret fields of every link on `resource`.
    pub async fn list_links(
        &self,
        ctx: &RequestContext,
        resource: ResourceRef,
    ) -> AppResult<Vec<LinkSummary>> {
        require_manage(self.authority.as_ref(), resource, ctx.user_id).await?;

        let links = self.links.list_for_resource(resource).await?;
        debug!(resource = %resource, count = links.len(), "Listed access links");
        Ok(links.iter().map(|l| l.summary()).collect())
    }

    /// Revokes a link. Succeeds whether or not the link still exists.
    pub async fn revoke_link(
        &self,
        ctx: &RequestContext,
        resource: ResourceRef,
        link_id: LinkId,
    ) -> AppResult<()> {
        require_manage(self.authority.as_ref(), resource, ctx.user_id).await?;

        let removed = self.links.delete(resource, link_id).await?;
        info!(
            user_id = %ctx.user_id,
            link_id = %link_id,
            resource = %resource,
            removed,
            "Access link revoked"
        );
        Ok(())
    }

    /// Checks a presented secret against a link.
    ///
    /// Expiry is checked before the secret, so an expired link reports
    /// `Expired` whatever password is offered.
    pub async fn verify_link(
        &self,
        scope: LinkScope,
        link_id: LinkId,
        candidate: &str,
    ) -> AppResult<VerifiedLink> {
        let link = self
            .links
            .find(scope, link_id)
            .await?
            .ok_or_else(|| AppError::not_found("Link not found"))?;

        if link.is_expired_at(self.clock.now()) {
            debug!(link_id = %link_id, scope = %scope, "Rejected expired link");
            return Err(AppError::expired("Link has expired"));
        }

        if !self.hasher.verify_secret(candidate, &link.password_hash) {
            warn!(link_id = %link_id, scope = %scope, "Rejected link password");
            return Err(AppError::invalid_credential("Invalid password"));
        }

        Ok(VerifiedLink {
            link_id: link.id,
            scope: link.scope,
            resource_id: link.resource_id,
            role: link.role,
        })
    }

    /// Public address of a link's landing page.
    pub fn share_url(&self, scope: LinkScope, link_id: LinkId) -> String {
        let path = match scope {
            LinkScope::Board => &self.settings.board_share_path,
            LinkScope::BusinessUnit => &self.settings.unit_share_path,
        };
        format!(
            "{}/{}/{}",
            self.settings.frontend_url.trim_end_matches('/'),
            path.trim_matches('/'),
            link_id
        )
    }
}

/// `now + hours` for a positive hour count, otherwise no expiry.
fn expiry_from_hours(
    now: DateTime<Utc>,
    hours: Option<i64>,
) -> AppResult<Option<DateTime<Utc>>> {
    let Some(hours) = hours.filter(|h| *h > 0) else {
        return Ok(None);
    };
    Duration::try_hours(hours)
        .and_then(|d| now.checked_add_signed(d))
        .map(Some)
        .ok_or_else(|| AppError::validation(format!("expiresIn of {hours} hours is out of range")))
}
