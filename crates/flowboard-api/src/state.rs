//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use flowboard_auth::authority::AuthorizationOracle;
use flowboard_auth::identity::IdentityProvider;
use flowboard_core::config::AppConfig;
use flowboard_core::traits::Clock;
use flowboard_database::DatabasePool;
use flowboard_database::store::{LinkStore, ResourceStore};
use flowboard_service::gated::GatedResourceService;
use flowboard_service::link::LinkService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Bearer token validation
    pub identity: Arc<dyn IdentityProvider>,
    /// Time source
    pub clock: Arc<dyn Clock>,
    /// Link lifecycle
    pub link_service: Arc<LinkService>,
    /// Link redemption
    pub gated_service: Arc<GatedResourceService>,
    /// Postgres pool for the health endpoint; `None` over in-memory stores
    pub database: Option<DatabasePool>,
}

impl AppState {
    /// Wires the services over the given collaborators.
    pub fn new(
        config: AppConfig,
        links: Arc<dyn LinkStore>,
        resources: Arc<dyn ResourceStore>,
        authority: Arc<dyn AuthorizationOracle>,
        identity: Arc<dyn IdentityProvider>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let link_service = Arc::new(LinkService::new(
            links,
            authority,
            Arc::clone(&clock),
            config.links.clone(),
        ));
        let gated_service = Arc::new(GatedResourceService::new(
            Arc::clone(&link_service),
            resources,
        ));

        Self {
            config: Arc::new(config),
            identity,
            clock,
            link_service,
            gated_service,
            database: None,
        }
    }

    /// Lets `/api/health` ping the database behind the stores.
    pub fn with_database(mut self, database: DatabasePool) -> Self {
        self.database = Some(database);
        self
    }
}
