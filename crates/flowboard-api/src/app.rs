//! Application builder: wires router, middleware, and state into a served app.

use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tokio::sync::watch;
use tower_http::compression::CompressionLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use flowboard_auth::authority::{AuthorizationOracle, PgAuthority, StaticAuthority};
use flowboard_auth::identity::JwtIdentityProvider;
use flowboard_core::config::AppConfig;
use flowboard_core::error::AppError;
use flowboard_core::traits::{Clock, SystemClock};
use flowboard_database::memory::{MemoryLinkStore, MemoryResourceStore};
use flowboard_database::repositories::{LinkRepository, PermissionRepository, PgResourceStore};
use flowboard_database::store::{LinkStore, ResourceStore};
use flowboard_database::{DatabasePool, migration};

use crate::middleware::cors::build_cors_layer;
use crate::middleware::logging::{request_logging, request_span};
use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application with all routes and middleware.
pub fn build_app(state: AppState) -> Router {
    let server = state.config.server.clone();

    build_router(state)
        .layer(axum::middleware::from_fn(request_logging))
        .layer(DefaultBodyLimit::max(server.body_limit_bytes))
        .layer(TimeoutLayer::new(Duration::from_secs(
            server.request_timeout_seconds,
        )))
        .layer(CompressionLayer::new())
        .layer(build_cors_layer(&server.cors))
        .layer(TraceLayer::new_for_http().make_span_with(request_span))
}

/// Runs the Flowboard server until a shutdown signal arrives.
pub async fn run_server(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting Flowboard v{}", env!("CARGO_PKG_VERSION"));

    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // ── Step 1: Stores and authority ─────────────────────────────
    let mut db_pool = None;
    let (links, resources, authority): (
        Arc<dyn LinkStore>,
        Arc<dyn ResourceStore>,
        Arc<dyn AuthorizationOracle>,
    ) = if config.database.is_memory() {
        tracing::warn!("Using in-memory stores; nothing will persist across restarts");
        (
            Arc::new(MemoryLinkStore::with_clock(Arc::clone(&clock))),
            Arc::new(MemoryResourceStore::new()),
            Arc::new(StaticAuthority::new()),
        )
    } else {
        tracing::info!("Connecting to database...");
        let db = DatabasePool::connect(&config.database).await?;

        if config.database.run_migrations {
            tracing::info!("Running database migrations...");
            migration::run_migrations(db.pool()).await?;
            tracing::info!("Database migrations complete");
        }

        let pool = db.pool().clone();
        db_pool = Some(db);
        (
            Arc::new(LinkRepository::new(pool.clone())),
            Arc::new(PgResourceStore::new(pool.clone())),
            Arc::new(PgAuthority::new(PermissionRepository::new(pool))),
        )
    };

    // ── Step 2: Identity and state ───────────────────────────────
    let identity = Arc::new(JwtIdentityProvider::new(&config.auth));
    let addr = config.server.bind_address();
    let grace = Duration::from_secs(config.server.shutdown_grace_seconds);

    let mut state = AppState::new(config, links, resources, authority, identity, clock);
    if let Some(db) = &db_pool {
        state = state.with_database(db.clone());
    }
    let app = build_app(state);

    // ── Step 3: Bind and serve ───────────────────────────────────
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Flowboard server listening on {}", addr);

    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, draining in-flight requests...");
            let _ = shutdown_tx.send(true);
        })
        .into_future();

    let grace_elapsed = async move {
        let sender_dropped = shutdown_rx.wait_for(|stopping| *stopping).await.is_err();
        if sender_dropped {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    // ── Step 4: Graceful shutdown ────────────────────────────────
    tokio::select! {
        result = server => {
            result.map_err(|e| AppError::internal(format!("Server error: {e}")))?;
        }
        _ = grace_elapsed => {
            tracing::warn!(
                grace_seconds = grace.as_secs(),
                "Shutdown grace period elapsed, dropping remaining connections"
            );
        }
    }

    if let Some(db) = db_pool {
        db.close().await;
    }

    tracing::info!("Flowboard server shut down");
    Ok(())
}

/// Waits for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
