//! Shared test helpers for integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use flowboard_api::{AppState, build_app};
use flowboard_auth::identity::{Claims, JwtIdentityProvider};
use flowboard_auth::{Standing, StaticAuthority};
use flowboard_core::config::AppConfig;
use flowboard_core::traits::{Clock, ManualClock};
use flowboard_core::types::{BoardId, BusinessUnitId, ClientId, UserId};
use flowboard_database::DatabasePool;
use flowboard_database::memory::{MemoryLinkStore, MemoryResourceStore};
use flowboard_entity::board::Board;
use flowboard_entity::business_unit::BusinessUnit;
use flowboard_entity::link::ResourceRef;

pub const JWT_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Controls what "now" means for link expiry
    pub clock: Arc<ManualClock>,
    /// Owner/editor grants
    pub authority: Arc<StaticAuthority>,
    /// Boards, units, and their children
    pub resources: Arc<MemoryResourceStore>,
    /// Stored links
    pub links: Arc<MemoryLinkStore>,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a new test application over in-memory stores.
    pub fn new() -> Self {
        Self::build(None)
    }

    /// Same stores, but `/api/health` pings `database`.
    pub fn with_database(database: DatabasePool) -> Self {
        Self::build(Some(database))
    }

    fn build(database: Option<DatabasePool>) -> Self {
        let config: AppConfig = serde_json::from_value(serde_json::json!({
            "database": { "url": "memory" },
            "auth": { "jwt_secret": JWT_SECRET, "jwt_audience": "authenticated" },
            "links": { "frontend_url": "https://app.flowboard.test/" },
        }))
        .expect("Failed to build test config");

        let clock = Arc::new(ManualClock::new(start_time()));
        let shared_clock: Arc<dyn Clock> = clock.clone();
        let links = Arc::new(MemoryLinkStore::with_clock(Arc::clone(&shared_clock)));
        let resources = Arc::new(MemoryResourceStore::new());
        let authority = Arc::new(StaticAuthority::new());
        let identity = Arc::new(JwtIdentityProvider::new(&config.auth));

        let mut state = AppState::new(
            config.clone(),
            links.clone(),
            resources.clone(),
            authority.clone(),
            identity,
            shared_clock,
        );
        if let Some(database) = database {
            state = state.with_database(database);
        }

        Self {
            router: build_app(state),
            clock,
            authority,
            resources,
            links,
            config,
        }
    }

    /// Mint a bearer token for `user`.
    pub fn token_for(&self, user: UserId) -> String {
        let claims = Claims {
            sub: user.into_uuid(),
            exp: Utc::now().timestamp() + 3600,
            aud: Some("authenticated".to_string()),
            email: Some(format!("{user}@example.com")),
            role: Some("authenticated".to_string()),
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(JWT_SECRET.as_bytes()),
        )
        .expect("Failed to sign token")
    }

    /// Create a user with the given standing on `resource` and return a
    /// bearer token for them.
    pub fn user_with(&self, resource: ResourceRef, standing: Standing) -> (UserId, String) {
        let user = UserId::new();
        self.authority.grant(resource, user, standing);
        (user, self.token_for(user))
    }

    /// Insert a board owned by a fresh user.
    pub fn seed_board(&self, name: &str) -> Board {
        let board = Board {
            id: BoardId::new(),
            name: name.to_string(),
            description: Some("seeded".to_string()),
            owner_id: UserId::new(),
            created_at: start_time(),
            updated_at: start_time(),
        };
        self.resources.put_board(board.clone());
        board
    }

    /// Insert a business unit under a fresh client.
    pub fn seed_business_unit(&self, name: &str) -> BusinessUnit {
        let unit = BusinessUnit {
            id: BusinessUnitId::new(),
            client_id: ClientId::new(),
            name: name.to_string(),
            description: None,
        };
        self.resources.put_business_unit(unit.clone());
        unit
    }

    /// Move the application clock forward.
    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    /// Make an HTTP request with an optional JSON body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();
        self.request_raw(method, path, &body_str, token).await
    }

    /// Make an HTTP request with a verbatim body.
    pub async fn request_raw(
        &self,
        method: &str,
        path: &str,
        body: &str,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {}", token));
        }

        let req = req
            .body(Body::from(body.to_string()))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Fixed starting instant for the manual clock.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0)
        .single()
        .expect("valid start time")
}

/// Parse a UUID-valued field out of a response body.
pub fn uuid_field(body: &Value, field: &str) -> Uuid {
    body.get(field)
        .and_then(Value::as_str)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| panic!("missing uuid field {field} in {body}"))
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}
