//! Integration tests for anonymous link redemption.

mod helpers;

use axum::http::StatusCode;
use chrono::Duration;
use serde_json::{Value, json};
use sqlx::postgres::PgPoolOptions;
use uuid::Uuid;

use flowboard_auth::Standing;
use flowboard_core::types::{EnvironmentId, WorkflowId};
use flowboard_database::DatabasePool;
use flowboard_entity::board::{Board, BoardSnapshot};
use flowboard_entity::business_unit::{BusinessUnit, Environment, Workflow, WorkflowEnvironment};
use flowboard_entity::link::ResourceRef;

/// Creates a board link through the API and returns `(link_id, password)`.
async fn create_board_link(app: &helpers::TestApp, board: &Board, body: Value) -> (Uuid, String) {
    let (_, token) = app.user_with(ResourceRef::Board(board.id), Standing::Owner);
    let response = app
        .request(
            "POST",
            &format!("/api/boards/{}/links", board.id),
            Some(body),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    (
        helpers::uuid_field(&response.body, "linkId"),
        response.body["password"]
            .as_str()
            .expect("password")
            .to_string(),
    )
}

/// Creates a business unit link through the API and returns `(link_id, password)`.
async fn create_unit_link(
    app: &helpers::TestApp,
    unit: &BusinessUnit,
    body: Value,
) -> (Uuid, String) {
    let (_, token) = app.user_with(ResourceRef::BusinessUnit(unit.id), Standing::Owner);
    let response = app
        .request(
            "POST",
            &format!("/api/business-units/{}/links", unit.id),
            Some(body),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
    (
        helpers::uuid_field(&response.body, "linkId"),
        response.body["password"]
            .as_str()
            .expect("password")
            .to_string(),
    )
}

#[tokio::test]
async fn test_board_link_end_to_end() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    app.resources.put_snapshot(BoardSnapshot {
        id: Uuid::new_v4(),
        board_id: board.id,
        version: 1,
        data: json!({ "nodes": [] }),
        updated_at: helpers::start_time(),
    });
    app.resources.put_snapshot(BoardSnapshot {
        id: Uuid::new_v4(),
        board_id: board.id,
        version: 2,
        data: json!({ "nodes": [{ "id": "a" }] }),
        updated_at: helpers::start_time() + Duration::minutes(5),
    });

    let (link_id, password) =
        create_board_link(&app, &board, json!({ "role": "editor", "expiresIn": 1 })).await;

    let verified = app
        .request(
            "POST",
            &format!("/api/public/links/{link_id}/verify"),
            Some(json!({ "password": password })),
            None,
        )
        .await;
    assert_eq!(verified.status, StatusCode::OK, "{:?}", verified.body);
    assert_eq!(verified.body["boardId"], json!(board.id.to_string()));
    assert_eq!(verified.body["role"], "editor");

    let fetched = app
        .request(
            "GET",
            &format!("/api/public/links/{link_id}/board?token={password}"),
            None,
            None,
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK, "{:?}", fetched.body);
    assert_eq!(fetched.body["role"], "editor");
    assert_eq!(fetched.body["board"]["name"], "Roadmap");
    assert_eq!(fetched.body["board"]["flow_data"], json!({ "nodes": [{ "id": "a" }] }));

    app.advance(Duration::hours(2));

    let expired = app
        .request(
            "POST",
            &format!("/api/public/links/{link_id}/verify"),
            Some(json!({ "password": password })),
            None,
        )
        .await;
    assert_eq!(expired.status, StatusCode::GONE);
    assert_eq!(expired.body["error"], "EXPIRED");

    let expired_fetch = app
        .request(
            "GET",
            &format!("/api/public/links/{link_id}/board?token={password}"),
            None,
            None,
        )
        .await;
    assert_eq!(expired_fetch.status, StatusCode::GONE);
}

#[tokio::test]
async fn test_wrong_password_is_unauthorized() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (link_id, _) = create_board_link(&app, &board, json!({})).await;

    let response = app
        .request(
            "POST",
            &format!("/api/public/links/{link_id}/verify"),
            Some(json!({ "password": "not-the-password" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "INVALID_CREDENTIAL");

    let fetch = app
        .request(
            "GET",
            &format!("/api/public/links/{link_id}/board?token=nope"),
            None,
            None,
        )
        .await;
    assert_eq!(fetch.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_link_stops_working_after_revoke() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (_, token) = app.user_with(ResourceRef::Board(board.id), Standing::Owner);
    let created = app
        .request(
            "POST",
            &format!("/api/boards/{}/links", board.id),
            Some(json!({})),
            Some(&token),
        )
        .await;
    let link_id = helpers::uuid_field(&created.body, "linkId");
    let password = created.body["password"].as_str().expect("password");

    let revoked = app
        .request(
            "DELETE",
            &format!("/api/boards/{}/links/{link_id}", board.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(revoked.status, StatusCode::NO_CONTENT);

    let response = app
        .request(
            "POST",
            &format!("/api/public/links/{link_id}/verify"),
            Some(json!({ "password": password })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_link_is_not_found() {
    let app = helpers::TestApp::new();

    let response = app
        .request(
            "POST",
            &format!("/api/public/links/{}/verify", Uuid::new_v4()),
            Some(json!({ "password": "anything" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_board_link_does_not_redeem_as_unit_link() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (link_id, password) = create_board_link(&app, &board, json!({})).await;

    let response = app
        .request(
            "POST",
            &format!("/api/public/unit-links/{link_id}/verify"),
            Some(json!({ "password": password })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_malformed_verify_body_is_bad_request() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (link_id, _) = create_board_link(&app, &board, json!({})).await;

    let response = app
        .request_raw(
            "POST",
            &format!("/api/public/links/{link_id}/verify"),
            "{ not json",
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "VALIDATION_ERROR");

    let empty = app
        .request(
            "POST",
            &format!("/api/public/links/{link_id}/verify"),
            Some(json!({})),
            None,
        )
        .await;
    assert_eq!(empty.status, StatusCode::BAD_REQUEST);
    assert_eq!(empty.body["message"], "password is required");
}

#[tokio::test]
async fn test_fetch_without_token_is_unauthorized() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (link_id, _) = create_board_link(&app, &board, json!({})).await;

    let response = app
        .request(
            "GET",
            &format!("/api/public/links/{link_id}/board"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "token is required");
}

#[tokio::test]
async fn test_board_without_snapshot_has_null_flow_data() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Blank");
    let (link_id, password) = create_board_link(&app, &board, json!({})).await;

    let response = app
        .request(
            "GET",
            &format!("/api/public/links/{link_id}/board?token={password}"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["role"], "viewer");
    assert!(response.body["board"]["flow_data"].is_null());
}

#[tokio::test]
async fn test_business_unit_link_end_to_end() {
    let app = helpers::TestApp::new();
    let unit = app.seed_business_unit("Payments");
    let other = app.seed_business_unit("Billing");

    let env_id = EnvironmentId::new();
    let other_env_id = EnvironmentId::new();
    let workflow_id = WorkflowId::new();
    let now = helpers::start_time();

    app.resources.put_environment(Environment {
        id: env_id,
        business_unit_id: unit.id,
        name: "production".to_string(),
        description: None,
        integration_type: Some("rest".to_string()),
        variables: Some(json!({ "REGION": "eu" })),
        owner_id: None,
        created_at: now,
        updated_at: now,
    });
    app.resources.put_environment(Environment {
        id: other_env_id,
        business_unit_id: other.id,
        name: "staging".to_string(),
        description: None,
        integration_type: None,
        variables: None,
        owner_id: None,
        created_at: now,
        updated_at: now,
    });
    app.resources.put_workflow(Workflow {
        id: workflow_id,
        business_unit_id: unit.id,
        name: "refunds".to_string(),
        description: None,
        flow_data: Some(json!({ "steps": 3 })),
        owner_id: None,
        created_at: now,
        updated_at: now,
    });
    for environment_id in [env_id, other_env_id] {
        app.resources.put_workflow_environment(WorkflowEnvironment {
            id: Uuid::new_v4(),
            workflow_id,
            environment_id,
            flow_data_override: None,
            is_active: true,
            deployed_at: Some(now),
            created_at: now,
            updated_at: now,
        });
    }

    let (link_id, password) = create_unit_link(&app, &unit, json!({ "expiresIn": 1 })).await;

    let verified = app
        .request(
            "POST",
            &format!("/api/public/unit-links/{link_id}/verify"),
            Some(json!({ "password": password })),
            None,
        )
        .await;
    assert_eq!(verified.status, StatusCode::OK, "{:?}", verified.body);
    assert_eq!(verified.body["businessUnitId"], json!(unit.id.to_string()));
    assert_eq!(verified.body["businessUnitName"], "Payments");

    let fetched = app
        .request(
            "GET",
            &format!("/api/public/unit-links/{link_id}/business-unit?token={password}"),
            None,
            None,
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK, "{:?}", fetched.body);
    assert_eq!(fetched.body["businessUnit"]["name"], "Payments");

    let environments = fetched.body["environments"].as_array().expect("environments");
    assert_eq!(environments.len(), 1);
    assert_eq!(environments[0]["variables"], json!({ "REGION": "eu" }));

    let workflows = fetched.body["workflows"].as_array().expect("workflows");
    assert_eq!(workflows.len(), 1);
    assert_eq!(workflows[0]["flow_data"], json!({ "steps": 3 }));

    let deployments = fetched.body["workflowEnvironments"]
        .as_array()
        .expect("workflowEnvironments");
    assert_eq!(deployments.len(), 1);
    assert_eq!(deployments[0]["environment_id"], json!(env_id.to_string()));

    app.advance(Duration::hours(1));

    let expired = app
        .request(
            "GET",
            &format!("/api/public/unit-links/{link_id}/business-unit?token={password}"),
            None,
            None,
        )
        .await;
    assert_eq!(expired.status, StatusCode::GONE);
}

#[tokio::test]
async fn test_health() {
    let app = helpers::TestApp::new();

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "memory");
}

#[tokio::test]
async fn test_health_reports_unreachable_database() {
    let pool = PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_millis(250))
        .connect_lazy("postgres://flowboard@127.0.0.1:1/flowboard")
        .expect("lazy pool");
    let app = helpers::TestApp::with_database(DatabasePool::from_pool(pool));

    let response = app.request("GET", "/api/health", None, None).await;
    assert_eq!(response.status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(response.body["status"], "unavailable");
    assert_eq!(response.body["database"], "unavailable");
}
