//! Integration tests for creating, listing, and revoking access links.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use flowboard_auth::Standing;
use flowboard_core::types::UserId;
use flowboard_entity::link::ResourceRef;

#[tokio::test]
async fn test_owner_creates_board_link() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (_, token) = app.user_with(ResourceRef::Board(board.id), Standing::Owner);

    let response = app
        .request(
            "POST",
            &format!("/api/boards/{}/links", board.id),
            Some(json!({ "role": "editor", "expiresIn": 24 })),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);

    let link_id = helpers::uuid_field(&response.body, "linkId");
    let password = response.body["password"].as_str().expect("password");
    assert_eq!(password.len(), 12);
    assert_eq!(
        response.body["shareUrl"],
        json!(format!("https://app.flowboard.test/share/{link_id}"))
    );

    let expected_expiry = helpers::start_time() + chrono::Duration::hours(24);
    let expires_at: chrono::DateTime<chrono::Utc> =
        serde_json::from_value(response.body["expiresAt"].clone()).expect("expiresAt");
    assert_eq!(expires_at, expected_expiry);
}

#[tokio::test]
async fn test_editor_creates_link_without_expiry() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (_, token) = app.user_with(ResourceRef::Board(board.id), Standing::Editor);

    let response = app
        .request(
            "POST",
            &format!("/api/boards/{}/links", board.id),
            Some(json!({})),
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    assert!(response.body["expiresAt"].is_null());
}

#[tokio::test]
async fn test_list_board_links_never_exposes_secrets() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (_, token) = app.user_with(ResourceRef::Board(board.id), Standing::Owner);
    let path = format!("/api/boards/{}/links", board.id);

    for role in ["viewer", "editor", "admin"] {
        let created = app
            .request("POST", &path, Some(json!({ "role": role })), Some(&token))
            .await;
        assert_eq!(created.status, StatusCode::CREATED);
    }

    let response = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);

    let links = response.body.as_array().expect("array of links");
    assert_eq!(links.len(), 3);

    let roles: Vec<&str> = links
        .iter()
        .map(|l| l["role"].as_str().expect("role"))
        .collect();
    assert_eq!(roles, ["viewer", "editor", "viewer"]);

    for link in links {
        assert_eq!(link["board_id"], json!(board.id.to_string()));
        assert!(link["created_at"].is_string());
        assert!(link.get("boardId").is_none());
        assert!(link.get("password").is_none());
        assert!(link.get("passwordHash").is_none());
        assert!(link.get("password_hash").is_none());
    }
}

#[tokio::test]
async fn test_revoke_is_idempotent() {
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
    let path = format!("/api/boards/{}/links/{}", board.id, link_id);

    let first = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::NO_CONTENT);

    let second = app.request("DELETE", &path, None, Some(&token)).await;
    assert_eq!(second.status, StatusCode::NO_CONTENT);

    let listed = app
        .request(
            "GET",
            &format!("/api/boards/{}/links", board.id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_revoke_through_another_board_leaves_link_alone() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let other = app.seed_board("Other");
    let (user, token) = app.user_with(ResourceRef::Board(board.id), Standing::Owner);
    app.authority
        .grant(ResourceRef::Board(other.id), user, Standing::Owner);

    let created = app
        .request(
            "POST",
            &format!("/api/boards/{}/links", board.id),
            Some(json!({})),
            Some(&token),
        )
        .await;
    let link_id = helpers::uuid_field(&created.body, "linkId");

    let response = app
        .request(
            "DELETE",
            &format!("/api/boards/{}/links/{}", other.id, link_id),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);
    assert_eq!(app.links.len(), 1);
}

#[tokio::test]
async fn test_viewer_and_stranger_cannot_manage_links() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (_, viewer) = app.user_with(ResourceRef::Board(board.id), Standing::Viewer);
    let stranger = app.token_for(UserId::new());
    let path = format!("/api/boards/{}/links", board.id);

    for token in [&viewer, &stranger] {
        let create = app
            .request("POST", &path, Some(json!({})), Some(token))
            .await;
        assert_eq!(create.status, StatusCode::FORBIDDEN);
        assert_eq!(create.body["error"], "FORBIDDEN");

        let list = app.request("GET", &path, None, Some(token)).await;
        assert_eq!(list.status, StatusCode::FORBIDDEN);
    }

    assert!(app.links.is_empty());
}

#[tokio::test]
async fn test_missing_or_invalid_bearer_is_unauthorized() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let path = format!("/api/boards/{}/links", board.id);

    let missing = app.request("GET", &path, None, None).await;
    assert_eq!(missing.status, StatusCode::UNAUTHORIZED);
    assert_eq!(missing.body["error"], "UNAUTHORIZED");

    let garbage = app.request("GET", &path, None, Some("not-a-jwt")).await;
    assert_eq!(garbage.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_malformed_board_id_is_bad_request() {
    let app = helpers::TestApp::new();
    let token = app.token_for(UserId::new());

    let response = app
        .request("GET", "/api/boards/not-a-uuid/links", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_non_positive_expiry_means_no_expiry() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (_, token) = app.user_with(ResourceRef::Board(board.id), Standing::Owner);

    for hours in [0, -5] {
        let response = app
            .request(
                "POST",
                &format!("/api/boards/{}/links", board.id),
                Some(json!({ "expiresIn": hours })),
                Some(&token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED);
        assert!(response.body["expiresAt"].is_null());
    }
}

#[tokio::test]
async fn test_unit_link_lifecycle() {
    let app = helpers::TestApp::new();
    let unit = app.seed_business_unit("Payments");
    let resource = ResourceRef::BusinessUnit(unit.id);
    let (owner, token) = app.user_with(resource, Standing::Owner);
    let path = format!("/api/business-units/{}/links", unit.id);

    let created = app
        .request("POST", &path, Some(json!({ "expiresIn": 2 })), Some(&token))
        .await;
    assert_eq!(created.status, StatusCode::CREATED, "{:?}", created.body);
    let link_id = helpers::uuid_field(&created.body, "linkId");
    assert_eq!(
        created.body["shareUrl"],
        json!(format!("https://app.flowboard.test/customer/login/{link_id}"))
    );

    let listed = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(listed.status, StatusCode::OK);
    let links = listed.body.as_array().expect("array of links");
    assert_eq!(links.len(), 1);
    assert_eq!(links[0]["business_unit_id"], json!(unit.id.to_string()));
    assert!(links[0]["expires_at"].is_string());
    assert_eq!(links[0]["created_by"], json!(owner.to_string()));
    assert!(links[0].get("role").is_none());
    assert!(links[0].get("password").is_none());

    let revoked = app
        .request("DELETE", &format!("{path}/{link_id}"), None, Some(&token))
        .await;
    assert_eq!(revoked.status, StatusCode::NO_CONTENT);

    let listed = app.request("GET", &path, None, Some(&token)).await;
    assert_eq!(listed.body, json!([]));
}

#[tokio::test]
async fn test_board_grant_does_not_cover_business_unit() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let unit = app.seed_business_unit("Payments");
    let (_, token) = app.user_with(ResourceRef::Board(board.id), Standing::Owner);

    let response = app
        .request(
            "POST",
            &format!("/api/business-units/{}/links", unit.id),
            Some(json!({})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_store_outage_is_opaque_internal_error() {
    let app = helpers::TestApp::new();
    let board = app.seed_board("Roadmap");
    let (_, token) = app.user_with(ResourceRef::Board(board.id), Standing::Owner);
    app.links.set_unavailable(true);

    let response = app
        .request(
            "POST",
            &format!("/api/boards/{}/links", board.id),
            Some(json!({})),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body["message"], "internal error");
}
