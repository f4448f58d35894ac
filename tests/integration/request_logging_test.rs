//! Request logs must never contain link passwords passed as `?token=`.

mod helpers;

use std::io::Write;
use std::sync::{Arc, Mutex};

use axum::http::StatusCode;
use serde_json::json;

use flowboard_auth::Standing;
use flowboard_entity::link::ResourceRef;

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn text(&self) -> String {
        let bytes = self.0.lock().expect("log buffer").clone();
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().expect("log buffer").extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

#[tokio::test]
async fn test_board_fetch_logs_path_without_query_secret() {
    let logs = CapturedLogs::default();
    let writer = logs.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

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
    assert_eq!(created.status, StatusCode::CREATED);
    let link_id = helpers::uuid_field(&created.body, "linkId");
    let password = created.body["password"]
        .as_str()
        .expect("password")
        .to_string();

    let fetched = app
        .request(
            "GET",
            &format!("/api/public/links/{link_id}/board?token={password}"),
            None,
            None,
        )
        .await;
    assert_eq!(fetched.status, StatusCode::OK);

    let output = logs.text();
    assert!(
        output.contains(&format!("/api/public/links/{link_id}/board")),
        "request path missing from logs:\n{output}"
    );
    assert!(
        !output.contains(&password),
        "link password leaked into logs:\n{output}"
    );
    assert!(!output.contains("token="), "query string leaked:\n{output}");
}
