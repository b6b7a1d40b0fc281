//! HTTP router tests
//!
//! Drives the router in-process with `tower::ServiceExt::oneshot`.
//!
//! Run with: cargo test --test http_tests

use std::io::Write;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use biblio::server::BiblioServer;
use biblio::{BookEngine, EngineConfig};

async fn post_json(engine: Arc<BookEngine>, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = BiblioServer::router(engine).oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_generate_note_with_description_only() {
    let engine = Arc::new(BookEngine::new());
    let (status, body) = post_json(
        engine,
        "/api/v1/generate-note",
        json!({ "description": "A mystery at the lighthouse" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "vibe": "A mysterious tale that will keep you guessing." })
    );
}

#[tokio::test]
async fn test_generate_note_missing_description_is_empty() {
    let engine = Arc::new(BookEngine::new());
    let (status, body) = post_json(engine, "/api/v1/generate-note", json!({})).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vibe"], "A delightful read for any quiet moment.");
}

#[tokio::test]
async fn test_generate_note_uses_catalog() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"{"books":[{"title":"Rebecca","author":"Daphne du Maurier","moods":["dark","gothic"]}]}"#,
    )
    .unwrap();
    let config = EngineConfig {
        mood_catalog_path: Some(file.path().to_path_buf()),
        ..EngineConfig::default()
    };
    let engine = Arc::new(BookEngine::from_config(&config));

    let (_, body) = post_json(
        engine.clone(),
        "/api/v1/generate-note",
        json!({ "description": "", "title": "Rebecca", "author": "Daphne du Maurier" }),
    )
    .await;
    assert_eq!(body["vibe"], "Readers describe this as dark and gothic.");

    let (_, body) = post_json(engine, "/api/v1/mood-tags", json!({ "title": "rebecca" })).await;
    assert_eq!(body, json!({ "tags": ["dark", "gothic"] }));
}

#[tokio::test]
async fn test_chat_endpoint_accepts_history() {
    let engine = Arc::new(BookEngine::new());
    let (status, body) = post_json(
        engine,
        "/api/v1/chat",
        json!({
            "message": "I want something cozy",
            "history": [{ "role": "user", "content": "hello" }]
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("Ah, cozy reads are my specialty!"));
}

#[tokio::test]
async fn test_mood_tags_without_catalog_is_empty() {
    let engine = Arc::new(BookEngine::new());
    let (_, body) = post_json(engine, "/api/v1/mood-tags", json!({ "title": "Dune" })).await;
    assert_eq!(body, json!({ "tags": [] }));
}

#[tokio::test]
async fn test_recommendations_endpoint() {
    let engine = Arc::new(BookEngine::new());
    let (_, body) = post_json(
        engine,
        "/api/v1/recommendations",
        json!({ "query": "dragons" }),
    )
    .await;
    assert_eq!(body, json!({ "query": "AI-optimized search for: dragons" }));
}

#[tokio::test]
async fn test_health_reports_enhanced_flag() {
    let engine = Arc::new(BookEngine::new());
    let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
    let response = BiblioServer::router(engine).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body, json!({ "status": "ok", "enhanced": false }));
}
