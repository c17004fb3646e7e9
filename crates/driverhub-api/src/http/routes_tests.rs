use super::*;
use crate::dispatcher::Dispatcher;
use axum::http::{header, StatusCode};
use driverhub_core::MemorySessionStore;
use driverhub_protocols::Dialect;
use serde_json::{json, Value};
use tower::ServiceExt;

fn create_test_router(max_body_bytes: usize) -> Router {
    let dispatcher = Dispatcher::with_builtins(Arc::new(MemorySessionStore::new()), Dialect::W3c);
    create_router(Arc::new(AppState::new(Arc::new(dispatcher), max_body_bytes)))
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = create_test_router(1024);
    let response = app
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json; charset=utf-8"
    );
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-cache");
    let body = body_json(response).await;
    assert_eq!(body["value"]["ready"], true);
}

#[tokio::test]
async fn test_new_session_endpoint() {
    let app = create_test_router(1024);
    let body = json!({"capabilities": {"alwaysMatch": {"browserName": "firefox"}}});

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], 0);
    assert!(!body["sessionId"].as_str().unwrap().is_empty());
    assert_eq!(body["value"]["browserName"], "firefox");
}

#[tokio::test]
async fn test_delete_unknown_session_endpoint() {
    let app = create_test_router(1024);
    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/session/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["value"]["error"], "invalid session id");
}

#[tokio::test]
async fn test_unknown_path_endpoint() {
    let app = create_test_router(1024);
    let response = app
        .oneshot(
            Request::builder()
                .uri("/session/abc/nonexistent")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["value"]["error"], "invalid argument");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let app = create_test_router(16);
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/session")
                .body(Body::from(format!(r#"{{"desiredCapabilities": {{"x": "{}"}}}}"#, "y".repeat(64))))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["status"], 61);
}
