//! Shared helpers for API integration tests.
//!
//! Mirrors the production router construction so tests exercise the same
//! middleware stack (CORS, request ID, timeout, tracing, panic recovery).

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

use crewdeck_api::config::ServerConfig;
use crewdeck_api::router::build_app_router;
use crewdeck_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Send a GET request to the app.
pub async fn get(app: &Router, path: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Send a POST request with a JSON body to the app.
pub async fn post_json(app: &Router, path: &str, body: Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.clone().oneshot(request).await.unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// POST a document to the execute endpoint, returning status and envelope.
pub async fn execute(app: &Router, document: Value) -> (StatusCode, Value) {
    let response = post_json(app, "/api/v1/execute", document).await;
    let status = response.status();
    (status, body_json(response).await)
}

/// Create an organization through the API, asserting success. Returns the
/// organization object from the mutation payload.
pub async fn seed_organization(app: &Router, name: &str, slug: &str) -> Value {
    let (status, envelope) = execute(
        app,
        serde_json::json!({
            "mutation": { "create_organization": {
                "name": name,
                "slug": slug,
                "contact_email": format!("{slug}@example.com"),
            } }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let payload = &envelope["data"]["create_organization"];
    assert_eq!(payload["success"], true, "seed org failed: {envelope}");
    payload["organization"].clone()
}

/// Create a project through the API, asserting success. Returns the project
/// object from the mutation payload.
pub async fn seed_project(app: &Router, organization_slug: &str, name: &str) -> Value {
    let (status, envelope) = execute(
        app,
        serde_json::json!({
            "mutation": { "create_project": {
                "organization_slug": organization_slug,
                "name": name,
            } }
        }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let payload = &envelope["data"]["create_project"];
    assert_eq!(payload["success"], true, "seed project failed: {envelope}");
    payload["project"].clone()
}

/// Create a task through the API, asserting success. Returns the task
/// object from the mutation payload.
pub async fn seed_task(app: &Router, project_id: i64, title: &str, status: &str) -> Value {
    let (http_status, envelope) = execute(
        app,
        serde_json::json!({
            "mutation": { "create_task": {
                "project_id": project_id,
                "title": title,
                "status": status,
            } }
        }),
    )
    .await;
    assert_eq!(http_status, StatusCode::OK);
    let payload = &envelope["data"]["create_task"];
    assert_eq!(payload["success"], true, "seed task failed: {envelope}");
    payload["task"].clone()
}
