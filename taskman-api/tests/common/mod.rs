/// Common test utilities for integration tests
///
/// This module provides shared infrastructure for integration tests:
/// - Fresh in-memory database per test, seeded with the sample data
/// - A built router the tests drive in-process via tower `Service` calls
/// - Request/response helpers

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use taskman_api::app::{build_router, AppState};
use taskman_shared::db::migrations::init_db;
use tower::Service as _;

/// Test context containing all necessary resources
pub struct TestContext {
    pub db: SqlitePool,
    pub app: axum::Router,
}

impl TestContext {
    /// Creates a new test context with a fresh, seeded in-memory database
    pub async fn new() -> anyhow::Result<Self> {
        // One connection only: each pooled :memory: connection would open a
        // distinct database.
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let db = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        init_db(&db).await?;

        let state = AppState::new(db.clone());
        let app = build_router(state);

        Ok(TestContext { db, app })
    }
}

/// Sends a request through the router and returns status plus parsed body
pub async fn send(ctx: &TestContext, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let response = ctx.app.clone().call(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

/// GET helper
pub async fn get(ctx: &TestContext, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    send(ctx, request).await
}

/// POST helper with a JSON body
pub async fn post_json(
    ctx: &TestContext,
    path: &str,
    body: serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    send(ctx, request).await
}

/// POST helper with no body at all
pub async fn post_empty(ctx: &TestContext, path: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    send(ctx, request).await
}
