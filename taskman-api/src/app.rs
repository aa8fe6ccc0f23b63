/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use taskman_api::app::{build_router, AppState};
/// use sqlx::SqlitePool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let pool = SqlitePool::connect("sqlite://users.db").await?;
/// let state = AppState::new(pool);
/// let app = build_router(state);
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use crate::error::ApiError;
use axum::{
    http::Uri,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use sqlx::SqlitePool;
use tower_http::{
    catch_panic::CatchPanicLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// This is cloned for each request handler via Axum's `State` extractor.
/// The pool is Arc-backed, so cloning is cheap. The pool handle is the only
/// process-wide state; handlers hold it per-request, never globally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Creates new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── GET  /                                              # API description
/// ├── GET  /api/users                                     # List users
/// ├── POST /api/users                                     # Create user
/// ├── GET  /api/users/:username/tasks                     # List tasks
/// ├── POST /api/users/:username/tasks                     # Create task
/// └── POST /api/users/:username/task/:task_id/complete    # Complete task
/// ```
///
/// # Middleware Stack
///
/// Applied in order (bottom to top):
/// 1. Request timing/logging (custom middleware)
/// 2. Panic catcher (tower-http CatchPanicLayer)
/// 3. Tracing (tower-http TraceLayer)
///
/// Unrouted paths fall through to a JSON 404; panics surface as a generic
/// JSON 500 rather than an empty response.
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let user_routes = Router::new().route(
        "/api/users",
        get(routes::users::list_users).post(routes::users::create_user),
    );

    let task_routes = Router::new()
        .route(
            "/api/users/:username/tasks",
            get(routes::tasks::list_user_tasks).post(routes::tasks::create_user_task),
        )
        .route(
            "/api/users/:username/task/:task_id/complete",
            post(routes::tasks::complete_user_task),
        );

    Router::new()
        .route("/", get(routes::home::home))
        .merge(user_routes)
        .merge(task_routes)
        .fallback(resource_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(axum::middleware::from_fn(
            crate::middleware::request_log::track_requests,
        ))
        .with_state(state)
}

/// Fallback handler for unrouted paths
async fn resource_not_found(uri: Uri) -> ApiError {
    tracing::warn!("404 error: {} not found", uri.path());
    ApiError::NotFound("Resource not found".to_string())
}

/// Maps a handler panic to the generic JSON 500
fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!("Unhandled panic while serving request: {detail}");

    ApiError::Internal("An unexpected error occurred".to_string()).into_response()
}
