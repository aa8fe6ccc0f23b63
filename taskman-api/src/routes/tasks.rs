/// Task endpoints
///
/// # Endpoints
///
/// - `GET /api/users/{username}/tasks` - List a user's tasks
/// - `POST /api/users/{username}/tasks` - Create a task for a user
/// - `POST /api/users/{username}/task/{task_id}/complete` - Complete a task
///
/// An unknown username or task id inside these routes is NOT a 404: the
/// lookup miss propagates out of the data-access layer as a storage error
/// and maps to the route's generic 500. Only unrouted paths produce 404s.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use taskman_shared::models::task::Task;
use taskman_shared::ops::{tasks as task_ops, Envelope};
use tracing::{error, warn};

/// Create task request
///
/// Only the presence of the body is checked; `title` being required is the
/// store's concern. `completed` defaults to false and `priority` to 1.
#[derive(Debug, Deserialize)]
pub struct CreateTaskRequest {
    /// Task title
    pub title: Option<String>,

    /// Optional description
    pub description: Option<String>,

    /// Initial completion state
    pub completed: Option<bool>,

    /// Priority on a 1-5 scale
    pub priority: Option<i64>,
}

/// List tasks handler
///
/// # Endpoint
///
/// ```text
/// GET /api/users/{username}/tasks
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: unknown user or any storage failure
pub async fn list_user_tasks(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<Task>>> {
    let tasks = task_ops::list_tasks(&state.db, &username)
        .await
        .map_err(|err| {
            error!(error = %err, %username, "Error retrieving tasks");
            ApiError::Internal("Failed to retrieve tasks".to_string())
        })?;

    Ok(Json(tasks))
}

/// Create task handler
///
/// # Endpoint
///
/// ```text
/// POST /api/users/{username}/tasks
/// Content-Type: application/json
///
/// {
///   "title": "Buy milk",
///   "description": "2% if they have it",
///   "priority": 2
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": {"task_id": 4, "title": "Buy milk", "completed": false, ...}
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: no JSON body provided
/// - `500 Internal Server Error`: unknown user, constraint violation, or any
///   other storage failure
pub async fn create_user_task(
    State(state): State<AppState>,
    Path(username): Path<String>,
    payload: Option<Json<CreateTaskRequest>>,
) -> ApiResult<Json<Envelope<Task>>> {
    let Some(Json(req)) = payload else {
        warn!("Invalid request: no JSON data provided");
        return Err(ApiError::BadRequest("No data provided".to_string()));
    };

    let envelope = task_ops::create_task(
        &state.db,
        &username,
        req.title,
        req.description,
        req.completed,
        req.priority,
    )
    .await
    .map_err(|err| {
        error!(error = %err, %username, "Error creating task");
        ApiError::Internal("Failed to create task".to_string())
    })?;

    Ok(Json(envelope))
}

/// Complete task handler
///
/// # Endpoint
///
/// ```text
/// POST /api/users/{username}/task/{task_id}/complete
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: unknown user or task, or any storage
///   failure
pub async fn complete_user_task(
    State(state): State<AppState>,
    Path((username, task_id)): Path<(String, i64)>,
) -> ApiResult<Json<Envelope<Task>>> {
    let envelope = task_ops::complete_task(&state.db, &username, task_id)
        .await
        .map_err(|err| {
            error!(error = %err, %username, task_id, "Error completing task");
            ApiError::Internal("Failed to complete task".to_string())
        })?;

    Ok(Json(envelope))
}
