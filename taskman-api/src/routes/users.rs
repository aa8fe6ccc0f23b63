/// User endpoints
///
/// # Endpoints
///
/// - `GET /api/users` - List all users
/// - `POST /api/users` - Create a new user
///
/// Request bodies are read permissively: fields are optional at this layer
/// and required-field enforcement happens in the store. The only check a
/// handler performs is that a JSON body is present at all.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{extract::State, Json};
use serde::Deserialize;
use taskman_shared::models::user::User;
use taskman_shared::ops::{users as user_ops, Envelope};
use tracing::{error, warn};

/// Create user request
///
/// All fields optional; a missing username or email fails in the store.
#[derive(Debug, Deserialize)]
pub struct CreateUserRequest {
    /// Username (primary key)
    pub username: Option<String>,

    /// Email address
    pub email: Option<String>,

    /// Optional phone number
    pub phone_number: Option<String>,
}

/// List users handler
///
/// # Endpoint
///
/// ```text
/// GET /api/users
/// ```
///
/// # Errors
///
/// - `500 Internal Server Error`: any storage failure
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = user_ops::list_users(&state.db).await.map_err(|err| {
        error!(error = %err, "Error retrieving users");
        ApiError::Internal("Failed to retrieve users".to_string())
    })?;

    Ok(Json(users))
}

/// Create user handler
///
/// # Endpoint
///
/// ```text
/// POST /api/users
/// Content-Type: application/json
///
/// {
///   "username": "alice",
///   "email": "alice@example.com",
///   "phone_number": "+15551234567"
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "success": true,
///   "data": {"username": "alice", "email": "alice@example.com", ...}
/// }
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: no JSON body provided
/// - `500 Internal Server Error`: constraint violation or any other storage
///   failure
pub async fn create_user(
    State(state): State<AppState>,
    payload: Option<Json<CreateUserRequest>>,
) -> ApiResult<Json<Envelope<User>>> {
    let Some(Json(req)) = payload else {
        warn!("Invalid request: no JSON data provided");
        return Err(ApiError::BadRequest("No data provided".to_string()));
    };

    let envelope = user_ops::create_user(&state.db, req.username, req.email, req.phone_number)
        .await
        .map_err(|err| {
            error!(error = %err, "Error creating user");
            ApiError::Internal("Failed to create user".to_string())
        })?;

    Ok(Json(envelope))
}
