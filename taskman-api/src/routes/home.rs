/// API root endpoint
///
/// Returns a static description of the API: name, version, and the list of
/// available endpoints.
///
/// # Endpoint
///
/// ```text
/// GET /
/// ```
///
/// # Response
///
/// ```json
/// {
///   "message": "Task Manager API",
///   "version": "1.0.0",
///   "endpoints": [
///     {"method": "GET", "path": "/api/users", "description": "Get all users"}
///   ]
/// }
/// ```

use axum::Json;
use serde::Serialize;
use tracing::info;

/// API description payload
#[derive(Debug, Serialize)]
pub struct ApiDescription {
    /// API display name
    pub message: &'static str,

    /// Application version
    pub version: &'static str,

    /// Available endpoints
    pub endpoints: Vec<EndpointInfo>,
}

/// One routable endpoint
#[derive(Debug, Serialize)]
pub struct EndpointInfo {
    /// HTTP method
    pub method: &'static str,

    /// Route path
    pub path: &'static str,

    /// What the endpoint does
    pub description: &'static str,
}

/// API root handler
pub async fn home() -> Json<ApiDescription> {
    info!("API root accessed");
    Json(ApiDescription {
        message: "Task Manager API",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: vec![
            EndpointInfo {
                method: "GET",
                path: "/api/users",
                description: "Get all users",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/users",
                description: "Create a new user",
            },
            EndpointInfo {
                method: "GET",
                path: "/api/users/{username}/tasks",
                description: "Get tasks for a specific user",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/users/{username}/tasks",
                description: "Create a new task for a user",
            },
            EndpointInfo {
                method: "POST",
                path: "/api/users/{username}/task/{task_id}/complete",
                description: "Complete a task for user",
            },
        ],
    })
}
