/// Request timing and logging middleware
///
/// Every request is logged with a short random id, method, path, status, and
/// wall-clock duration. Requests slower than the threshold are escalated to
/// a warning so they stand out in the logs.

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Requests slower than this are logged as warnings.
const SLOW_REQUEST_THRESHOLD_MS: u64 = 500;

/// Middleware function that times and logs each request
pub async fn track_requests(req: Request, next: Next) -> Response {
    let id = Uuid::new_v4().simple().to_string();
    let request_id = &id[..8];
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let start = Instant::now();
    let response = next.run(req).await;
    let duration_ms = start.elapsed().as_millis() as u64;

    let status = response.status().as_u16();
    if duration_ms > SLOW_REQUEST_THRESHOLD_MS {
        warn!(
            target: "performance",
            request_id,
            %method,
            %path,
            status,
            duration_ms,
            "SLOW REQUEST"
        );
    } else {
        info!(
            target: "performance",
            request_id,
            %method,
            %path,
            status,
            duration_ms,
            "request completed"
        );
    }

    response
}
