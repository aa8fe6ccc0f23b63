/// HTTP middleware for the API server
///
/// - `request_log`: per-request timing and structured logging

pub mod request_log;
