/// Data-access operations for Taskman
///
/// These functions sit between the HTTP handlers and the model layer. They
/// are deliberately thin pass-throughs: no field validation happens here, so
/// malformed input reaches the store and fails against its constraints.
///
/// # Modules
///
/// - `users`: list and create users
/// - `tasks`: list, create, and complete a user's tasks

use serde::Serialize;

pub mod tasks;
pub mod users;

/// Success envelope returned by every mutating operation
///
/// Serializes as `{"success": true, "data": <record>}`.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    /// Always true for a returned envelope; failures propagate as errors
    pub success: bool,

    /// The serialized record the operation produced
    pub data: T,
}

impl<T> Envelope<T> {
    /// Wraps a record in a success envelope
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}
