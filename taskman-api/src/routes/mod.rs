/// API route handlers
///
/// This module contains all route handlers organized by resource:
///
/// - `home`: API root describing the available endpoints
/// - `users`: User listing and creation
/// - `tasks`: Task listing, creation, and completion

pub mod home;
pub mod tasks;
pub mod users;
