/// Database models for Taskman
///
/// This module contains the two persisted record types and their CRUD
/// operations.
///
/// # Models
///
/// - `user`: User accounts keyed by username
/// - `task`: Tasks owned by a user, with a single completion transition
///
/// # Example
///
/// ```no_run
/// use taskman_shared::models::user::{CreateUser, User};
/// use sqlx::SqlitePool;
///
/// # async fn example(pool: SqlitePool) -> Result<(), sqlx::Error> {
/// let user = User::create(
///     &pool,
///     CreateUser {
///         username: Some("johndoe".to_string()),
///         email: Some("john@example.com".to_string()),
///         phone_number: None,
///     },
/// )
/// .await?;
/// # Ok(())
/// # }
/// ```

pub mod task;
pub mod user;
