/// User data-access operations
///
/// Direct pass-throughs to the model layer. Inputs arrive exactly as the
/// handler read them from the request body; required-field enforcement is the
/// store's job (NOT NULL and UNIQUE constraints).

use crate::models::user::{CreateUser, User};
use crate::ops::Envelope;
use sqlx::SqlitePool;
use tracing::info;

/// Returns all users
///
/// # Errors
///
/// Returns an error if the database operation fails
pub async fn list_users(pool: &SqlitePool) -> Result<Vec<User>, sqlx::Error> {
    info!("Retrieving list of users");
    User::list(pool).await
}

/// Creates a user and returns it in a success envelope
///
/// A missing username or email reaches the store as NULL and fails there;
/// duplicate usernames or emails fail against the unique constraints.
///
/// # Errors
///
/// Propagates the storage error unchanged.
pub async fn create_user(
    pool: &SqlitePool,
    name: Option<String>,
    email: Option<String>,
    phone_number: Option<String>,
) -> Result<Envelope<User>, sqlx::Error> {
    info!(username = ?name, "Received user");
    let user = User::create(
        pool,
        CreateUser {
            username: name,
            email,
            phone_number,
        },
    )
    .await?;
    info!(username = %user.username, "User added");

    Ok(Envelope::ok(user))
}
