/// User model and database operations
///
/// Users are keyed by their username; there is no surrogate id. The email
/// address is also unique across all users, as is the optional phone number.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE users (
///     username     TEXT NOT NULL PRIMARY KEY,
///     email        TEXT NOT NULL UNIQUE,
///     phone_number TEXT UNIQUE,
///     created_at   TIMESTAMP DEFAULT CURRENT_TIMESTAMP
/// );
/// ```
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
///
/// let found = User::find_by_username(&pool, "johndoe").await?;
/// assert!(found.is_some());
/// # Ok(())
/// # }
/// ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// User model representing a user account
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    /// Unique username (primary key)
    pub username: String,

    /// Email address, unique across all users
    pub email: String,

    /// Optional phone number, unique when present
    pub phone_number: Option<String>,

    /// When the account was created (serialized as ISO-8601, null if absent)
    pub created_at: Option<DateTime<Utc>>,
}

/// Input for creating a new user
///
/// Fields are deliberately optional: the store, not this layer, rejects a
/// missing username or email via its NOT NULL constraints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateUser {
    /// Username (required by the store)
    pub username: Option<String>,

    /// Email address (required by the store)
    pub email: Option<String>,

    /// Optional phone number
    pub phone_number: Option<String>,
}

impl User {
    /// Creates a new user in the database
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Username or email already exists (unique constraint violation)
    /// - Username or email is absent (NOT NULL constraint violation)
    /// - The database operation fails
    pub async fn create(pool: &SqlitePool, data: CreateUser) -> Result<Self, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, email, phone_number, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING username, email, phone_number, created_at
            "#,
        )
        .bind(data.username)
        .bind(data.email)
        .bind(data.phone_number)
        .bind(Utc::now())
        .fetch_one(pool)
        .await?;

        Ok(user)
    }

    /// Finds a user by username
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn find_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT username, email, phone_number, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    /// Lists all users
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Self>, sqlx::Error> {
        let users = sqlx::query_as::<_, User>(
            r#"
            SELECT username, email, phone_number, created_at
            FROM users
            ORDER BY username
            "#,
        )
        .fetch_all(pool)
        .await?;

        Ok(users)
    }

    /// Counts total number of users
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails
    pub async fn count(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await?;

        Ok(count)
    }
}
