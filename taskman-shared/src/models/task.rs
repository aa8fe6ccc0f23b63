/// Task model and database operations
///
/// Tasks belong to exactly one user and carry a single boolean completion
/// flag; the only mutation in the system is flipping `completed` to true.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE tasks (
///     task_id     INTEGER PRIMARY KEY AUTOINCREMENT,
///     title       TEXT NOT NULL,
///     description TEXT,
///     username    TEXT NOT NULL REFERENCES users (username),
///     completed   BOOLEAN NOT NULL DEFAULT FALSE,
///     priority    INTEGER NOT NULL DEFAULT 1 CHECK (priority BETWEEN 1 AND 5)
/// );
/// ```

use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

/// Task model representing a single task owned by a user
///
/// The owning username serializes as `user_username` to keep the wire shape
/// distinct from the user record's own `username` field.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Task {
    /// Unique task id (auto-assigned)
    pub task_id: i64,

    /// Task title
    pub title: String,

    /// Optional free-form description
    pub description: Option<String>,

    /// Username of the owning user
    #[serde(rename = "user_username")]
    pub username: String,

    /// Whether the task has been completed
    pub completed: bool,

    /// Priority on a 1-5 scale
    pub priority: i64,
}

/// Input for creating a new task
///
/// `title` is optional here and required by the store; see `CreateUser` for
/// the same pattern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateTask {
    /// Task title (required by the store)
    pub title: Option<String>,

    /// Optional description
    pub description: Option<String>,

    /// Owning username
    pub username: String,

    /// Initial completion state
    pub completed: bool,

    /// Priority on a 1-5 scale (CHECK-constrained by the store)
    pub priority: i64,
}

impl Task {
    /// Creates a new task in the database
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The title is absent (NOT NULL constraint violation)
    /// - The priority falls outside 1-5 (CHECK constraint violation)
    /// - The owning user does not exist (foreign key violation)
    /// - The database operation fails
    pub async fn create(pool: &SqlitePool, data: CreateTask) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            INSERT INTO tasks (title, description, username, completed, priority)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING task_id, title, description, username, completed, priority
            "#,
        )
        .bind(data.title)
        .bind(data.description)
        .bind(data.username)
        .bind(data.completed)
        .bind(data.priority)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }

    /// Lists all tasks owned by a user, oldest first
    pub async fn list_by_username(
        pool: &SqlitePool,
        username: &str,
    ) -> Result<Vec<Self>, sqlx::Error> {
        let tasks = sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, title, description, username, completed, priority
            FROM tasks
            WHERE username = $1
            ORDER BY task_id
            "#,
        )
        .bind(username)
        .fetch_all(pool)
        .await?;

        Ok(tasks)
    }

    /// Finds a task by owning username and task id
    pub async fn find_by_username_and_id(
        pool: &SqlitePool,
        username: &str,
        task_id: i64,
    ) -> Result<Option<Self>, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            SELECT task_id, title, description, username, completed, priority
            FROM tasks
            WHERE username = $1 AND task_id = $2
            "#,
        )
        .bind(username)
        .bind(task_id)
        .fetch_optional(pool)
        .await?;

        Ok(task)
    }

    /// Marks a task as completed
    ///
    /// Idempotent: completing an already-completed task succeeds and leaves
    /// `completed` true.
    ///
    /// # Errors
    ///
    /// Returns `sqlx::Error::RowNotFound` if no task matches the pair, or any
    /// other error if the database operation fails.
    pub async fn mark_completed(
        pool: &SqlitePool,
        username: &str,
        task_id: i64,
    ) -> Result<Self, sqlx::Error> {
        let task = sqlx::query_as::<_, Task>(
            r#"
            UPDATE tasks
            SET completed = TRUE
            WHERE username = $1 AND task_id = $2
            RETURNING task_id, title, description, username, completed, priority
            "#,
        )
        .bind(username)
        .bind(task_id)
        .fetch_one(pool)
        .await?;

        Ok(task)
    }
}
