/// Task data-access operations
///
/// All three operations resolve the owning user first. A lookup miss does
/// not short-circuit into a clean not-found result: it is logged and then
/// surfaced as a row-level storage error, which the API boundary maps to a
/// generic failure. Callers that want a 404 for unknown users do not get
/// one here.

use crate::models::task::{CreateTask, Task};
use crate::models::user::User;
use crate::ops::Envelope;
use sqlx::SqlitePool;
use tracing::{error, info};

/// Resolves the owning user for a task operation.
///
/// A miss is logged and converted to `RowNotFound` so it propagates like any
/// other storage failure.
async fn task_owner(pool: &SqlitePool, username: &str) -> Result<User, sqlx::Error> {
    info!("Retrieving user: {username}");
    match User::find_by_username(pool, username).await? {
        Some(user) => Ok(user),
        None => {
            error!("No user found with username {username}");
            Err(sqlx::Error::RowNotFound)
        }
    }
}

/// Returns all tasks owned by the given user
///
/// # Errors
///
/// Fails with `RowNotFound` for an unknown username, or propagates any other
/// storage error.
pub async fn list_tasks(pool: &SqlitePool, username: &str) -> Result<Vec<Task>, sqlx::Error> {
    let owner = task_owner(pool, username).await?;
    Task::list_by_username(pool, &owner.username).await
}

/// Creates a task for the given user and returns it in a success envelope
///
/// `completed` defaults to false and `priority` to 1 when absent. The title
/// is passed through unvalidated; the priority range is enforced by the
/// store's CHECK constraint only.
///
/// # Errors
///
/// Fails with `RowNotFound` for an unknown username, or propagates any other
/// storage error (missing title, out-of-range priority).
pub async fn create_task(
    pool: &SqlitePool,
    username: &str,
    title: Option<String>,
    description: Option<String>,
    completed: Option<bool>,
    priority: Option<i64>,
) -> Result<Envelope<Task>, sqlx::Error> {
    info!("Attempting to add task for user {username}");
    let owner = task_owner(pool, username).await?;

    let task = Task::create(
        pool,
        CreateTask {
            title,
            description,
            username: owner.username,
            completed: completed.unwrap_or(false),
            priority: priority.unwrap_or(1),
        },
    )
    .await?;
    info!(task_id = task.task_id, "Task added");

    Ok(Envelope::ok(task))
}

/// Marks a task as completed and returns it in a success envelope
///
/// Idempotent: completing an already-completed task succeeds.
///
/// # Errors
///
/// Fails with `RowNotFound` for an unknown username or task id, or
/// propagates any other storage error.
pub async fn complete_task(
    pool: &SqlitePool,
    username: &str,
    task_id: i64,
) -> Result<Envelope<Task>, sqlx::Error> {
    info!("Attempting to mark task {task_id} as completed for user {username}");
    let owner = task_owner(pool, username).await?;

    info!("Retrieving task: {task_id}");
    let found = Task::find_by_username_and_id(pool, &owner.username, task_id).await?;
    if found.is_none() {
        error!("No task found with task id {task_id} for user {username}");
    }
    let task = found.ok_or(sqlx::Error::RowNotFound)?;

    let task = Task::mark_completed(pool, &owner.username, task.task_id).await?;

    Ok(Envelope::ok(task))
}
