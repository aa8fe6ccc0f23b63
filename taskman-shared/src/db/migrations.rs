/// Database migration runner and one-time initialization
///
/// Migrations live in the `migrations/` directory of this crate and are
/// embedded at compile time via `sqlx::migrate!`. On top of schema creation,
/// `init_db` seeds a small fixed data set the first time it runs against an
/// empty store, so demos and integration tests start from a reproducible
/// state.
///
/// # Example
///
/// ```no_run
/// use taskman_shared::db::migrations::init_db;
/// use taskman_shared::db::pool::{create_pool, DatabaseConfig};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DatabaseConfig {
///     url: "sqlite://users.db".to_string(),
///     ..Default::default()
/// };
/// let pool = create_pool(config).await?;
///
/// init_db(&pool).await?;
/// # Ok(())
/// # }
/// ```

use crate::models::task::{CreateTask, Task};
use crate::models::user::{CreateUser, User};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Error type for database initialization
#[derive(Debug, thiserror::Error)]
pub enum InitError {
    /// A migration failed to apply
    #[error("Migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Seeding the sample data failed
    #[error("Seeding failed: {0}")]
    Seed(#[from] sqlx::Error),
}

/// Runs all pending database migrations
///
/// # Errors
///
/// Returns an error if a migration file is malformed or fails to execute.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}

/// Initializes the database: creates the schema and seeds sample data
///
/// Idempotent: re-running against a non-empty store is a no-op beyond the
/// migration bookkeeping.
///
/// # Errors
///
/// Returns an error if migrations or seeding fail.
pub async fn init_db(pool: &SqlitePool) -> Result<(), InitError> {
    run_migrations(pool).await?;
    seed_sample_data(pool).await?;
    Ok(())
}

/// Seeds two users and three tasks, but only if the users table is empty.
///
/// The values are fixed so that demo runs and integration tests see the same
/// records every time.
async fn seed_sample_data(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    if User::count(pool).await? > 0 {
        debug!("Users already present, skipping sample data");
        return Ok(());
    }

    info!("Initializing database with sample data");

    User::create(
        pool,
        CreateUser {
            username: Some("johndoe".to_string()),
            email: Some("john@example.com".to_string()),
            phone_number: None,
        },
    )
    .await?;
    User::create(
        pool,
        CreateUser {
            username: Some("janedoe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone_number: None,
        },
    )
    .await?;

    Task::create(
        pool,
        CreateTask {
            title: Some("Complete project".to_string()),
            description: Some("Finish the task manager project".to_string()),
            username: "johndoe".to_string(),
            completed: false,
            priority: 3,
        },
    )
    .await?;
    Task::create(
        pool,
        CreateTask {
            title: Some("Buy groceries".to_string()),
            description: Some("Milk, eggs, bread".to_string()),
            username: "johndoe".to_string(),
            completed: false,
            priority: 2,
        },
    )
    .await?;
    Task::create(
        pool,
        CreateTask {
            title: Some("Learn Rust".to_string()),
            description: Some("Study the axum and sqlx documentation".to_string()),
            username: "janedoe".to_string(),
            completed: false,
            priority: 4,
        },
    )
    .await?;

    info!("Sample data created successfully");
    Ok(())
}
