/// Database layer for Taskman
///
/// This module provides database connection pooling and schema initialization.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `migrations`: Migration runner and one-time sample-data seeding
/// - Models are in the `models` module at crate root level
///
/// # Example
///
/// ```no_run
/// use taskman_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite://users.db".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
