//! Database migration runner.

use sqlx::PgPool;
use tracing::info;

use dochub_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// List applied migrations as `(version, description)` pairs.
pub async fn applied_migrations(pool: &PgPool) -> Result<Vec<(i64, String)>, AppError> {
    sqlx::query_as::<_, (i64, String)>(
        "SELECT version, description FROM _sqlx_migrations ORDER BY version ASC",
    )
    .fetch_all(pool)
    .await
    .map_err(|e| {
        AppError::with_source(ErrorKind::Database, "Failed to read migration history", e)
    })
}
