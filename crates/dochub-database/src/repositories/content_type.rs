//! Content-type registry repository.

use sqlx::PgPool;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_entity::content_type::ContentType;

/// Repository for the content-type registry.
#[derive(Debug, Clone)]
pub struct ContentTypeRepository {
    pool: PgPool,
}

impl ContentTypeRepository {
    /// Create a new content-type repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all registered content types.
    pub async fn find_all(&self) -> AppResult<Vec<ContentType>> {
        sqlx::query_as::<_, ContentType>("SELECT * FROM content_types ORDER BY name ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list content types", e)
            })
    }

    /// Check whether a content-type tag is registered.
    pub async fn exists(&self, name: &str) -> AppResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM content_types WHERE name = $1")
                .bind(name)
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to check content type", e)
                })?;
        Ok(count > 0)
    }
}
