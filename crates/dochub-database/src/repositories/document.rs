//! Document repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_core::types::pagination::{PageRequest, PageResponse};
use dochub_entity::document::{CreateDocument, Document};

/// Repository for document CRUD operations.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a document by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    /// Find a document by ID, scoped to an owner.
    pub async fn find_by_id_for_owner(
        &self,
        id: Uuid,
        owner_id: Uuid,
    ) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find document for owner", e)
            })
    }

    /// List a user's documents with pagination, newest first.
    pub async fn find_by_owner(
        &self,
        owner_id: Uuid,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Document>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE owner_id = $1")
            .bind(owner_id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count documents", e)
            })?;

        let documents = sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE owner_id = $1 \
             ORDER BY created_at DESC LIMIT $2 OFFSET $3",
        )
        .bind(owner_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))?;

        Ok(PageResponse::new(
            documents,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List all documents in a folder.
    pub async fn find_by_folder(&self, folder_id: Uuid) -> AppResult<Vec<Document>> {
        sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE folder_id = $1 ORDER BY title ASC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list folder documents", e)
        })
    }

    /// Create a new document.
    pub async fn create(&self, data: &CreateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "INSERT INTO documents (title, content, content_type, folder_id, owner_id) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(&data.content_type)
        .bind(data.folder_id)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create document", e))
    }

    /// Update a document's title, content, content type, and folder.
    pub async fn update(&self, document: &Document) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "UPDATE documents SET title = $2, content = $3, content_type = $4, \
             folder_id = $5, updated_at = NOW() WHERE id = $1 RETURNING *",
        )
        .bind(document.id)
        .bind(&document.title)
        .bind(&document.content)
        .bind(&document.content_type)
        .bind(document.folder_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update document", e))?
        .ok_or_else(|| AppError::not_found(format!("Document {} not found", document.id)))
    }

    /// Delete a document. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM documents WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete document", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
