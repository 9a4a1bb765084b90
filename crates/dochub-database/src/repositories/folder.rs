//! Folder repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use dochub_core::error::{AppError, ErrorKind};
use dochub_core::result::AppResult;
use dochub_entity::folder::{CreateFolder, Folder};

/// Repository for folder CRUD and tree queries.
#[derive(Debug, Clone)]
pub struct FolderRepository {
    pool: PgPool,
}

impl FolderRepository {
    /// Create a new folder repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a folder by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find folder", e))
    }

    /// Find a folder by ID, scoped to an owner.
    pub async fn find_by_id_for_owner(&self, id: Uuid, owner_id: Uuid) -> AppResult<Option<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE id = $1 AND owner_id = $2")
            .bind(id)
            .bind(owner_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find folder for owner", e)
            })
    }

    /// List all folders owned by a user (flat).
    pub async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE owner_id = $1 ORDER BY name ASC")
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list folders", e))
    }

    /// List direct children of a folder.
    pub async fn find_children(&self, parent_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>("SELECT * FROM folders WHERE parent_id = $1 ORDER BY name ASC")
            .bind(parent_id)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list children", e))
    }

    /// Recursive query for all descendants of a folder, nearest first.
    ///
    /// The returned order is suitable for top-down traversal; reverse it
    /// for bottom-up deletion.
    pub async fn find_descendants(&self, folder_id: Uuid) -> AppResult<Vec<Folder>> {
        sqlx::query_as::<_, Folder>(
            "WITH RECURSIVE tree AS ( \
                SELECT f.*, 0 AS level FROM folders f WHERE f.id = $1 \
                UNION ALL \
                SELECT f.*, t.level + 1 FROM folders f INNER JOIN tree t ON f.parent_id = t.id \
             ) SELECT id, name, parent_id, owner_id, created_at, updated_at \
               FROM tree WHERE id != $1 ORDER BY level ASC, name ASC",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list descendants", e))
    }

    /// Get the IDs of the ancestor chain from a folder up to its root,
    /// starting with the folder itself.
    pub async fn find_ancestor_ids(&self, folder_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar::<_, Uuid>(
            "WITH RECURSIVE ancestors AS ( \
                SELECT f.id, f.parent_id FROM folders f WHERE f.id = $1 \
                UNION ALL \
                SELECT f.id, f.parent_id FROM folders f \
                INNER JOIN ancestors a ON f.id = a.parent_id \
             ) SELECT id FROM ancestors",
        )
        .bind(folder_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find ancestors", e))
    }

    /// Create a new folder.
    pub async fn create(&self, data: &CreateFolder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "INSERT INTO folders (name, parent_id, owner_id) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.parent_id)
        .bind(data.owner_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err)
                if db_err.constraint() == Some("folders_owner_parent_name_key") =>
            {
                AppError::conflict(format!("A folder named '{}' already exists here", data.name))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create folder", e),
        })
    }

    /// Update a folder's name and parent.
    pub async fn update(&self, folder: &Folder) -> AppResult<Folder> {
        sqlx::query_as::<_, Folder>(
            "UPDATE folders SET name = $2, parent_id = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(folder.id)
        .bind(&folder.name)
        .bind(folder.parent_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err)
                if db_err.constraint() == Some("folders_owner_parent_name_key") =>
            {
                AppError::conflict(format!(
                    "A folder named '{}' already exists here",
                    folder.name
                ))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to update folder", e),
        })?
        .ok_or_else(|| AppError::not_found(format!("Folder {} not found", folder.id)))
    }

    /// Delete a folder subtree and all documents inside it.
    ///
    /// `folder_ids` must contain the subtree root plus every descendant.
    /// Documents are removed first, then folders bottom-up (children before
    /// parents), all inside a single transaction so a mid-traversal failure
    /// rolls back the whole delete.
    pub async fn delete_subtree(&self, folder_ids_bottom_up: &[Uuid]) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let docs_deleted = sqlx::query("DELETE FROM documents WHERE folder_id = ANY($1)")
            .bind(folder_ids_bottom_up)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete documents", e)
            })?
            .rows_affected();

        for id in folder_ids_bottom_up {
            sqlx::query("DELETE FROM folders WHERE id = $1")
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to delete folder", e)
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit subtree delete", e)
        })?;

        Ok(docs_deleted)
    }
}
