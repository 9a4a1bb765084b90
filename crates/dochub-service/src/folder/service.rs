//! Folder CRUD operations with ownership enforcement.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use dochub_core::error::AppError;
use dochub_database::repositories::document::DocumentRepository;
use dochub_database::repositories::folder::FolderRepository;
use dochub_entity::document::Document;
use dochub_entity::folder::{CreateFolder, Folder};

use crate::context::RequestContext;

/// Manages folder CRUD operations.
#[derive(Debug, Clone)]
pub struct FolderService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
    /// Document repository.
    document_repo: Arc<DocumentRepository>,
}

/// Request to create a new folder.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateFolderRequest {
    /// Folder name.
    pub name: String,
    /// Parent folder ID (None for root-level).
    pub parent_id: Option<Uuid>,
}

/// Request to rename and/or reparent a folder.
///
/// `parent_id: None` moves the folder to the root level.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct UpdateFolderRequest {
    /// New folder name.
    pub name: String,
    /// New parent folder ID.
    pub parent_id: Option<Uuid>,
}

/// A folder together with its direct contents.
#[derive(Debug, Clone)]
pub struct FolderDetail {
    /// The folder itself.
    pub folder: Folder,
    /// Documents placed directly in this folder.
    pub documents: Vec<Document>,
    /// Direct child folders.
    pub children: Vec<Folder>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(folder_repo: Arc<FolderRepository>, document_repo: Arc<DocumentRepository>) -> Self {
        Self {
            folder_repo,
            document_repo,
        }
    }

    /// Creates a new folder.
    ///
    /// When a parent is given it must exist and belong to the requester.
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        req: CreateFolderRequest,
    ) -> Result<Folder, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        if let Some(parent_id) = req.parent_id {
            self.require_owned_parent(ctx, parent_id).await?;
        }

        let folder = self
            .folder_repo
            .create(&CreateFolder {
                name: req.name,
                parent_id: req.parent_id,
                owner_id: ctx.user_id,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder.id,
            name = %folder.name,
            "Folder created"
        );

        Ok(folder)
    }

    /// Gets a folder with its documents and direct children.
    ///
    /// A folder owned by another user is indistinguishable from a missing
    /// one.
    pub async fn get_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
    ) -> Result<FolderDetail, AppError> {
        let folder = self
            .folder_repo
            .find_by_id_for_owner(folder_id, ctx.user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Folder not found or does not belong to the user")
            })?;

        let documents = self.document_repo.find_by_folder(folder_id).await?;
        let children = self.folder_repo.find_children(folder_id).await?;

        Ok(FolderDetail {
            folder,
            documents,
            children,
        })
    }

    /// Renames and/or reparents a folder.
    ///
    /// The new parent (when given) must exist and belong to the requester,
    /// must not be the folder itself, and must not be one of its
    /// descendants.
    pub async fn update_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        req: UpdateFolderRequest,
    ) -> Result<Folder, AppError> {
        if req.name.trim().is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let mut folder = self
            .folder_repo
            .find_by_id(folder_id)
            .await?
            .ok_or_else(|| AppError::not_found("Folder not found"))?;

        if folder.owner_id != ctx.user_id {
            return Err(AppError::authorization("User does not own this folder"));
        }

        if let Some(parent_id) = req.parent_id {
            if parent_id == folder_id {
                return Err(AppError::validation("Cannot move a folder into itself"));
            }

            self.require_owned_parent(ctx, parent_id).await?;

            // The ancestor chain of the target must not contain the folder
            // being moved, otherwise the reparent would create a cycle.
            let ancestors = self.folder_repo.find_ancestor_ids(parent_id).await?;
            if ancestors.contains(&folder_id) {
                return Err(AppError::validation(
                    "Cannot move a folder into one of its descendants",
                ));
            }
        }

        folder.name = req.name;
        folder.parent_id = req.parent_id;

        let folder = self.folder_repo.update(&folder).await?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder_id,
            name = %folder.name,
            "Folder updated"
        );

        Ok(folder)
    }

    /// Deletes a folder and everything beneath it.
    ///
    /// All documents in the subtree are removed first, then descendant
    /// folders bottom-up, then the folder itself — atomically. Returns the
    /// number of documents removed.
    pub async fn delete_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
    ) -> Result<u64, AppError> {
        let folder = self
            .folder_repo
            .find_by_id_for_owner(folder_id, ctx.user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Folder not found or does not belong to the user")
            })?;

        let descendants = self.folder_repo.find_descendants(folder_id).await?;

        // Children before parents: reverse the nearest-first ordering and
        // finish with the subtree root.
        let mut ids_bottom_up: Vec<Uuid> = descendants.iter().rev().map(|f| f.id).collect();
        ids_bottom_up.push(folder.id);

        let docs_deleted = self.folder_repo.delete_subtree(&ids_bottom_up).await?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder_id,
            folders_deleted = ids_bottom_up.len(),
            documents_deleted = docs_deleted,
            "Folder subtree deleted"
        );

        Ok(docs_deleted)
    }

    /// Validates that `parent_id` names a folder owned by the requester.
    async fn require_owned_parent(
        &self,
        ctx: &RequestContext,
        parent_id: Uuid,
    ) -> Result<Folder, AppError> {
        self.folder_repo
            .find_by_id_for_owner(parent_id, ctx.user_id)
            .await?
            .ok_or_else(|| {
                AppError::validation("Parent folder not found or does not belong to the user")
            })
    }
}
