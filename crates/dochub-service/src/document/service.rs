//! Document CRUD operations with ownership enforcement.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use dochub_core::error::AppError;
use dochub_core::types::pagination::{PageRequest, PageResponse};
use dochub_database::repositories::content_type::ContentTypeRepository;
use dochub_database::repositories::document::DocumentRepository;
use dochub_database::repositories::folder::FolderRepository;
use dochub_entity::content_type::ContentType;
use dochub_entity::document::{CreateDocument, Document, UpdateDocument};
use dochub_entity::folder::Folder;

use crate::context::RequestContext;

/// Manages document CRUD operations.
#[derive(Debug, Clone)]
pub struct DocumentService {
    /// Document repository.
    document_repo: Arc<DocumentRepository>,
    /// Folder repository (for placement validation).
    folder_repo: Arc<FolderRepository>,
    /// Content-type registry.
    content_type_repo: Arc<ContentTypeRepository>,
}

/// Request to create a new document.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateDocumentRequest {
    /// Document title.
    pub title: String,
    /// Document body.
    pub content: String,
    /// Content-type tag.
    pub content_type: String,
    /// Folder to place the document in (None for unfiled).
    pub folder_id: Option<Uuid>,
}

/// A document together with its folder summary, when placed in one.
#[derive(Debug, Clone)]
pub struct DocumentDetail {
    /// The document itself.
    pub document: Document,
    /// The containing folder, if any.
    pub folder: Option<Folder>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(
        document_repo: Arc<DocumentRepository>,
        folder_repo: Arc<FolderRepository>,
        content_type_repo: Arc<ContentTypeRepository>,
    ) -> Self {
        Self {
            document_repo,
            folder_repo,
            content_type_repo,
        }
    }

    /// Lists the requester's documents, newest first.
    pub async fn list_documents(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Document>, AppError> {
        self.document_repo.find_by_owner(ctx.user_id, &page).await
    }

    /// Gets a document with its folder summary.
    ///
    /// A document owned by another user is indistinguishable from a
    /// missing one.
    pub async fn get_document(
        &self,
        ctx: &RequestContext,
        document_id: Uuid,
    ) -> Result<DocumentDetail, AppError> {
        let document = self
            .document_repo
            .find_by_id_for_owner(document_id, ctx.user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Document not found or does not belong to the user")
            })?;

        let folder = match document.folder_id {
            Some(folder_id) => self.folder_repo.find_by_id(folder_id).await?,
            None => None,
        };

        Ok(DocumentDetail { document, folder })
    }

    /// Creates a new document.
    ///
    /// The content type must be registered, and the target folder (when
    /// given) must exist and belong to the requester.
    pub async fn create_document(
        &self,
        ctx: &RequestContext,
        req: CreateDocumentRequest,
    ) -> Result<DocumentDetail, AppError> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Document title cannot be empty"));
        }

        self.require_registered_content_type(&req.content_type)
            .await?;

        let folder = match req.folder_id {
            Some(folder_id) => Some(self.require_owned_folder(ctx, folder_id).await?),
            None => None,
        };

        let document = self
            .document_repo
            .create(&CreateDocument {
                title: req.title,
                content: req.content,
                content_type: req.content_type,
                folder_id: req.folder_id,
                owner_id: ctx.user_id,
            })
            .await?;

        info!(
            user_id = %ctx.user_id,
            document_id = %document.id,
            title = %document.title,
            "Document created"
        );

        Ok(DocumentDetail { document, folder })
    }

    /// Updates a document's title, content, content type, and placement.
    ///
    /// `folder_id: None` moves the document out of any folder.
    pub async fn update_document(
        &self,
        ctx: &RequestContext,
        document_id: Uuid,
        req: UpdateDocument,
    ) -> Result<Document, AppError> {
        if req.title.trim().is_empty() {
            return Err(AppError::validation("Document title cannot be empty"));
        }

        let mut document = self
            .document_repo
            .find_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;

        if document.owner_id != ctx.user_id {
            return Err(AppError::authorization(
                "User does not have access to this document",
            ));
        }

        self.require_registered_content_type(&req.content_type)
            .await?;

        if let Some(folder_id) = req.folder_id {
            self.require_owned_folder(ctx, folder_id).await?;
        }

        document.title = req.title;
        document.content = req.content;
        document.content_type = req.content_type;
        document.folder_id = req.folder_id;

        let document = self.document_repo.update(&document).await?;

        info!(
            user_id = %ctx.user_id,
            document_id = %document_id,
            "Document updated"
        );

        Ok(document)
    }

    /// Deletes a document.
    pub async fn delete_document(
        &self,
        ctx: &RequestContext,
        document_id: Uuid,
    ) -> Result<(), AppError> {
        let document = self
            .document_repo
            .find_by_id_for_owner(document_id, ctx.user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Document not found or does not belong to the user")
            })?;

        self.document_repo.delete(document.id).await?;

        info!(
            user_id = %ctx.user_id,
            document_id = %document_id,
            "Document deleted"
        );

        Ok(())
    }

    /// Lists the registered content types.
    pub async fn list_content_types(&self) -> Result<Vec<ContentType>, AppError> {
        self.content_type_repo.find_all().await
    }

    /// Validates that `name` is a registered content-type tag.
    async fn require_registered_content_type(&self, name: &str) -> Result<(), AppError> {
        if !self.content_type_repo.exists(name).await? {
            return Err(AppError::validation(format!(
                "Unknown content type '{name}'"
            )));
        }
        Ok(())
    }

    /// Validates that `folder_id` names a folder owned by the requester.
    async fn require_owned_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
    ) -> Result<Folder, AppError> {
        self.folder_repo
            .find_by_id_for_owner(folder_id, ctx.user_id)
            .await?
            .ok_or_else(|| {
                AppError::validation("Folder not found or does not belong to the user")
            })
    }
}
