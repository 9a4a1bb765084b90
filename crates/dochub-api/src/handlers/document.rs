//! Document CRUD handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use dochub_core::error::AppError;
use dochub_core::types::pagination::PageResponse;
use dochub_entity::document::UpdateDocument;
use dochub_service::document::service::CreateDocumentRequest as SvcCreateDocument;

use crate::dto::request::{CreateDocumentRequest, UpdateDocumentRequest};
use crate::dto::response::{
    ApiResponse, DocumentDetailResponse, DocumentResponse, FolderResponse, MessageResponse,
};
use crate::extractors::{AuthUser, PaginationParams};
use crate::state::AppState;

/// GET /api/documents?page=&per_page=
pub async fn list_documents(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<PaginationParams>,
) -> Result<Json<ApiResponse<PageResponse<DocumentResponse>>>, AppError> {
    let page = params.into_page_request();
    let result = state.document_service.list_documents(&auth, page).await?;

    Ok(Json(ApiResponse::ok(
        result.map(|d| DocumentResponse::from(&d)),
    )))
}

/// POST /api/documents
pub async fn create_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentDetailResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let detail = state
        .document_service
        .create_document(
            &auth,
            SvcCreateDocument {
                title: req.title,
                content: req.content,
                content_type: req.content_type,
                folder_id: req.folder_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(DocumentDetailResponse {
        document: DocumentResponse::from(&detail.document),
        folder: detail.folder.as_ref().map(FolderResponse::from),
    })))
}

/// GET /api/documents/{id}
pub async fn get_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DocumentDetailResponse>>, AppError> {
    let detail = state.document_service.get_document(&auth, id).await?;

    Ok(Json(ApiResponse::ok(DocumentDetailResponse {
        document: DocumentResponse::from(&detail.document),
        folder: detail.folder.as_ref().map(FolderResponse::from),
    })))
}

/// PUT /api/documents/{id}
pub async fn update_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateDocumentRequest>,
) -> Result<Json<ApiResponse<DocumentResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let document = state
        .document_service
        .update_document(
            &auth,
            id,
            UpdateDocument {
                title: req.title,
                content: req.content,
                content_type: req.content_type,
                folder_id: req.folder_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(DocumentResponse::from(&document))))
}

/// DELETE /api/documents/{id}
pub async fn delete_document(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    state.document_service.delete_document(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: "Document deleted".to_string(),
    })))
}
