//! Folder CRUD and tree handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use dochub_core::error::AppError;
use dochub_entity::folder::FolderNode;
use dochub_service::folder::service::{
    CreateFolderRequest as SvcCreateFolder, UpdateFolderRequest as SvcUpdateFolder,
};

use crate::dto::request::{CreateFolderRequest, UpdateFolderRequest};
use crate::dto::response::{
    ApiResponse, DocumentSummaryResponse, FolderDetailResponse, FolderResponse, MessageResponse,
    UserFoldersResponse, UserResponse,
};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/folders
///
/// The requesting user's complete folder forest, with profile info.
pub async fn list_folders(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserFoldersResponse>>, AppError> {
    let user = state.user_service.get_profile(&auth).await?;
    let tree = state.tree_service.get_user_tree(&auth).await?;

    Ok(Json(ApiResponse::ok(UserFoldersResponse {
        user: UserResponse::from(&user),
        folders: tree.roots,
        total_folders: tree.total_folders,
    })))
}

/// POST /api/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<ApiResponse<FolderResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create_folder(
            &auth,
            SvcCreateFolder {
                name: req.name,
                parent_id: req.parent_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(FolderResponse::from(&folder))))
}

/// GET /api/folders/{id}
pub async fn get_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FolderDetailResponse>>, AppError> {
    let detail = state.folder_service.get_folder(&auth, id).await?;

    Ok(Json(ApiResponse::ok(FolderDetailResponse {
        id: detail.folder.id,
        name: detail.folder.name.clone(),
        parent_id: detail.folder.parent_id,
        created_at: detail.folder.created_at,
        updated_at: detail.folder.updated_at,
        documents: detail
            .documents
            .iter()
            .map(DocumentSummaryResponse::from)
            .collect(),
        children: detail.children.iter().map(FolderResponse::from).collect(),
    })))
}

/// GET /api/folders/{id}/tree
pub async fn get_subtree(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FolderNode>>, AppError> {
    let node = state.tree_service.get_subtree(&auth, id).await?;
    Ok(Json(ApiResponse::ok(node)))
}

/// PUT /api/folders/{id}
pub async fn update_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFolderRequest>,
) -> Result<Json<ApiResponse<FolderResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .update_folder(
            &auth,
            id,
            SvcUpdateFolder {
                name: req.name,
                parent_id: req.parent_id,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(FolderResponse::from(&folder))))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, AppError> {
    let docs_deleted = state.folder_service.delete_folder(&auth, id).await?;

    Ok(Json(ApiResponse::ok(MessageResponse {
        message: format!("Folder deleted along with {docs_deleted} document(s)"),
    })))
}
