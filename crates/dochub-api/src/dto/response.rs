//! Response DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use dochub_entity::document::Document;
use dochub_entity::folder::{Folder, FolderNode};
use dochub_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// User summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}

/// Login/registration response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// User info.
    pub user: UserResponse,
}

/// Folder summary for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderResponse {
    /// Folder ID.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID.
    pub parent_id: Option<Uuid>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<&Folder> for FolderResponse {
    fn from(folder: &Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name.clone(),
            parent_id: folder.parent_id,
            created_at: folder.created_at,
            updated_at: folder.updated_at,
        }
    }
}

/// A user's complete folder forest, paired with their profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFoldersResponse {
    /// The requesting user.
    pub user: UserResponse,
    /// Root folders with recursively nested children.
    pub folders: Vec<FolderNode>,
    /// Total folder count across the forest.
    pub total_folders: u64,
}

/// Folder detail: the folder plus its direct contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderDetailResponse {
    /// Folder ID.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID.
    pub parent_id: Option<Uuid>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
    /// Documents placed directly in this folder.
    pub documents: Vec<DocumentSummaryResponse>,
    /// Direct child folders.
    pub children: Vec<FolderResponse>,
}

/// Document summary (no body) for folder listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSummaryResponse {
    /// Document ID.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Content-type tag.
    pub content_type: String,
    /// Created at.
    pub created_at: DateTime<Utc>,
}

impl From<&Document> for DocumentSummaryResponse {
    fn from(document: &Document) -> Self {
        Self {
            id: document.id,
            title: document.title.clone(),
            content_type: document.content_type.clone(),
            created_at: document.created_at,
        }
    }
}

/// Full document representation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    /// Document ID.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Body.
    pub content: String,
    /// Content-type tag.
    pub content_type: String,
    /// Containing folder, if any.
    pub folder_id: Option<Uuid>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<&Document> for DocumentResponse {
    fn from(document: &Document) -> Self {
        Self {
            id: document.id,
            title: document.title.clone(),
            content: document.content.clone(),
            content_type: document.content_type.clone(),
            folder_id: document.folder_id,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

/// Document detail: the document plus its folder summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentDetailResponse {
    /// The document.
    pub document: DocumentResponse,
    /// The containing folder, if any.
    pub folder: Option<FolderResponse>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// Detailed health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetailedHealthResponse {
    /// Service status.
    pub status: String,
    /// Database connectivity.
    pub database: String,
}
