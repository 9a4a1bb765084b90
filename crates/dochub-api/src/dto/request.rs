//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    /// Email address.
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    /// Password (policy enforced server-side).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 100, message = "Folder name must be 1-100 characters"))]
    pub name: String,
    /// Parent folder ID (omit for a root folder).
    pub parent_id: Option<Uuid>,
}

/// Update folder request. Omitting `parent_id` moves the folder to the
/// root level.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateFolderRequest {
    /// New folder name.
    #[validate(length(min = 1, max = 100, message = "Folder name must be 1-100 characters"))]
    pub name: String,
    /// New parent folder ID.
    pub parent_id: Option<Uuid>,
}

/// Create document request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateDocumentRequest {
    /// Document title.
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    /// Document body.
    pub content: String,
    /// Content-type tag.
    #[validate(length(min = 1, message = "Content type is required"))]
    pub content_type: String,
    /// Folder to place the document in (omit for unfiled).
    pub folder_id: Option<Uuid>,
}

/// Update document request. Omitting `folder_id` moves the document out
/// of any folder.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateDocumentRequest {
    /// New title.
    #[validate(length(min = 1, max = 100, message = "Title must be 1-100 characters"))]
    pub title: String,
    /// New body.
    pub content: String,
    /// New content-type tag.
    #[validate(length(min = 1, message = "Content type is required"))]
    pub content_type: String,
    /// New folder placement.
    pub folder_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_validation() {
        let ok = RegisterRequest {
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password: "pw".to_string(),
        };
        assert!(ok.validate().is_ok());

        let bad_email = RegisterRequest {
            email: "not-an-email".to_string(),
            ..ok.clone()
        };
        assert!(bad_email.validate().is_err());

        let short_name = RegisterRequest {
            username: "ab".to_string(),
            ..ok
        };
        assert!(short_name.validate().is_err());
    }

    #[test]
    fn test_folder_name_length_is_bounded() {
        let req = CreateFolderRequest {
            name: "x".repeat(101),
            parent_id: None,
        };
        assert!(req.validate().is_err());
    }
}
