//! Document entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A text document stored in DocHub.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// Document title.
    pub title: String,
    /// Document body (opaque text).
    pub content: String,
    /// Content-type tag (validated against the registry).
    pub content_type: String,
    /// The folder containing this document (null for unfiled).
    pub folder_id: Option<Uuid>,
    /// The document owner.
    pub owner_id: Uuid,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Document title.
    pub title: String,
    /// Document body.
    pub content: String,
    /// Content-type tag.
    pub content_type: String,
    /// The folder to place the document in (None for unfiled).
    pub folder_id: Option<Uuid>,
    /// The document owner.
    pub owner_id: Uuid,
}

/// Data for updating an existing document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateDocument {
    /// New title.
    pub title: String,
    /// New body.
    pub content: String,
    /// New content-type tag.
    pub content_type: String,
    /// New folder placement (None moves the document out of any folder).
    pub folder_id: Option<Uuid>,
}
