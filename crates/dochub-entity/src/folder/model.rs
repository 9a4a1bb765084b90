//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A folder in a user's document hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for root folders).
    pub parent_id: Option<Uuid>,
    /// The folder owner.
    pub owner_id: Uuid,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Check if this is a root folder (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateFolder {
    /// Folder name.
    pub name: String,
    /// Parent folder (None for root).
    pub parent_id: Option<Uuid>,
    /// The folder owner.
    pub owner_id: Uuid,
}
