//! Folder tree structures for hierarchical display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::model::Folder;

/// A node in a folder tree.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderNode {
    /// Folder ID.
    pub id: Uuid,
    /// Folder name.
    pub name: String,
    /// Parent folder ID (null for roots).
    pub parent_id: Option<Uuid>,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// Child folder nodes.
    pub children: Vec<FolderNode>,
}

impl FolderNode {
    /// Create a leaf node from a folder row.
    pub fn leaf(folder: &Folder) -> Self {
        Self {
            id: folder.id,
            name: folder.name.clone(),
            parent_id: folder.parent_id,
            created_at: folder.created_at,
            children: Vec::new(),
        }
    }

    /// Count this node plus all descendants.
    pub fn size(&self) -> u64 {
        1 + self.children.iter().map(FolderNode::size).sum::<u64>()
    }
}

/// A complete folder forest for a single user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FolderTree {
    /// The root node(s) of the tree.
    pub roots: Vec<FolderNode>,
    /// Total number of folders in the tree.
    pub total_folders: u64,
}

impl FolderTree {
    /// Create an empty folder tree.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            total_folders: 0,
        }
    }
}
