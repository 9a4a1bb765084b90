//! Folder tree building from flat folder lists.

use std::sync::Arc;

use uuid::Uuid;

use dochub_core::error::AppError;
use dochub_database::repositories::folder::FolderRepository;
use dochub_entity::folder::{Folder, FolderNode, FolderTree};

use crate::context::RequestContext;

/// Builds folder trees for display.
#[derive(Debug, Clone)]
pub struct TreeService {
    /// Folder repository.
    folder_repo: Arc<FolderRepository>,
}

impl TreeService {
    /// Creates a new tree service.
    pub fn new(folder_repo: Arc<FolderRepository>) -> Self {
        Self { folder_repo }
    }

    /// Builds the complete folder forest for the requesting user.
    ///
    /// Fetches the user's folders in one query and assembles the nesting in
    /// memory, so recursion depth is bounded by the fetched row count.
    pub async fn get_user_tree(&self, ctx: &RequestContext) -> Result<FolderTree, AppError> {
        let folders = self.folder_repo.find_by_owner(ctx.user_id).await?;
        Ok(build_forest(&folders))
    }

    /// Builds the subtree rooted at a specific owned folder.
    pub async fn get_subtree(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
    ) -> Result<FolderNode, AppError> {
        let root = self
            .folder_repo
            .find_by_id_for_owner(folder_id, ctx.user_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Folder not found or does not belong to the user")
            })?;

        let descendants = self.folder_repo.find_descendants(folder_id).await?;
        Ok(build_node(&root, &descendants))
    }
}

/// Assembles a forest from a flat list of folders.
///
/// Roots are folders whose parent is absent from the list (normally
/// `parent_id == None`; a dangling parent reference also surfaces its
/// subtree as a root rather than dropping it).
pub fn build_forest(folders: &[Folder]) -> FolderTree {
    let ids: std::collections::HashSet<Uuid> = folders.iter().map(|f| f.id).collect();

    let roots: Vec<FolderNode> = folders
        .iter()
        .filter(|f| match f.parent_id {
            None => true,
            Some(parent_id) => !ids.contains(&parent_id),
        })
        .map(|root| build_node(root, folders))
        .collect();

    let total_folders = roots.iter().map(FolderNode::size).sum();

    FolderTree {
        roots,
        total_folders,
    }
}

/// Recursively attaches children from `all_folders` to `root`.
pub fn build_node(root: &Folder, all_folders: &[Folder]) -> FolderNode {
    let children: Vec<FolderNode> = all_folders
        .iter()
        .filter(|f| f.parent_id == Some(root.id))
        .map(|child| build_node(child, all_folders))
        .collect();

    let mut node = FolderNode::leaf(root);
    node.children = children;
    node
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn folder(id: Uuid, name: &str, parent_id: Option<Uuid>, owner_id: Uuid) -> Folder {
        Folder {
            id,
            name: name.to_string(),
            parent_id,
            owner_id,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_forest_nests_children_under_roots() {
        let owner = Uuid::new_v4();
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let a1 = Uuid::new_v4();
        let a1x = Uuid::new_v4();

        let folders = vec![
            folder(a, "a", None, owner),
            folder(b, "b", None, owner),
            folder(a1, "a1", Some(a), owner),
            folder(a1x, "a1x", Some(a1), owner),
        ];

        let tree = build_forest(&folders);

        assert_eq!(tree.roots.len(), 2);
        assert_eq!(tree.total_folders, 4);

        let root_a = tree.roots.iter().find(|n| n.id == a).unwrap();
        assert_eq!(root_a.children.len(), 1);
        assert_eq!(root_a.children[0].id, a1);
        assert_eq!(root_a.children[0].children[0].id, a1x);

        let root_b = tree.roots.iter().find(|n| n.id == b).unwrap();
        assert!(root_b.children.is_empty());
    }

    #[test]
    fn test_empty_input_builds_empty_forest() {
        let tree = build_forest(&[]);
        assert!(tree.roots.is_empty());
        assert_eq!(tree.total_folders, 0);
    }

    #[test]
    fn test_dangling_parent_becomes_root() {
        let owner = Uuid::new_v4();
        let orphan = Uuid::new_v4();
        let folders = vec![folder(orphan, "orphan", Some(Uuid::new_v4()), owner)];

        let tree = build_forest(&folders);
        assert_eq!(tree.roots.len(), 1);
        assert_eq!(tree.roots[0].id, orphan);
    }

    #[test]
    fn test_subtree_build_ignores_unrelated_folders() {
        let owner = Uuid::new_v4();
        let root_id = Uuid::new_v4();
        let child_id = Uuid::new_v4();
        let unrelated = Uuid::new_v4();

        let root = folder(root_id, "root", None, owner);
        let all = vec![
            folder(child_id, "child", Some(root_id), owner),
            folder(unrelated, "unrelated", None, owner),
        ];

        let node = build_node(&root, &all);
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].id, child_id);
        assert_eq!(node.size(), 2);
    }
}
