//! Folder store with materialized-path tree queries.

use std::collections::HashSet;

use dashmap::DashMap;
use uuid::Uuid;

use repohub_core::error::AppError;
use repohub_core::result::AppResult;
use repohub_entity::folder::Folder;

/// Store for folder nodes and subtree queries.
///
/// Subtree collection relies on the materialized `path`: a folder's
/// descendants are exactly the folders of the same repository whose path
/// contains its id, so no recursive per-level traversal is needed.
#[derive(Debug, Default)]
pub struct FolderStore {
    folders: DashMap<Uuid, Folder>,
}

impl FolderStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a folder by ID.
    pub fn find_by_id(&self, id: Uuid) -> Option<Folder> {
        self.folders.get(&id).map(|f| f.clone())
    }

    /// Direct children of a parent (or of the root, for `None`),
    /// sorted by name.
    pub fn find_children(&self, repository_id: Uuid, parent_id: Option<Uuid>) -> Vec<Folder> {
        let mut children: Vec<Folder> = self
            .folders
            .iter()
            .filter(|f| f.repository_id == repository_id && f.parent_id == parent_id)
            .map(|f| f.clone())
            .collect();
        children.sort_by(|a, b| a.name.cmp(&b.name));
        children
    }

    /// The sibling with the given name, if one exists.
    pub fn find_sibling_by_name(
        &self,
        repository_id: Uuid,
        parent_id: Option<Uuid>,
        name: &str,
    ) -> Option<Folder> {
        self.folders
            .iter()
            .find(|f| {
                f.repository_id == repository_id && f.parent_id == parent_id && f.name == name
            })
            .map(|f| f.clone())
    }

    /// Persist a new folder node.
    pub fn insert(&self, folder: Folder) -> Folder {
        self.folders.insert(folder.id, folder.clone());
        folder
    }

    /// Replace an existing folder.
    pub fn update(&self, folder: &Folder) -> AppResult<Folder> {
        match self.folders.get_mut(&folder.id) {
            Some(mut entry) => {
                *entry = folder.clone();
                Ok(folder.clone())
            }
            None => Err(AppError::not_found(format!(
                "Folder {} not found",
                folder.id
            ))),
        }
    }

    /// Replace a batch of folders (subtree rebase after a move).
    pub fn update_many(&self, folders: Vec<Folder>) {
        for folder in folders {
            self.folders.insert(folder.id, folder);
        }
    }

    /// The folder plus every descendant, via path containment.
    pub fn collect_subtree(&self, repository_id: Uuid, folder_id: Uuid) -> Vec<Folder> {
        self.folders
            .iter()
            .filter(|f| {
                f.repository_id == repository_id
                    && (f.id == folder_id || f.has_ancestor(folder_id))
            })
            .map(|f| f.clone())
            .collect()
    }

    /// Remove every folder in the id-set. Idempotent: ids already gone
    /// are skipped. Returns the number actually removed.
    pub fn delete_many(&self, ids: &HashSet<Uuid>) -> usize {
        ids.iter()
            .filter(|id| self.folders.remove(id).is_some())
            .count()
    }

    /// All folders of a repository (tenant teardown).
    pub fn list_by_repository(&self, repository_id: Uuid) -> Vec<Folder> {
        self.folders
            .iter()
            .filter(|f| f.repository_id == repository_id)
            .map(|f| f.clone())
            .collect()
    }
}
