//! Folder tree operations: create, contents, rename, move, cascading
//! delete, and breadcrumb resolution.
//!
//! Every structural mutation takes the owning repository's lock for the
//! whole read-modify-write; reads never lock. All validation and
//! authorization runs before the first write, so a failed operation leaves
//! the tree untouched.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::Utc;
use tokio::sync::broadcast;
use tracing::info;
use uuid::Uuid;

use repohub_core::error::AppError;
use repohub_core::events::StatsEvent;
use repohub_core::result::AppResult;
use repohub_entity::file::FileRecord;
use repohub_entity::folder::{Folder, NewFolder};
use repohub_entity::repository::{RepoRole, Repository};
use repohub_store::{FileStore, FolderStore, RepositoryLocks, RepositoryStore};

use crate::access;
use crate::context::RequestContext;

/// The addressed folder together with its direct contents.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct FolderContents {
    /// The addressed folder, or None for the repository root.
    pub current_folder: Option<Folder>,
    /// Direct subfolders, sorted by name.
    pub subfolders: Vec<Folder>,
    /// Direct file records, sorted by title.
    pub files: Vec<FileRecord>,
}

/// Manages the folder hierarchy of each repository.
#[derive(Debug, Clone)]
pub struct FolderService {
    repository_store: Arc<RepositoryStore>,
    folder_store: Arc<FolderStore>,
    file_store: Arc<FileStore>,
    locks: Arc<RepositoryLocks>,
    stats: broadcast::Sender<StatsEvent>,
}

impl FolderService {
    /// Creates a new folder service.
    pub fn new(
        repository_store: Arc<RepositoryStore>,
        folder_store: Arc<FolderStore>,
        file_store: Arc<FileStore>,
        locks: Arc<RepositoryLocks>,
        stats: broadcast::Sender<StatsEvent>,
    ) -> Self {
        Self {
            repository_store,
            folder_store,
            file_store,
            locks,
            stats,
        }
    }

    /// Creates a new folder under the given parent (or the root).
    pub async fn create_folder(
        &self,
        ctx: &RequestContext,
        repository_id: Uuid,
        name: &str,
        parent_id: Option<Uuid>,
    ) -> AppResult<Folder> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let repository = self.repository(repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Writer)?;

        let _guard = self.locks.acquire(repository_id).await;

        // The tenant can be torn down while this call waits on the lock;
        // re-check under the guard so a late create cannot insert an
        // orphan node into a deleted repository.
        self.repository(repository_id)?;

        // Resolve the parent chain; the materialized path is the parent's
        // path plus the parent itself.
        let path = match parent_id {
            Some(parent_id) => {
                let parent = self.folder_in_repository(parent_id, repository_id)?;
                let mut path = parent.path;
                path.push(parent.id);
                path
            }
            None => Vec::new(),
        };

        if self
            .folder_store
            .find_sibling_by_name(repository_id, parent_id, name)
            .is_some()
        {
            return Err(AppError::conflict(format!(
                "A folder named '{name}' already exists here"
            )));
        }

        let folder = self.folder_store.insert(Folder::from_new(
            NewFolder {
                repository_id,
                parent_id,
                name: name.to_string(),
                created_by: ctx.user_id,
            },
            path,
        ));

        info!(
            user_id = %ctx.user_id,
            repository_id = %repository_id,
            folder_id = %folder.id,
            level = folder.level,
            "Folder created"
        );
        let _ = self.stats.send(StatsEvent::TreeChanged { repository_id });

        Ok(folder)
    }

    /// Returns the addressed folder (or the root), its direct subfolders,
    /// and its direct file records.
    pub async fn get_contents(
        &self,
        ctx: &RequestContext,
        repository_id: Uuid,
        folder_id: Option<Uuid>,
    ) -> AppResult<FolderContents> {
        let repository = self.repository(repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Viewer)?;

        let current_folder = match folder_id {
            Some(id) => Some(self.folder_in_repository(id, repository_id)?),
            None => None,
        };

        Ok(FolderContents {
            subfolders: self.folder_store.find_children(repository_id, folder_id),
            files: self.file_store.find_in_folder(repository_id, folder_id),
            current_folder,
        })
    }

    /// Renames a folder. Descendant paths and levels are untouched: the
    /// materialized path stores identities, not names, and breadcrumb
    /// labels are joined at read time.
    pub async fn rename_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        new_name: &str,
    ) -> AppResult<Folder> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(AppError::validation("Folder name cannot be empty"));
        }

        let repository = self.repository_of(folder_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Writer)?;

        let _guard = self.locks.acquire(repository.id).await;
        let mut folder = self.folder(folder_id)?;

        if let Some(sibling) =
            self.folder_store
                .find_sibling_by_name(repository.id, folder.parent_id, new_name)
        {
            if sibling.id != folder.id {
                return Err(AppError::conflict(format!(
                    "A folder named '{new_name}' already exists here"
                )));
            }
        }

        folder.name = new_name.to_string();
        folder.updated_at = Utc::now();
        let folder = self.folder_store.update(&folder)?;

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder_id,
            new_name = %new_name,
            "Folder renamed"
        );
        let _ = self.stats.send(StatsEvent::TreeChanged {
            repository_id: repository.id,
        });

        Ok(folder)
    }

    /// Moves a folder under a new parent (or to the root), recomputing
    /// `path` and `level` for the folder and every descendant.
    ///
    /// Rejected with `Conflict` when the target parent is the folder
    /// itself or lies inside its own subtree; the containment test is
    /// O(depth) against the candidate parent's materialized path, not a
    /// graph traversal. All checks run before any write.
    pub async fn move_folder(
        &self,
        ctx: &RequestContext,
        folder_id: Uuid,
        new_parent_id: Option<Uuid>,
    ) -> AppResult<Folder> {
        let repository = self.repository_of(folder_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Writer)?;

        let _guard = self.locks.acquire(repository.id).await;
        let mut folder = self.folder(folder_id)?;

        let new_path = match new_parent_id {
            Some(target_id) => {
                if target_id == folder.id {
                    return Err(AppError::conflict("Cannot move a folder into itself"));
                }
                let target = self.folder_in_repository(target_id, repository.id)?;
                if target.has_ancestor(folder.id) {
                    return Err(AppError::conflict(
                        "Cannot move a folder into one of its own descendants",
                    ));
                }
                let mut path = target.path;
                path.push(target.id);
                path
            }
            None => Vec::new(),
        };

        if let Some(sibling) =
            self.folder_store
                .find_sibling_by_name(repository.id, new_parent_id, &folder.name)
        {
            if sibling.id != folder.id {
                return Err(AppError::conflict(format!(
                    "A folder named '{}' already exists at the destination",
                    folder.name
                )));
            }
        }

        // Rebase the whole subtree: every descendant's path starts with
        // this folder's old path, which gets swapped for the new one.
        let now = Utc::now();
        let old_prefix_len = folder.path.len();
        let mut updated: Vec<Folder> = self
            .folder_store
            .collect_subtree(repository.id, folder.id)
            .into_iter()
            .filter(|f| f.id != folder.id)
            .map(|mut descendant| {
                let suffix = descendant.path.split_off(old_prefix_len);
                descendant.path = new_path.iter().copied().chain(suffix).collect();
                descendant.level = descendant.path.len() as i32;
                descendant.updated_at = now;
                descendant
            })
            .collect();

        folder.parent_id = new_parent_id;
        folder.level = new_path.len() as i32;
        folder.path = new_path;
        folder.updated_at = now;
        updated.push(folder.clone());

        let descendants_moved = updated.len() - 1;
        self.folder_store.update_many(updated);

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder_id,
            new_parent = ?new_parent_id,
            descendants_moved,
            "Folder moved"
        );
        let _ = self.stats.send(StatsEvent::TreeChanged {
            repository_id: repository.id,
        });

        Ok(folder)
    }

    /// Irreversibly deletes a folder, its entire descendant subtree, and
    /// every file record inside that subtree.
    ///
    /// The subtree id-set is collected in one pass via path containment,
    /// then files and folders are removed under the repository lock; both
    /// removals are idempotent over already-deleted members, so re-issuing
    /// the delete finishes any remainder.
    pub async fn delete_folder(&self, ctx: &RequestContext, folder_id: Uuid) -> AppResult<()> {
        let repository = self.repository_of(folder_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Writer)?;

        let _guard = self.locks.acquire(repository.id).await;
        let folder = self.folder(folder_id)?;

        let doomed: HashSet<Uuid> = self
            .folder_store
            .collect_subtree(repository.id, folder.id)
            .into_iter()
            .map(|f| f.id)
            .collect();

        let files_removed = self.file_store.delete_by_folders(repository.id, &doomed);
        let folders_removed = self.folder_store.delete_many(&doomed);

        info!(
            user_id = %ctx.user_id,
            folder_id = %folder_id,
            folders_removed,
            files_removed,
            "Folder subtree deleted"
        );
        let _ = self.stats.send(StatsEvent::TreeChanged {
            repository_id: repository.id,
        });
        let _ = self.stats.send(StatsEvent::FilesChanged {
            repository_id: repository.id,
        });

        Ok(())
    }

    /// Returns the ordered ancestor chain (root → immediate parent) for
    /// breadcrumb rendering; empty for a root-level folder.
    pub async fn get_path(&self, ctx: &RequestContext, folder_id: Uuid) -> AppResult<Vec<Folder>> {
        let repository = self.repository_of(folder_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Viewer)?;

        let folder = self.folder(folder_id)?;
        folder
            .path
            .iter()
            .map(|id| {
                self.folder_store.find_by_id(*id).ok_or_else(|| {
                    AppError::internal(format!(
                        "Folder {folder_id} references missing ancestor {id}"
                    ))
                })
            })
            .collect()
    }

    fn repository(&self, repository_id: Uuid) -> AppResult<Repository> {
        self.repository_store
            .find_by_id(repository_id)
            .ok_or_else(|| AppError::not_found("Repository not found"))
    }

    fn folder(&self, folder_id: Uuid) -> AppResult<Folder> {
        self.folder_store
            .find_by_id(folder_id)
            .ok_or_else(|| AppError::not_found("Folder not found"))
    }

    /// The owning repository of a folder.
    fn repository_of(&self, folder_id: Uuid) -> AppResult<Repository> {
        let folder = self.folder(folder_id)?;
        self.repository(folder.repository_id)
    }

    /// A folder that must belong to the declared repository; a
    /// cross-tenant reference reads as absent.
    fn folder_in_repository(&self, folder_id: Uuid, repository_id: Uuid) -> AppResult<Folder> {
        self.folder_store
            .find_by_id(folder_id)
            .filter(|f| f.repository_id == repository_id)
            .ok_or_else(|| AppError::not_found("Folder not found in this repository"))
    }
}
