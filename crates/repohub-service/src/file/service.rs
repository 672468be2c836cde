//! File record operations.
//!
//! File records are descriptive leaves attached to a folder (or the
//! repository root); the content bytes live with an external storage
//! collaborator. Records are removed transitively when an ancestor folder
//! is deleted (see the folder service).

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;
use uuid::Uuid;

use repohub_core::error::AppError;
use repohub_core::events::StatsEvent;
use repohub_core::result::AppResult;
use repohub_entity::file::{FileRecord, NewFileRecord, UpdateFileRecord};
use repohub_entity::repository::{RepoRole, Repository};
use repohub_store::{FileStore, FolderStore, RepositoryLocks, RepositoryStore};

use crate::access;
use crate::context::RequestContext;

/// Manages leaf file records within repositories.
#[derive(Debug, Clone)]
pub struct FileService {
    repository_store: Arc<RepositoryStore>,
    folder_store: Arc<FolderStore>,
    file_store: Arc<FileStore>,
    locks: Arc<RepositoryLocks>,
    stats: broadcast::Sender<StatsEvent>,
}

impl FileService {
    /// Creates a new file service.
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

    /// Creates a file record attached to a folder or the repository root.
    pub async fn create_record(
        &self,
        ctx: &RequestContext,
        data: NewFileRecord,
    ) -> AppResult<FileRecord> {
        if data.title.trim().is_empty() {
            return Err(AppError::validation("File title cannot be empty"));
        }
        if data.original_name.trim().is_empty() {
            return Err(AppError::validation("Original file name cannot be empty"));
        }

        let repository = self.repository(data.repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Writer)?;

        // Shares the tree lock so the target folder cannot be cascaded
        // away between the check and the insert. The repository itself can
        // also be torn down while this call waits on the lock, so its
        // existence is re-checked under the guard.
        let _guard = self.locks.acquire(repository.id).await;
        self.repository(repository.id)?;

        if let Some(folder_id) = data.folder_id {
            self.folder_store
                .find_by_id(folder_id)
                .filter(|f| f.repository_id == repository.id)
                .ok_or_else(|| AppError::not_found("Folder not found in this repository"))?;
        }

        let record = self
            .file_store
            .insert(FileRecord::from_new(data, ctx.user_id));

        info!(
            user_id = %ctx.user_id,
            repository_id = %repository.id,
            file_id = %record.id,
            "File record created"
        );
        let _ = self.stats.send(StatsEvent::FilesChanged {
            repository_id: repository.id,
        });

        Ok(record)
    }

    /// Fetches a single file record.
    pub async fn get_record(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<FileRecord> {
        let record = self.file(file_id)?;
        let repository = self.repository(record.repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Viewer)?;
        Ok(record)
    }

    /// Applies a partial metadata update.
    pub async fn update_record(
        &self,
        ctx: &RequestContext,
        file_id: Uuid,
        update: UpdateFileRecord,
    ) -> AppResult<FileRecord> {
        let mut record = self.file(file_id)?;
        let repository = self.repository(record.repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Writer)?;

        if let Some(title) = &update.title {
            if title.trim().is_empty() {
                return Err(AppError::validation("File title cannot be empty"));
            }
        }

        record.apply_update(update);
        let record = self.file_store.update(&record)?;

        info!(user_id = %ctx.user_id, file_id = %file_id, "File record updated");
        let _ = self.stats.send(StatsEvent::FilesChanged {
            repository_id: repository.id,
        });

        Ok(record)
    }

    /// Deletes a single file record.
    pub async fn delete_record(&self, ctx: &RequestContext, file_id: Uuid) -> AppResult<()> {
        let record = self.file(file_id)?;
        let repository = self.repository(record.repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Writer)?;

        self.file_store.delete(file_id);

        info!(user_id = %ctx.user_id, file_id = %file_id, "File record deleted");
        let _ = self.stats.send(StatsEvent::FilesChanged {
            repository_id: repository.id,
        });

        Ok(())
    }

    fn repository(&self, repository_id: Uuid) -> AppResult<Repository> {
        self.repository_store
            .find_by_id(repository_id)
            .ok_or_else(|| AppError::not_found("Repository not found"))
    }

    fn file(&self, file_id: Uuid) -> AppResult<FileRecord> {
        self.file_store
            .find_by_id(file_id)
            .ok_or_else(|| AppError::not_found("File not found"))
    }
}
