//! File record store.

use std::collections::HashSet;

use dashmap::DashMap;
use uuid::Uuid;

use repohub_core::error::AppError;
use repohub_core::result::AppResult;
use repohub_entity::file::FileRecord;

/// Store for leaf file records.
#[derive(Debug, Default)]
pub struct FileStore {
    files: DashMap<Uuid, FileRecord>,
}

impl FileStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a file record by ID.
    pub fn find_by_id(&self, id: Uuid) -> Option<FileRecord> {
        self.files.get(&id).map(|f| f.clone())
    }

    /// Persist a new file record.
    pub fn insert(&self, file: FileRecord) -> FileRecord {
        self.files.insert(file.id, file.clone());
        file
    }

    /// Replace an existing file record.
    pub fn update(&self, file: &FileRecord) -> AppResult<FileRecord> {
        match self.files.get_mut(&file.id) {
            Some(mut entry) => {
                *entry = file.clone();
                Ok(file.clone())
            }
            None => Err(AppError::not_found(format!("File {} not found", file.id))),
        }
    }

    /// Delete a file record. Returns `true` if it existed.
    pub fn delete(&self, id: Uuid) -> bool {
        self.files.remove(&id).is_some()
    }

    /// Records directly inside a folder (or at the root, for `None`),
    /// sorted by title.
    pub fn find_in_folder(&self, repository_id: Uuid, folder_id: Option<Uuid>) -> Vec<FileRecord> {
        let mut files: Vec<FileRecord> = self
            .files
            .iter()
            .filter(|f| f.repository_id == repository_id && f.folder_id == folder_id)
            .map(|f| f.clone())
            .collect();
        files.sort_by(|a, b| a.title.cmp(&b.title));
        files
    }

    /// Remove every record whose folder is in the id-set (cascading
    /// delete). Idempotent over already-removed members. Returns the
    /// number removed.
    pub fn delete_by_folders(&self, repository_id: Uuid, folder_ids: &HashSet<Uuid>) -> usize {
        let doomed: Vec<Uuid> = self
            .files
            .iter()
            .filter(|f| {
                f.repository_id == repository_id
                    && f.folder_id.is_some_and(|id| folder_ids.contains(&id))
            })
            .map(|f| f.id)
            .collect();
        doomed
            .iter()
            .filter(|id| self.files.remove(id).is_some())
            .count()
    }

    /// Remove every record of a repository (tenant teardown). Returns the
    /// number removed.
    pub fn delete_by_repository(&self, repository_id: Uuid) -> usize {
        let doomed: Vec<Uuid> = self
            .files
            .iter()
            .filter(|f| f.repository_id == repository_id)
            .map(|f| f.id)
            .collect();
        doomed
            .iter()
            .filter(|id| self.files.remove(id).is_some())
            .count()
    }
}
