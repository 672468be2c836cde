//! Repository (tenant) store.

use dashmap::DashMap;
use uuid::Uuid;

use repohub_core::error::AppError;
use repohub_core::result::AppResult;
use repohub_entity::repository::Repository;

/// Store for repository tenants and their participant rosters.
#[derive(Debug, Default)]
pub struct RepositoryStore {
    repositories: DashMap<Uuid, Repository>,
}

impl RepositoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find a repository by ID.
    pub fn find_by_id(&self, id: Uuid) -> Option<Repository> {
        self.repositories.get(&id).map(|r| r.clone())
    }

    /// Persist a new repository.
    pub fn insert(&self, repository: Repository) -> Repository {
        self.repositories
            .insert(repository.id, repository.clone());
        repository
    }

    /// Replace an existing repository (roster updates go through here).
    pub fn update(&self, repository: &Repository) -> AppResult<Repository> {
        match self.repositories.get_mut(&repository.id) {
            Some(mut entry) => {
                *entry = repository.clone();
                Ok(repository.clone())
            }
            None => Err(AppError::not_found(format!(
                "Repository {} not found",
                repository.id
            ))),
        }
    }

    /// Delete a repository. Returns `true` if it existed.
    pub fn delete(&self, id: Uuid) -> bool {
        self.repositories.remove(&id).is_some()
    }

    /// Repositories the user owns or participates in, newest first.
    pub fn list_for_user(&self, user_id: Uuid) -> Vec<Repository> {
        let mut repos: Vec<Repository> = self
            .repositories
            .iter()
            .filter(|r| r.owner_id == user_id || r.participant(user_id).is_some())
            .map(|r| r.clone())
            .collect();
        repos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        repos
    }

    /// Publicly readable repositories, newest first.
    pub fn list_public(&self) -> Vec<Repository> {
        let mut repos: Vec<Repository> = self
            .repositories
            .iter()
            .filter(|r| r.is_publicly_readable())
            .map(|r| r.clone())
            .collect();
        repos.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        repos
    }
}
