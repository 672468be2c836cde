//! Repository tenant lifecycle.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing::info;
use uuid::Uuid;

use repohub_core::error::AppError;
use repohub_core::events::StatsEvent;
use repohub_core::result::AppResult;
use repohub_entity::repository::{
    NewRepository, Participant, RepoCategory, RepoPrivacy, RepoRole, RepoType, Repository,
};
use repohub_store::{
    ApplicationStore, FileStore, FolderStore, InvitationStore, RepositoryLocks, RepositoryStore,
};

use crate::access;
use crate::context::RequestContext;

/// Manages repository tenants, their rosters, and membership intake.
#[derive(Debug, Clone)]
pub struct RepositoryService {
    pub(crate) repository_store: Arc<RepositoryStore>,
    pub(crate) folder_store: Arc<FolderStore>,
    pub(crate) file_store: Arc<FileStore>,
    pub(crate) invitation_store: Arc<InvitationStore>,
    pub(crate) application_store: Arc<ApplicationStore>,
    pub(crate) locks: Arc<RepositoryLocks>,
    pub(crate) stats: broadcast::Sender<StatsEvent>,
}

impl RepositoryService {
    /// Creates a new repository service.
    pub fn new(
        repository_store: Arc<RepositoryStore>,
        folder_store: Arc<FolderStore>,
        file_store: Arc<FileStore>,
        invitation_store: Arc<InvitationStore>,
        application_store: Arc<ApplicationStore>,
        locks: Arc<RepositoryLocks>,
        stats: broadcast::Sender<StatsEvent>,
    ) -> Self {
        Self {
            repository_store,
            folder_store,
            file_store,
            invitation_store,
            application_store,
            locks,
            stats,
        }
    }

    /// Creates a repository owned by the caller. Listed member ids are
    /// seeded as active writers; the owner is never duplicated into the
    /// roster.
    pub async fn create_repository(
        &self,
        ctx: &RequestContext,
        data: NewRepository,
    ) -> AppResult<Repository> {
        if data.name.trim().is_empty() {
            return Err(AppError::validation("Repository name cannot be empty"));
        }

        let mut participants: Vec<Participant> = Vec::new();
        for member_id in &data.member_ids {
            if *member_id == ctx.user_id {
                continue;
            }
            if participants.iter().any(|p| p.user_id == *member_id) {
                continue;
            }
            participants.push(Participant::active(*member_id, RepoRole::Writer));
        }

        let repository = self
            .repository_store
            .insert(Repository::from_new(data, ctx.user_id, participants));

        info!(
            user_id = %ctx.user_id,
            repository_id = %repository.id,
            repo_type = ?repository.repo_type,
            "Repository created"
        );
        let _ = self.stats.send(StatsEvent::RepositoryCreated {
            repository_id: repository.id,
        });

        Ok(repository)
    }

    /// Registration-time hook: creates the user's personal tenant, so
    /// every user owns at least one repository.
    pub async fn create_personal_repository(
        &self,
        user_id: Uuid,
        username: &str,
    ) -> AppResult<Repository> {
        let repository = self.repository_store.insert(Repository::from_new(
            NewRepository {
                name: format!("{username}'s repository"),
                description: None,
                repo_type: RepoType::Simple,
                category: Some(RepoCategory::Personal),
                privacy: Some(RepoPrivacy::Private),
                interest_areas: vec![],
                geo_areas: vec![],
                sectors: vec![],
                member_ids: vec![],
            },
            user_id,
            vec![],
        ));

        info!(user_id = %user_id, repository_id = %repository.id, "Personal repository created");
        let _ = self.stats.send(StatsEvent::RepositoryCreated {
            repository_id: repository.id,
        });

        Ok(repository)
    }

    /// Repositories the caller owns or participates in, newest first.
    pub async fn list_my_repositories(&self, ctx: &RequestContext) -> Vec<Repository> {
        self.repository_store.list_for_user(ctx.user_id)
    }

    /// Publicly readable repositories, newest first. No auth gate: this
    /// is the discovery surface.
    pub async fn list_public_repositories(&self) -> Vec<Repository> {
        self.repository_store.list_public()
    }

    /// Fetches a repository the caller can at least read.
    pub async fn get_repository(
        &self,
        ctx: &RequestContext,
        repository_id: Uuid,
    ) -> AppResult<Repository> {
        let repository = self.repository(repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Viewer)?;
        Ok(repository)
    }

    /// Deletes a repository and transitively every folder, file record,
    /// invitation, and application it contains. Owner only.
    pub async fn delete_repository(
        &self,
        ctx: &RequestContext,
        repository_id: Uuid,
    ) -> AppResult<()> {
        let repository = self.repository(repository_id)?;
        if !access::resolve_role(ctx.user_id, &repository).is_some_and(|role| role.is_owner()) {
            return Err(AppError::forbidden(
                "Only the owner can delete a repository",
            ));
        }

        {
            let _guard = self.locks.acquire(repository_id).await;

            let files_removed = self.file_store.delete_by_repository(repository_id);
            let folder_ids = self
                .folder_store
                .list_by_repository(repository_id)
                .into_iter()
                .map(|f| f.id)
                .collect();
            let folders_removed = self.folder_store.delete_many(&folder_ids);
            self.invitation_store.delete_by_repository(repository_id);
            self.application_store.delete_by_repository(repository_id);
            self.repository_store.delete(repository_id);

            info!(
                user_id = %ctx.user_id,
                repository_id = %repository_id,
                folders_removed,
                files_removed,
                "Repository deleted"
            );
        }
        self.locks.release(repository_id);

        let _ = self
            .stats
            .send(StatsEvent::RepositoryDeleted { repository_id });

        Ok(())
    }

    pub(crate) fn repository(&self, repository_id: Uuid) -> AppResult<Repository> {
        self.repository_store
            .find_by_id(repository_id)
            .ok_or_else(|| AppError::not_found("Repository not found"))
    }
}
