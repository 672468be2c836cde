//! Application store.

use dashmap::DashMap;
use uuid::Uuid;

use repohub_core::error::AppError;
use repohub_core::result::AppResult;
use repohub_entity::application::{Application, ApplicationKind};
use repohub_entity::invitation::IntakeStatus;

/// Store for membership applications.
#[derive(Debug, Default)]
pub struct ApplicationStore {
    applications: DashMap<Uuid, Application>,
}

impl ApplicationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an application by ID.
    pub fn find_by_id(&self, id: Uuid) -> Option<Application> {
        self.applications.get(&id).map(|a| a.clone())
    }

    /// Whether the user already has a pending application of this kind.
    pub fn has_pending(
        &self,
        repository_id: Uuid,
        applicant_id: Uuid,
        kind: ApplicationKind,
    ) -> bool {
        self.applications.iter().any(|a| {
            a.repository_id == repository_id
                && a.applicant_id == applicant_id
                && a.kind == kind
                && a.status == IntakeStatus::Pending
        })
    }

    /// Persist a new application.
    pub fn insert(&self, application: Application) -> Application {
        self.applications
            .insert(application.id, application.clone());
        application
    }

    /// Replace an existing application (state transitions).
    pub fn update(&self, application: &Application) -> AppResult<Application> {
        match self.applications.get_mut(&application.id) {
            Some(mut entry) => {
                *entry = application.clone();
                Ok(application.clone())
            }
            None => Err(AppError::not_found(format!(
                "Application {} not found",
                application.id
            ))),
        }
    }

    /// Remove every application of a repository (tenant teardown).
    pub fn delete_by_repository(&self, repository_id: Uuid) {
        self.applications
            .retain(|_, a| a.repository_id != repository_id);
    }
}
