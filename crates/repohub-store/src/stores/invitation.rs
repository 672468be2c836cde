//! Invitation store.

use dashmap::DashMap;
use uuid::Uuid;

use repohub_core::error::AppError;
use repohub_core::result::AppResult;
use repohub_entity::invitation::Invitation;

/// Store for repository invitations.
#[derive(Debug, Default)]
pub struct InvitationStore {
    invitations: DashMap<Uuid, Invitation>,
}

impl InvitationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Find an invitation by ID.
    pub fn find_by_id(&self, id: Uuid) -> Option<Invitation> {
        self.invitations.get(&id).map(|i| i.clone())
    }

    /// Find an invitation by its acceptance token.
    pub fn find_by_token(&self, token: &str) -> Option<Invitation> {
        self.invitations
            .iter()
            .find(|i| i.token == token)
            .map(|i| i.clone())
    }

    /// Persist a new invitation.
    pub fn insert(&self, invitation: Invitation) -> Invitation {
        self.invitations.insert(invitation.id, invitation.clone());
        invitation
    }

    /// Replace an existing invitation (state transitions).
    pub fn update(&self, invitation: &Invitation) -> AppResult<Invitation> {
        match self.invitations.get_mut(&invitation.id) {
            Some(mut entry) => {
                *entry = invitation.clone();
                Ok(invitation.clone())
            }
            None => Err(AppError::not_found(format!(
                "Invitation {} not found",
                invitation.id
            ))),
        }
    }

    /// Remove every invitation of a repository (tenant teardown).
    pub fn delete_by_repository(&self, repository_id: Uuid) {
        self.invitations
            .retain(|_, i| i.repository_id != repository_id);
    }
}
