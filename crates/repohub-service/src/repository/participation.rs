//! Participation management: invitations, applications, and roster edits.
//!
//! Invitations and applications share one state machine: `Pending` moves
//! to exactly one of `Accepted` or `Rejected`, and terminal records admit
//! no further transitions. Acceptance adds the participant idempotently:
//! an existing roster entry is left as-is, never overwritten.

use tracing::info;
use uuid::Uuid;

use repohub_core::error::AppError;
use repohub_core::result::AppResult;
use repohub_entity::application::{Application, ApplicationKind};
use repohub_entity::invitation::{IntakeStatus, Invitation};
use repohub_entity::repository::{Participant, RepoRole, RepoType, Repository};

use crate::access;
use crate::context::RequestContext;

use super::service::RepositoryService;

impl RepositoryService {
    /// Invites a user (by email) into the repository at the given role.
    /// Admin-gated; the owner role cannot be granted by invitation.
    pub async fn invite(
        &self,
        ctx: &RequestContext,
        repository_id: Uuid,
        email: &str,
        role: RepoRole,
    ) -> AppResult<Invitation> {
        if email.trim().is_empty() {
            return Err(AppError::validation("Invitee email cannot be empty"));
        }
        if role == RepoRole::Owner {
            return Err(AppError::validation(
                "The owner role cannot be granted by invitation",
            ));
        }

        let repository = self.repository(repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Admin)?;

        let invitation = self.invitation_store.insert(Invitation::new(
            repository_id,
            email.trim().to_string(),
            role,
            ctx.user_id,
        ));

        info!(
            user_id = %ctx.user_id,
            repository_id = %repository_id,
            invitation_id = %invitation.id,
            role = %role,
            "Invitation sent"
        );

        Ok(invitation)
    }

    /// Accepts an invitation by its opaque token, activating the caller
    /// in the roster at the invited role.
    pub async fn accept_invitation(
        &self,
        ctx: &RequestContext,
        token: &str,
    ) -> AppResult<Repository> {
        let mut invitation = self
            .invitation_store
            .find_by_token(token)
            .ok_or_else(|| AppError::not_found("Invitation not found"))?;
        if invitation.status.is_terminal() {
            return Err(AppError::conflict("Invitation has already been resolved"));
        }

        let repository = self.repository(invitation.repository_id)?;
        let _guard = self.locks.acquire(repository.id).await;

        invitation.status = IntakeStatus::Accepted;
        self.invitation_store.update(&invitation)?;

        let repository = self.add_participant_if_absent(repository, ctx.user_id, invitation.role)?;

        info!(
            user_id = %ctx.user_id,
            repository_id = %repository.id,
            invitation_id = %invitation.id,
            "Invitation accepted"
        );

        Ok(repository)
    }

    /// Rejects a pending invitation. Terminal; no side effect on the roster.
    pub async fn reject_invitation(
        &self,
        ctx: &RequestContext,
        invitation_id: Uuid,
    ) -> AppResult<Invitation> {
        let mut invitation = self
            .invitation_store
            .find_by_id(invitation_id)
            .ok_or_else(|| AppError::not_found("Invitation not found"))?;
        if invitation.status.is_terminal() {
            return Err(AppError::conflict("Invitation has already been resolved"));
        }

        invitation.status = IntakeStatus::Rejected;
        let invitation = self.invitation_store.update(&invitation)?;

        info!(
            user_id = %ctx.user_id,
            invitation_id = %invitation_id,
            "Invitation rejected"
        );

        Ok(invitation)
    }

    /// Files a membership application. Member applications target simple
    /// repositories, creator applications target creator repositories.
    pub async fn apply(
        &self,
        ctx: &RequestContext,
        repository_id: Uuid,
        kind: ApplicationKind,
        message: Option<String>,
    ) -> AppResult<Application> {
        let repository = self.repository(repository_id)?;

        let expected = match repository.repo_type {
            RepoType::Simple => ApplicationKind::Member,
            RepoType::Creator => ApplicationKind::Creator,
        };
        if kind != expected {
            return Err(AppError::validation(format!(
                "A {} repository accepts only {expected:?} applications",
                match repository.repo_type {
                    RepoType::Simple => "simple",
                    RepoType::Creator => "creator",
                }
            )));
        }

        if repository.owner_id == ctx.user_id || repository.participant(ctx.user_id).is_some() {
            return Err(AppError::conflict(
                "Already a participant of this repository",
            ));
        }
        if self
            .application_store
            .has_pending(repository_id, ctx.user_id, kind)
        {
            return Err(AppError::conflict(
                "An application for this repository is already pending",
            ));
        }

        let application = self.application_store.insert(Application::new(
            repository_id,
            ctx.user_id,
            kind,
            message,
        ));

        info!(
            user_id = %ctx.user_id,
            repository_id = %repository_id,
            application_id = %application.id,
            kind = ?kind,
            "Application filed"
        );

        Ok(application)
    }

    /// Approves or rejects a pending application. Admin-gated. Approval
    /// adds the applicant as an active writer, idempotently.
    pub async fn review_application(
        &self,
        ctx: &RequestContext,
        application_id: Uuid,
        approve: bool,
    ) -> AppResult<Application> {
        let mut application = self
            .application_store
            .find_by_id(application_id)
            .ok_or_else(|| AppError::not_found("Application not found"))?;
        if application.status.is_terminal() {
            return Err(AppError::conflict("Application has already been resolved"));
        }

        let repository = self.repository(application.repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Admin)?;

        if approve {
            let _guard = self.locks.acquire(repository.id).await;
            application.status = IntakeStatus::Accepted;
            self.application_store.update(&application)?;
            self.add_participant_if_absent(repository, application.applicant_id, RepoRole::Writer)?;
        } else {
            application.status = IntakeStatus::Rejected;
            self.application_store.update(&application)?;
        }

        info!(
            user_id = %ctx.user_id,
            application_id = %application_id,
            approved = approve,
            "Application reviewed"
        );

        Ok(application)
    }

    /// Removes a participant from the roster. Admin-gated; the owner
    /// cannot be removed via this path.
    pub async fn remove_participant(
        &self,
        ctx: &RequestContext,
        repository_id: Uuid,
        user_id: Uuid,
    ) -> AppResult<Repository> {
        let mut repository = self.repository(repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Admin)?;

        if user_id == repository.owner_id {
            return Err(AppError::validation("The owner cannot be removed"));
        }

        let _guard = self.locks.acquire(repository_id).await;
        repository = self.repository(repository_id)?;

        let before = repository.participants.len();
        repository.participants.retain(|p| p.user_id != user_id);
        if repository.participants.len() == before {
            return Err(AppError::not_found("Participant not found"));
        }
        let repository = self.repository_store.update(&repository)?;

        info!(
            user_id = %ctx.user_id,
            repository_id = %repository_id,
            removed = %user_id,
            "Participant removed"
        );

        Ok(repository)
    }

    /// Changes a participant's role. Admin-gated; the owner cannot be
    /// demoted and the owner role cannot be granted.
    pub async fn change_participant_role(
        &self,
        ctx: &RequestContext,
        repository_id: Uuid,
        user_id: Uuid,
        role: RepoRole,
    ) -> AppResult<Repository> {
        let repository = self.repository(repository_id)?;
        access::require_role(ctx.user_id, &repository, RepoRole::Admin)?;

        if user_id == repository.owner_id {
            return Err(AppError::validation("The owner's role cannot be changed"));
        }
        if role == RepoRole::Owner {
            return Err(AppError::validation("The owner role cannot be granted"));
        }

        let _guard = self.locks.acquire(repository_id).await;
        let mut repository = self.repository(repository_id)?;

        let participant = repository
            .participants
            .iter_mut()
            .find(|p| p.user_id == user_id)
            .ok_or_else(|| AppError::not_found("Participant not found"))?;
        participant.role = role;
        let repository = self.repository_store.update(&repository)?;

        info!(
            user_id = %ctx.user_id,
            repository_id = %repository_id,
            participant = %user_id,
            new_role = %role,
            "Participant role changed"
        );

        Ok(repository)
    }

    /// Adds `{user, role, active}` to the roster unless the user already
    /// participates or owns the repository; an existing entry is left
    /// untouched.
    fn add_participant_if_absent(
        &self,
        mut repository: Repository,
        user_id: Uuid,
        role: RepoRole,
    ) -> AppResult<Repository> {
        if repository.owner_id == user_id || repository.participant(user_id).is_some() {
            return Ok(repository);
        }
        repository
            .participants
            .push(Participant::active(user_id, role));
        self.repository_store.update(&repository)
    }
}
