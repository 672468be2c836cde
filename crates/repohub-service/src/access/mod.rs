//! Access control evaluator.
//!
//! A pure mapping from `(user, repository)` to an effective role, plus the
//! authorization gate every mutating operation goes through. Roles form a
//! total order (`viewer < writer < admin < owner`); there is no permission
//! inheritance beyond that comparison.

use uuid::Uuid;

use repohub_core::error::AppError;
use repohub_core::result::AppResult;
use repohub_entity::repository::{RepoRole, Repository};

/// Resolve the effective role of `user_id` within `repository`.
///
/// - The owner is always `Owner`, whether or not listed in the roster.
/// - Otherwise an *active* roster entry supplies its stored role; pending
///   entries grant nothing.
/// - Otherwise public simple repositories grant implicit read-only
///   `Viewer`; creator repositories never do.
/// - Otherwise the user has no access.
pub fn resolve_role(user_id: Uuid, repository: &Repository) -> Option<RepoRole> {
    if repository.owner_id == user_id {
        return Some(RepoRole::Owner);
    }
    if let Some(participant) = repository.participant(user_id) {
        if participant.is_active() {
            return Some(participant.role);
        }
    }
    if repository.is_publicly_readable() {
        return Some(RepoRole::Viewer);
    }
    None
}

/// Fail `Forbidden` unless the user's effective role ranks at least
/// `minimum`. Returns the resolved role on success.
pub fn require_role(
    user_id: Uuid,
    repository: &Repository,
    minimum: RepoRole,
) -> AppResult<RepoRole> {
    match resolve_role(user_id, repository) {
        Some(role) if role.has_at_least(&minimum) => Ok(role),
        Some(role) => Err(AppError::forbidden(format!(
            "Requires at least {minimum} access, current role is {role}"
        ))),
        None => Err(AppError::forbidden("No access to this repository")),
    }
}
