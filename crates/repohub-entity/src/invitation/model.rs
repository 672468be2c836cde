//! Invitation entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::RepoRole;

/// Lifecycle state of an invitation or application.
///
/// `Pending` may transition to exactly one of the terminal states;
/// there is no transition out of a terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntakeStatus {
    /// Awaiting a decision.
    Pending,
    /// Accepted; the participant add has been performed.
    Accepted,
    /// Rejected; no side effect.
    Rejected,
}

impl IntakeStatus {
    /// Whether the state admits no further transitions.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

/// An invitation to join a repository's roster at a given role.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    /// Unique invitation identifier.
    pub id: Uuid,
    /// The repository the invitee would join.
    pub repository_id: Uuid,
    /// Email address the invitation was sent to.
    pub email: String,
    /// Role granted on acceptance.
    pub role: RepoRole,
    /// Opaque acceptance token carried by the invitation link.
    pub token: String,
    /// The inviting user.
    pub invited_by: Uuid,
    /// Lifecycle state.
    pub status: IntakeStatus,
    /// When the invitation was created.
    pub created_at: DateTime<Utc>,
}

impl Invitation {
    /// Create a pending invitation with a fresh token.
    pub fn new(repository_id: Uuid, email: String, role: RepoRole, invited_by: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            repository_id,
            email,
            role,
            token: Uuid::new_v4().simple().to_string(),
            invited_by,
            status: IntakeStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
