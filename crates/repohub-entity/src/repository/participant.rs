//! Participant roster entry.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::role::RepoRole;

/// Membership status of a roster entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParticipantStatus {
    /// Invited or applied, not yet granted access.
    Pending,
    /// Active member; the stored role is in effect.
    Active,
}

/// A user with an assigned role and status within a repository's roster.
///
/// The roster is a set keyed by `user_id`: a user appears at most once.
/// The repository owner is implicitly role Owner and is never stored here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    /// The participating user.
    pub user_id: Uuid,
    /// The role granted to this user.
    pub role: RepoRole,
    /// Whether the membership is in effect.
    pub status: ParticipantStatus,
}

impl Participant {
    /// Create an active roster entry.
    pub fn active(user_id: Uuid, role: RepoRole) -> Self {
        Self {
            user_id,
            role,
            status: ParticipantStatus::Active,
        }
    }

    /// Whether this entry currently grants its role.
    pub fn is_active(&self) -> bool {
        matches!(self.status, ParticipantStatus::Active)
    }
}
