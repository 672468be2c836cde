//! Application entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::invitation::IntakeStatus;

/// What the applicant is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationKind {
    /// Membership in a simple repository.
    Member,
    /// Participation in a creator repository.
    Creator,
}

/// A user-initiated request to join a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    /// Unique application identifier.
    pub id: Uuid,
    /// The repository applied to.
    pub repository_id: Uuid,
    /// The applying user.
    pub applicant_id: Uuid,
    /// Member or creator intake.
    pub kind: ApplicationKind,
    /// Optional message to the reviewers.
    pub message: Option<String>,
    /// Lifecycle state; same machine as invitations.
    pub status: IntakeStatus,
    /// When the application was filed.
    pub created_at: DateTime<Utc>,
}

impl Application {
    /// File a pending application.
    pub fn new(
        repository_id: Uuid,
        applicant_id: Uuid,
        kind: ApplicationKind,
        message: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            repository_id,
            applicant_id,
            kind,
            message,
            status: IntakeStatus::Pending,
            created_at: Utc::now(),
        }
    }
}
