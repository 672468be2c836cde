//! Domain events published after structural changes.
//!
//! Services fire these on a broadcast channel so that collaborator
//! surfaces (profile/dashboard aggregate views) can refresh their
//! repository and file counts. The core itself never subscribes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A structural change that invalidates per-repository aggregates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatsEvent {
    /// A repository was created.
    RepositoryCreated {
        /// The affected repository.
        repository_id: Uuid,
    },
    /// A repository and all its contents were removed.
    RepositoryDeleted {
        /// The affected repository.
        repository_id: Uuid,
    },
    /// The folder tree of a repository changed shape.
    TreeChanged {
        /// The affected repository.
        repository_id: Uuid,
    },
    /// File records were added, updated, or removed.
    FilesChanged {
        /// The affected repository.
        repository_id: Uuid,
    },
}

impl StatsEvent {
    /// The repository the event concerns.
    pub fn repository_id(&self) -> Uuid {
        match self {
            Self::RepositoryCreated { repository_id }
            | Self::RepositoryDeleted { repository_id }
            | Self::TreeChanged { repository_id }
            | Self::FilesChanged { repository_id } => *repository_id,
        }
    }
}
