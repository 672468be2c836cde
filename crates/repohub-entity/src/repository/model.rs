//! Repository (tenant) entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::participant::Participant;

/// Classification of a repository, affecting which fields apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoType {
    /// A plain content repository; may be public or private.
    Simple,
    /// A curated creator repository; access only via accepted application.
    Creator,
}

/// Category of a simple repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoCategory {
    /// A user's own tenant, created at registration.
    Personal,
    /// A shared organizational tenant.
    Organizational,
}

/// Visibility of a simple repository.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoPrivacy {
    /// Any authenticated user gets implicit read-only access.
    Public,
    /// Only the owner and active participants have access.
    Private,
}

/// A repository: the isolation boundary owning one folder/file tree and
/// one participant roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Unique repository identifier.
    pub id: Uuid,
    /// Repository name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Type classification.
    pub repo_type: RepoType,
    /// Category; simple repositories only.
    pub category: Option<RepoCategory>,
    /// Visibility; creator repositories are recorded public but never
    /// grant implicit access.
    pub privacy: RepoPrivacy,
    /// Interest areas; creator repositories only.
    pub interest_areas: Vec<String>,
    /// Geographic areas; creator repositories only.
    pub geo_areas: Vec<String>,
    /// Sectors; creator repositories only.
    pub sectors: Vec<String>,
    /// The owning user. Exclusive authority; implicitly role Owner.
    pub owner_id: Uuid,
    /// Participant roster. The owner never appears here.
    pub participants: Vec<Participant>,
    /// When the repository was created.
    pub created_at: DateTime<Utc>,
}

impl Repository {
    /// Build a repository from creation data, normalizing type-dependent
    /// fields: a simple repository carries no creator taxonomy vectors,
    /// and a creator repository carries no category and is always public.
    pub fn from_new(data: NewRepository, owner_id: Uuid, participants: Vec<Participant>) -> Self {
        let mut repo = Self {
            id: Uuid::new_v4(),
            name: data.name,
            description: data.description,
            repo_type: data.repo_type,
            category: data.category,
            privacy: data.privacy.unwrap_or(RepoPrivacy::Public),
            interest_areas: data.interest_areas,
            geo_areas: data.geo_areas,
            sectors: data.sectors,
            owner_id,
            participants,
            created_at: Utc::now(),
        };
        match repo.repo_type {
            RepoType::Simple => {
                repo.interest_areas.clear();
                repo.geo_areas.clear();
                repo.sectors.clear();
            }
            RepoType::Creator => {
                repo.category = None;
                repo.privacy = RepoPrivacy::Public;
            }
        }
        repo
    }

    /// Find the roster entry for a user, if any.
    pub fn participant(&self, user_id: Uuid) -> Option<&Participant> {
        self.participants.iter().find(|p| p.user_id == user_id)
    }

    /// Whether the repository grants implicit read-only access to
    /// non-participants.
    pub fn is_publicly_readable(&self) -> bool {
        self.repo_type == RepoType::Simple && self.privacy == RepoPrivacy::Public
    }
}

/// Data required to create a new repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRepository {
    /// Repository name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Type classification.
    pub repo_type: RepoType,
    /// Category; simple repositories only.
    pub category: Option<RepoCategory>,
    /// Visibility; defaults to public.
    pub privacy: Option<RepoPrivacy>,
    /// Interest areas; creator repositories only.
    #[serde(default)]
    pub interest_areas: Vec<String>,
    /// Geographic areas; creator repositories only.
    #[serde(default)]
    pub geo_areas: Vec<String>,
    /// Sectors; creator repositories only.
    #[serde(default)]
    pub sectors: Vec<String>,
    /// Users to seed as active writers.
    #[serde(default)]
    pub member_ids: Vec<Uuid>,
}
