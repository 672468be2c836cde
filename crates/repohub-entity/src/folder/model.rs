//! Folder entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A folder in a repository's content tree.
///
/// `path` is the materialized path: the ordered ancestor folder ids from
/// root to immediate parent, excluding the folder itself. It stores
/// identities rather than names, so renames never touch descendants and
/// breadcrumb labels are joined at read time. Invariant:
/// `level == path.len()`, and `id` never appears in `path`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    /// Unique folder identifier.
    pub id: Uuid,
    /// The owning repository (tenant).
    pub repository_id: Uuid,
    /// Parent folder ID (None for repository root level).
    pub parent_id: Option<Uuid>,
    /// Folder name, unique among siblings.
    pub name: String,
    /// Ancestor folder ids, root first.
    pub path: Vec<Uuid>,
    /// Depth in the tree; root-level folders are 0.
    pub level: i32,
    /// The user who created the folder.
    pub created_by: Uuid,
    /// When the folder was created.
    pub created_at: DateTime<Utc>,
    /// When the folder was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Folder {
    /// Build a folder from creation data and a resolved parent chain.
    pub fn from_new(data: NewFolder, path: Vec<Uuid>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            repository_id: data.repository_id,
            parent_id: data.parent_id,
            name: data.name,
            level: path.len() as i32,
            path,
            created_by: data.created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Check if this is a root-level folder (no parent).
    pub fn is_root_level(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Whether `ancestor_id` appears in this folder's ancestor chain.
    pub fn has_ancestor(&self, ancestor_id: Uuid) -> bool {
        self.path.contains(&ancestor_id)
    }
}

/// Data required to create a new folder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFolder {
    /// The owning repository.
    pub repository_id: Uuid,
    /// Parent folder (None for root level).
    pub parent_id: Option<Uuid>,
    /// Folder name.
    pub name: String,
    /// The creating user.
    pub created_by: Uuid,
}
