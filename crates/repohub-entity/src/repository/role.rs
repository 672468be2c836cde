//! Repository role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles a participant can hold within a repository.
///
/// Roles are ordered by privilege level: Owner > Admin > Writer > Viewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepoRole {
    /// Exclusive authority over the repository, including its deletion.
    Owner,
    /// Can manage the participant roster.
    Admin,
    /// Can create, rename, move, upload, and delete folders and files.
    Writer,
    /// Read-only access to the content tree.
    Viewer,
}

impl RepoRole {
    /// Return the privilege level (higher = more privileged).
    pub fn privilege_level(&self) -> u8 {
        match self {
            Self::Owner => 4,
            Self::Admin => 3,
            Self::Writer => 2,
            Self::Viewer => 1,
        }
    }

    /// Check if this role has at least the given role's privileges.
    pub fn has_at_least(&self, other: &RepoRole) -> bool {
        self.privilege_level() >= other.privilege_level()
    }

    /// Check if this role is the owner.
    pub fn is_owner(&self) -> bool {
        matches!(self, Self::Owner)
    }

    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Writer => "writer",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for RepoRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RepoRole {
    type Err = repohub_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "owner" => Ok(Self::Owner),
            "admin" => Ok(Self::Admin),
            "writer" => Ok(Self::Writer),
            "viewer" => Ok(Self::Viewer),
            _ => Err(repohub_core::AppError::validation(format!(
                "Invalid repository role: '{s}'. Expected one of: owner, admin, writer, viewer"
            ))),
        }
    }
}
