//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use repohub_entity::application::ApplicationKind;
use repohub_entity::file::Importance;
use repohub_entity::repository::{RepoCategory, RepoPrivacy, RepoRole, RepoType};

/// Create repository request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateRepositoryRequest {
    /// Repository name.
    #[validate(length(min = 1, max = 255))]
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

/// Create folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFolderRequest {
    /// Folder name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    /// Parent folder ID (None = repository root).
    pub parent_folder_id: Option<Uuid>,
}

/// Folder contents query parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentsQuery {
    /// The repository to browse.
    pub repository_id: Uuid,
    /// The folder to list (None = repository root).
    pub folder_id: Option<Uuid>,
}

/// Rename folder request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenameFolderRequest {
    /// New folder name.
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

/// Move folder request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveFolderRequest {
    /// Target parent folder ID (null = repository root).
    pub new_parent_folder_id: Option<Uuid>,
}

/// Create file record request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateFileRequest {
    /// Containing folder (None = repository root).
    pub folder_id: Option<Uuid>,
    /// Display title.
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    /// Original upload file name.
    #[validate(length(min = 1, max = 255))]
    pub original_name: String,
    /// MIME type.
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Optional description.
    pub description: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Importance level (0-3).
    #[serde(default)]
    pub importance: Importance,
    /// Sensitivity flag.
    #[serde(default)]
    pub sensitive: bool,
}

/// Partial file metadata update request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFileRequest {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// Replacement tag set.
    pub tags: Option<Vec<String>>,
    /// New importance level.
    pub importance: Option<Importance>,
    /// New sensitivity flag.
    pub sensitive: Option<bool>,
}

/// Create invitation request.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateInvitationRequest {
    /// Invitee email address.
    #[validate(email)]
    pub email: String,
    /// Role granted on acceptance.
    pub role: RepoRole,
}

/// Accept invitation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceptInvitationRequest {
    /// The opaque acceptance token from the invitation link.
    pub token: String,
}

/// Reject invitation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectInvitationRequest {
    /// The invitation to reject.
    pub invitation_id: Uuid,
}

/// Create application request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateApplicationRequest {
    /// Member or creator intake.
    pub kind: ApplicationKind,
    /// Optional message to the reviewers.
    pub message: Option<String>,
}

/// Review application request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewApplicationRequest {
    /// Whether to approve the application.
    pub approve: bool,
}

/// Change participant role request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangeRoleRequest {
    /// The new role.
    pub role: RepoRole,
}
