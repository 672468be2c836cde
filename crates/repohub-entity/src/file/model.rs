//! File record entity model.
//!
//! RepoHub stores file *records* (descriptive metadata attached to a
//! folder or the repository root); the content bytes live with an
//! external storage collaborator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Importance level of a file record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Importance {
    /// No particular importance.
    #[default]
    None,
    /// Low importance.
    Low,
    /// Medium importance.
    Medium,
    /// High importance.
    High,
}

impl From<Importance> for u8 {
    fn from(value: Importance) -> Self {
        match value {
            Importance::None => 0,
            Importance::Low => 1,
            Importance::Medium => 2,
            Importance::High => 3,
        }
    }
}

impl TryFrom<u8> for Importance {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::None),
            1 => Ok(Self::Low),
            2 => Ok(Self::Medium),
            3 => Ok(Self::High),
            other => Err(format!("Invalid importance level: {other}. Expected 0-3")),
        }
    }
}

/// A leaf file record within a repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileRecord {
    /// Unique file identifier.
    pub id: Uuid,
    /// The owning repository (tenant).
    pub repository_id: Uuid,
    /// The containing folder (None = repository root). When set, the
    /// folder's repository must equal `repository_id`.
    pub folder_id: Option<Uuid>,
    /// Display title.
    pub title: String,
    /// Original upload file name.
    pub original_name: String,
    /// Content descriptor (MIME type).
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Optional description.
    pub description: Option<String>,
    /// Free-form tags.
    pub tags: Vec<String>,
    /// Importance level.
    pub importance: Importance,
    /// Whether the record carries sensitive content.
    pub sensitive: bool,
    /// The user who uploaded the record.
    pub uploaded_by: Uuid,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}

impl FileRecord {
    /// Build a file record from creation data.
    pub fn from_new(data: NewFileRecord, uploaded_by: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            repository_id: data.repository_id,
            folder_id: data.folder_id,
            title: data.title,
            original_name: data.original_name,
            content_type: data.content_type,
            size: data.size,
            description: data.description,
            tags: data.tags,
            importance: data.importance,
            sensitive: data.sensitive,
            uploaded_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a metadata update in place.
    pub fn apply_update(&mut self, update: UpdateFileRecord) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = Some(description);
        }
        if let Some(tags) = update.tags {
            self.tags = tags;
        }
        if let Some(importance) = update.importance {
            self.importance = importance;
        }
        if let Some(sensitive) = update.sensitive {
            self.sensitive = sensitive;
        }
        self.updated_at = Utc::now();
    }
}

/// Data required to create a new file record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewFileRecord {
    /// The owning repository.
    pub repository_id: Uuid,
    /// The containing folder (None = repository root).
    pub folder_id: Option<Uuid>,
    /// Display title.
    pub title: String,
    /// Original upload file name.
    pub original_name: String,
    /// Content descriptor (MIME type).
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
    /// Optional description.
    pub description: Option<String>,
    /// Free-form tags.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Importance level.
    #[serde(default)]
    pub importance: Importance,
    /// Sensitivity flag.
    #[serde(default)]
    pub sensitive: bool,
}

/// Partial metadata update for a file record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateFileRecord {
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
