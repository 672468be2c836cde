//! Application state shared across all handlers.

use std::sync::Arc;

use repohub_core::config::AppConfig;
use repohub_core::traits::TokenResolver;
use repohub_service::file::FileService;
use repohub_service::folder::FolderService;
use repohub_service::repository::RepositoryService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Resolves bearer tokens into user identities.
    pub token_resolver: Arc<dyn TokenResolver>,
    /// Repository tenant and participation service.
    pub repository_service: Arc<RepositoryService>,
    /// Folder tree service.
    pub folder_service: Arc<FolderService>,
    /// File record service.
    pub file_service: Arc<FileService>,
}
