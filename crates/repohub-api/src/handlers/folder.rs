//! Folder tree handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;
use validator::Validate;

use repohub_core::error::AppError;
use repohub_entity::folder::Folder;
use repohub_service::folder::FolderContents;

use crate::dto::request::{
    ContentsQuery, CreateFolderRequest, MoveFolderRequest, RenameFolderRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/repositories/{id}/folders
pub async fn create_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(repository_id): Path<Uuid>,
    Json(req): Json<CreateFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let folder = state
        .folder_service
        .create_folder(&auth, repository_id, &req.name, req.parent_folder_id)
        .await?;

    Ok(Json(ApiResponse::ok(folder)))
}

/// GET /api/folders/contents?repository_id=...&folder_id=...
pub async fn get_contents(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ContentsQuery>,
) -> Result<Json<ApiResponse<FolderContents>>, ApiError> {
    let contents = state
        .folder_service
        .get_contents(&auth, query.repository_id, query.folder_id)
        .await?;

    Ok(Json(ApiResponse::ok(contents)))
}

/// PUT /api/folders/{id}
pub async fn rename_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<RenameFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let folder = state
        .folder_service
        .rename_folder(&auth, id, &req.name)
        .await?;

    Ok(Json(ApiResponse::ok(folder)))
}

/// PATCH /api/folders/{id}/move
pub async fn move_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<MoveFolderRequest>,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let folder = state
        .folder_service
        .move_folder(&auth, id, req.new_parent_folder_id)
        .await?;

    Ok(Json(ApiResponse::ok(folder)))
}

/// DELETE /api/folders/{id}
pub async fn delete_folder(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.folder_service.delete_folder(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new("Folder deleted"))))
}

/// GET /api/folders/{id}/path
pub async fn get_path(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Vec<Folder>>>, ApiError> {
    let ancestors = state.folder_service.get_path(&auth, id).await?;
    Ok(Json(ApiResponse::ok(ancestors)))
}
