//! File record handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use repohub_core::error::AppError;
use repohub_entity::file::{FileRecord, NewFileRecord, UpdateFileRecord};

use crate::dto::request::{CreateFileRequest, UpdateFileRequest};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/repositories/{id}/files
pub async fn create_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(repository_id): Path<Uuid>,
    Json(req): Json<CreateFileRequest>,
) -> Result<Json<ApiResponse<FileRecord>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let record = state
        .file_service
        .create_record(
            &auth,
            NewFileRecord {
                repository_id,
                folder_id: req.folder_id,
                title: req.title,
                original_name: req.original_name,
                content_type: req.content_type,
                size: req.size,
                description: req.description,
                tags: req.tags,
                importance: req.importance,
                sensitive: req.sensitive,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(record)))
}

/// GET /api/files/{id}
pub async fn get_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<FileRecord>>, ApiError> {
    let record = state.file_service.get_record(&auth, id).await?;
    Ok(Json(ApiResponse::ok(record)))
}

/// PUT /api/files/{id}
pub async fn update_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateFileRequest>,
) -> Result<Json<ApiResponse<FileRecord>>, ApiError> {
    let record = state
        .file_service
        .update_record(
            &auth,
            id,
            UpdateFileRecord {
                title: req.title,
                description: req.description,
                tags: req.tags,
                importance: req.importance,
                sensitive: req.sensitive,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(record)))
}

/// DELETE /api/files/{id}
pub async fn delete_file(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.file_service.delete_record(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "File record deleted",
    ))))
}
