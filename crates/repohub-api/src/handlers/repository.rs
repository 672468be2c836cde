//! Repository tenant handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use repohub_core::error::AppError;
use repohub_entity::repository::{NewRepository, Repository};

use crate::dto::request::CreateRepositoryRequest;
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/repositories
pub async fn create_repository(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateRepositoryRequest>,
) -> Result<Json<ApiResponse<Repository>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let repository = state
        .repository_service
        .create_repository(
            &auth,
            NewRepository {
                name: req.name,
                description: req.description,
                repo_type: req.repo_type,
                category: req.category,
                privacy: req.privacy,
                interest_areas: req.interest_areas,
                geo_areas: req.geo_areas,
                sectors: req.sectors,
                member_ids: req.member_ids,
            },
        )
        .await?;

    Ok(Json(ApiResponse::ok(repository)))
}

/// GET /api/repositories/mine
pub async fn list_mine(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Repository>>>, ApiError> {
    let repositories = state.repository_service.list_my_repositories(&auth).await;
    Ok(Json(ApiResponse::ok(repositories)))
}

/// GET /api/repositories/public
pub async fn list_public(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<Repository>>>, ApiError> {
    let repositories = state.repository_service.list_public_repositories().await;
    Ok(Json(ApiResponse::ok(repositories)))
}

/// GET /api/repositories/{id}
pub async fn get_repository(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Repository>>, ApiError> {
    let repository = state.repository_service.get_repository(&auth, id).await?;
    Ok(Json(ApiResponse::ok(repository)))
}

/// DELETE /api/repositories/{id}
pub async fn delete_repository(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state.repository_service.delete_repository(&auth, id).await?;
    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Repository deleted",
    ))))
}
