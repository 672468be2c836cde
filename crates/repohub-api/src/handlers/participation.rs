//! Invitation, application, and roster handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;
use validator::Validate;

use repohub_core::error::AppError;
use repohub_entity::application::Application;
use repohub_entity::invitation::Invitation;
use repohub_entity::repository::Repository;

use crate::dto::request::{
    AcceptInvitationRequest, ChangeRoleRequest, CreateApplicationRequest,
    CreateInvitationRequest, RejectInvitationRequest, ReviewApplicationRequest,
};
use crate::dto::response::{ApiResponse, MessageResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/repositories/{id}/invitations
pub async fn create_invitation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(repository_id): Path<Uuid>,
    Json(req): Json<CreateInvitationRequest>,
) -> Result<Json<ApiResponse<Invitation>>, ApiError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let invitation = state
        .repository_service
        .invite(&auth, repository_id, &req.email, req.role)
        .await?;

    Ok(Json(ApiResponse::ok(invitation)))
}

/// POST /api/invitations/accept
pub async fn accept_invitation(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<AcceptInvitationRequest>,
) -> Result<Json<ApiResponse<Repository>>, ApiError> {
    let repository = state
        .repository_service
        .accept_invitation(&auth, &req.token)
        .await?;

    Ok(Json(ApiResponse::ok(repository)))
}

/// POST /api/invitations/reject
pub async fn reject_invitation(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<RejectInvitationRequest>,
) -> Result<Json<ApiResponse<Invitation>>, ApiError> {
    let invitation = state
        .repository_service
        .reject_invitation(&auth, req.invitation_id)
        .await?;

    Ok(Json(ApiResponse::ok(invitation)))
}

/// POST /api/repositories/{id}/applications
pub async fn create_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(repository_id): Path<Uuid>,
    Json(req): Json<CreateApplicationRequest>,
) -> Result<Json<ApiResponse<Application>>, ApiError> {
    let application = state
        .repository_service
        .apply(&auth, repository_id, req.kind, req.message)
        .await?;

    Ok(Json(ApiResponse::ok(application)))
}

/// POST /api/applications/{id}/review
pub async fn review_application(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(application_id): Path<Uuid>,
    Json(req): Json<ReviewApplicationRequest>,
) -> Result<Json<ApiResponse<Application>>, ApiError> {
    let application = state
        .repository_service
        .review_application(&auth, application_id, req.approve)
        .await?;

    Ok(Json(ApiResponse::ok(application)))
}

/// PUT /api/repositories/{id}/participants/{user_id}
pub async fn change_participant_role(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((repository_id, user_id)): Path<(Uuid, Uuid)>,
    Json(req): Json<ChangeRoleRequest>,
) -> Result<Json<ApiResponse<Repository>>, ApiError> {
    let repository = state
        .repository_service
        .change_participant_role(&auth, repository_id, user_id, req.role)
        .await?;

    Ok(Json(ApiResponse::ok(repository)))
}

/// DELETE /api/repositories/{id}/participants/{user_id}
pub async fn remove_participant(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((repository_id, user_id)): Path<(Uuid, Uuid)>,
) -> Result<Json<ApiResponse<MessageResponse>>, ApiError> {
    state
        .repository_service
        .remove_participant(&auth, repository_id, user_id)
        .await?;

    Ok(Json(ApiResponse::ok(MessageResponse::new(
        "Participant removed",
    ))))
}
