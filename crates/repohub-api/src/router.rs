//! Route definitions for the RepoHub HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via
//! Axum's `State` extractor.

use axum::{
    Router,
    routing::{delete, get, patch, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(repository_routes())
        .merge(folder_routes())
        .merge(file_routes())
        .merge(participation_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Repository tenant lifecycle.
fn repository_routes() -> Router<AppState> {
    Router::new()
        .route("/repositories", post(handlers::repository::create_repository))
        .route("/repositories/mine", get(handlers::repository::list_mine))
        .route("/repositories/public", get(handlers::repository::list_public))
        .route("/repositories/{id}", get(handlers::repository::get_repository))
        .route(
            "/repositories/{id}",
            delete(handlers::repository::delete_repository),
        )
}

/// Folder tree operations.
fn folder_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/repositories/{id}/folders",
            post(handlers::folder::create_folder),
        )
        .route("/folders/contents", get(handlers::folder::get_contents))
        .route("/folders/{id}", put(handlers::folder::rename_folder))
        .route("/folders/{id}/move", patch(handlers::folder::move_folder))
        .route("/folders/{id}", delete(handlers::folder::delete_folder))
        .route("/folders/{id}/path", get(handlers::folder::get_path))
}

/// File record CRUD.
fn file_routes() -> Router<AppState> {
    Router::new()
        .route("/repositories/{id}/files", post(handlers::file::create_file))
        .route("/files/{id}", get(handlers::file::get_file))
        .route("/files/{id}", put(handlers::file::update_file))
        .route("/files/{id}", delete(handlers::file::delete_file))
}

/// Invitations, applications, and roster management.
fn participation_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/repositories/{id}/invitations",
            post(handlers::participation::create_invitation),
        )
        .route(
            "/invitations/accept",
            post(handlers::participation::accept_invitation),
        )
        .route(
            "/invitations/reject",
            post(handlers::participation::reject_invitation),
        )
        .route(
            "/repositories/{id}/applications",
            post(handlers::participation::create_application),
        )
        .route(
            "/applications/{id}/review",
            post(handlers::participation::review_application),
        )
        .route(
            "/repositories/{id}/participants/{user_id}",
            put(handlers::participation::change_participant_role),
        )
        .route(
            "/repositories/{id}/participants/{user_id}",
            delete(handlers::participation::remove_participant),
        )
}

/// Health check endpoint (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health_check))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new()
        .allow_methods(Any)
        .allow_headers(Any);

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
