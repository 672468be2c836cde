//! RepoHub Server — Multi-Tenant Content Repository Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tokio::sync::broadcast;
use tracing_subscriber::{EnvFilter, fmt};

use repohub_api::state::AppState;
use repohub_api::token::StaticTokenResolver;
use repohub_core::config::AppConfig;
use repohub_core::error::AppError;
use repohub_service::file::FileService;
use repohub_service::folder::FolderService;
use repohub_service::repository::RepositoryService;
use repohub_store::{
    ApplicationStore, FileStore, FolderStore, InvitationStore, RepositoryLocks, RepositoryStore,
};

#[tokio::main]
async fn main() {
    let env = std::env::var("REPOHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt().pretty().with_env_filter(filter).with_target(true).init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting RepoHub v{}", env!("CARGO_PKG_VERSION"));

    // ── Stores and locks ─────────────────────────────────────────
    let repository_store = Arc::new(RepositoryStore::new());
    let folder_store = Arc::new(FolderStore::new());
    let file_store = Arc::new(FileStore::new());
    let invitation_store = Arc::new(InvitationStore::new());
    let application_store = Arc::new(ApplicationStore::new());
    let locks = Arc::new(RepositoryLocks::new());

    // Aggregate-refresh hook; consumers subscribe out of process scope.
    let (stats, _) = broadcast::channel(64);

    // ── Services ─────────────────────────────────────────────────
    let repository_service = Arc::new(RepositoryService::new(
        Arc::clone(&repository_store),
        Arc::clone(&folder_store),
        Arc::clone(&file_store),
        Arc::clone(&invitation_store),
        Arc::clone(&application_store),
        Arc::clone(&locks),
        stats.clone(),
    ));
    let folder_service = Arc::new(FolderService::new(
        Arc::clone(&repository_store),
        Arc::clone(&folder_store),
        Arc::clone(&file_store),
        Arc::clone(&locks),
        stats.clone(),
    ));
    let file_service = Arc::new(FileService::new(
        Arc::clone(&repository_store),
        Arc::clone(&folder_store),
        Arc::clone(&file_store),
        Arc::clone(&locks),
        stats,
    ));
    tracing::info!("Services initialized");

    // ── Token resolver ───────────────────────────────────────────
    let token_resolver = Arc::new(StaticTokenResolver::from_config(&config.auth));
    tracing::info!(
        tokens = config.auth.tokens.len(),
        "Static token resolver seeded"
    );

    // ── HTTP server ──────────────────────────────────────────────
    let addr = format!("{}:{}", config.server.host, config.server.port);

    let app_state = AppState {
        config: Arc::new(config),
        token_resolver,
        repository_service,
        folder_service,
        file_service,
    };

    let app = repohub_api::build_router(app_state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("RepoHub server listening on {addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            shutdown_signal().await;
            tracing::info!("Shutdown signal received, starting graceful shutdown...");
        })
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    tracing::info!("RepoHub server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
