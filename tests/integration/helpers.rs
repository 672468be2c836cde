//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use uuid::Uuid;

use repohub_api::state::AppState;
use repohub_api::token::StaticTokenResolver;
use repohub_core::config::AppConfig;
use repohub_service::file::FileService;
use repohub_service::folder::FolderService;
use repohub_service::repository::RepositoryService;
use repohub_store::{
    ApplicationStore, FileStore, FolderStore, InvitationStore, RepositoryLocks, RepositoryStore,
};

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Token resolver for registering test identities
    pub token_resolver: Arc<StaticTokenResolver>,
}

impl TestApp {
    /// Create a new test application with fresh in-memory state
    pub fn new() -> Self {
        let repository_store = Arc::new(RepositoryStore::new());
        let folder_store = Arc::new(FolderStore::new());
        let file_store = Arc::new(FileStore::new());
        let invitation_store = Arc::new(InvitationStore::new());
        let application_store = Arc::new(ApplicationStore::new());
        let locks = Arc::new(RepositoryLocks::new());
        let (stats, _) = tokio::sync::broadcast::channel(64);

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

        let token_resolver = Arc::new(StaticTokenResolver::new());

        let app_state = AppState {
            config: Arc::new(AppConfig::default()),
            token_resolver: Arc::clone(&token_resolver) as Arc<_>,
            repository_service,
            folder_service,
            file_service,
        };

        Self {
            router: repohub_api::build_router(app_state),
            token_resolver,
        }
    }

    /// Register a test user and return their bearer token
    pub fn register_user(&self, username: &str) -> (Uuid, String) {
        let user_id = Uuid::new_v4();
        let token = format!("token-{username}-{user_id}");
        self.token_resolver
            .register(token.clone(), user_id, username.to_string());
        (user_id, token)
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = req
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a repository and return its id
    pub async fn create_repository(&self, token: &str, body: Value) -> Uuid {
        let response = self
            .request("POST", "/api/repositories", Some(body), Some(token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Create repository failed: {:?}",
            response.body
        );
        response.data_id()
    }

    /// Create a folder and return its id
    pub async fn create_folder(
        &self,
        token: &str,
        repository_id: Uuid,
        name: &str,
        parent_folder_id: Option<Uuid>,
    ) -> Uuid {
        let response = self
            .request(
                "POST",
                &format!("/api/repositories/{repository_id}/folders"),
                Some(serde_json::json!({
                    "name": name,
                    "parent_folder_id": parent_folder_id,
                })),
                Some(token),
            )
            .await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Create folder failed: {:?}",
            response.body
        );
        response.data_id()
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// Extract `data.id` from the success envelope
    pub fn data_id(&self) -> Uuid {
        self.body
            .get("data")
            .and_then(|d| d.get("id"))
            .and_then(|v| v.as_str())
            .and_then(|s| s.parse().ok())
            .expect("No data.id in response")
    }

    /// The `data` field of the success envelope
    pub fn data(&self) -> &Value {
        self.body.get("data").expect("No data in response")
    }
}

/// Simple public repository creation body
pub fn simple_repo_body(name: &str, privacy: &str) -> Value {
    serde_json::json!({
        "name": name,
        "repo_type": "simple",
        "category": "organizational",
        "privacy": privacy,
    })
}
