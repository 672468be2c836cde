//! Credential resolution at the request boundary.

use async_trait::async_trait;
use uuid::Uuid;

use crate::result::AppResult;

/// The identity a credential resolves to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AuthIdentity {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// Display username.
    pub username: String,
}

/// Resolves an opaque bearer token into a user identity.
///
/// Credential issuance and verification live outside the core; the HTTP
/// layer calls this once per request and the resolved identity is the only
/// ambient state the services ever see.
#[async_trait]
pub trait TokenResolver: Send + Sync + 'static {
    /// Resolve `token` into an identity, or fail `Unauthorized`.
    async fn resolve(&self, token: &str) -> AppResult<AuthIdentity>;
}
