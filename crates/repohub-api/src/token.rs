//! Built-in token resolver backed by a static token table.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use repohub_core::config::auth::AuthConfig;
use repohub_core::error::AppError;
use repohub_core::result::AppResult;
use repohub_core::traits::{AuthIdentity, TokenResolver};

/// Resolves bearer tokens against a pre-shared token table.
///
/// Suitable for deployments where the credential collaborator is a
/// shared secret table, and for tests. Tokens can be seeded from
/// configuration or registered at runtime.
#[derive(Debug, Default)]
pub struct StaticTokenResolver {
    tokens: DashMap<String, AuthIdentity>,
}

impl StaticTokenResolver {
    /// Creates an empty resolver.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a resolver seeded from the auth configuration.
    pub fn from_config(config: &AuthConfig) -> Self {
        let resolver = Self::new();
        for entry in &config.tokens {
            resolver.register(
                entry.token.clone(),
                entry.user_id,
                entry.username.clone(),
            );
        }
        resolver
    }

    /// Registers a token mapping to the given identity.
    pub fn register(&self, token: String, user_id: Uuid, username: String) {
        self.tokens.insert(token, AuthIdentity { user_id, username });
    }
}

#[async_trait]
impl TokenResolver for StaticTokenResolver {
    async fn resolve(&self, token: &str) -> AppResult<AuthIdentity> {
        self.tokens
            .get(token)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::unauthorized("Invalid or expired token"))
    }
}
