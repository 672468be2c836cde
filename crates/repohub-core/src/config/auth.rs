//! Credential-resolution configuration.
//!
//! RepoHub does not issue credentials itself; tokens are resolved into a
//! user identity by an external collaborator. The static token table below
//! seeds the built-in resolver for deployments where that collaborator is
//! a shared secret table (and for local development).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Credential-resolution settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Static bearer tokens accepted by the built-in resolver.
    #[serde(default)]
    pub tokens: Vec<StaticToken>,
}

/// A pre-shared bearer token mapped to a user identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaticToken {
    /// The opaque bearer token value.
    pub token: String,
    /// The user this token authenticates as.
    pub user_id: Uuid,
    /// Display username for the user.
    pub username: String,
}
