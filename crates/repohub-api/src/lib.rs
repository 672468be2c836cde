//! # repohub-api
//!
//! HTTP API layer for Hansa RepoHub built on Axum.
//!
//! Provides the REST endpoints, the `AuthUser` extractor (Bearer token
//! resolved through the externally supplied [`repohub_core::traits::TokenResolver`]),
//! request/response DTOs, and the mapping of domain errors to HTTP
//! status codes.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;
pub mod token;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
pub use token::StaticTokenResolver;
