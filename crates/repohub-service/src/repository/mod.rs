//! Repository (tenant) lifecycle and participation management.

pub mod participation;
pub mod service;

pub use service::RepositoryService;
