//! # repohub-service
//!
//! Domain services for Hansa RepoHub: the access control evaluator, the
//! folder tree manager, the file record service, and the repository /
//! participation service. Every public operation takes a [`context::RequestContext`]
//! identifying the acting user and is gated through [`access`] before any
//! mutation.

pub mod access;
pub mod context;
pub mod file;
pub mod folder;
pub mod repository;
