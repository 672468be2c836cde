//! # repohub-core
//!
//! Core crate for Hansa RepoHub. Contains configuration schemas, the
//! unified error system, domain events, and the boundary traits consumed
//! by the outer layers.
//!
//! This crate has **no** internal dependencies on other RepoHub crates.

pub mod config;
pub mod error;
pub mod events;
pub mod result;
pub mod traits;

pub use error::AppError;
pub use result::AppResult;
