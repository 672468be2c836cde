//! # repohub-entity
//!
//! Domain entity models for Hansa RepoHub. Every struct in this crate is
//! a domain value object with no storage coupling. All entities derive
//! `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod application;
pub mod file;
pub mod folder;
pub mod invitation;
pub mod repository;
