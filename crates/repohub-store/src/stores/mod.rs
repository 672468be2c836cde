//! Entity stores, one per aggregate.

pub mod application;
pub mod file;
pub mod folder;
pub mod invitation;
pub mod repository;
