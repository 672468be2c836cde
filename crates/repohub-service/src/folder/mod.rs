//! Folder tree manager.

pub mod service;

pub use service::{FolderContents, FolderService};
