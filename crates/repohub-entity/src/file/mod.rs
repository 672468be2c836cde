//! File record entities.

pub mod model;

pub use model::{FileRecord, Importance, NewFileRecord, UpdateFileRecord};
