//! Folder tree entities.

pub mod model;

pub use model::{Folder, NewFolder};
