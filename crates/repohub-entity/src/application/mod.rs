//! Repository membership applications.

pub mod model;

pub use model::{Application, ApplicationKind};
