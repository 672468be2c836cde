//! Repository invitations.

pub mod model;

pub use model::{IntakeStatus, Invitation};
