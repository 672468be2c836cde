//! Boundary traits implemented outside the core.

pub mod token;

pub use token::{AuthIdentity, TokenResolver};
