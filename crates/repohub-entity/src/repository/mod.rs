//! Repository (tenant) entity and participation roster.

pub mod model;
pub mod participant;
pub mod role;

pub use model::{NewRepository, RepoCategory, RepoPrivacy, RepoType, Repository};
pub use participant::{Participant, ParticipantStatus};
pub use role::RepoRole;
