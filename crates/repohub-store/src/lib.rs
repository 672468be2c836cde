//! # repohub-store
//!
//! Process-local entity stores for Hansa RepoHub, plus the per-repository
//! lock registry that serializes structural tree mutations.
//!
//! Persistence engine internals are out of scope for the core; the stores
//! here keep the shape of database-backed repositories (find/insert/update/
//! delete plus entity-specific bulk queries) so a real storage layer can
//! replace them without touching the service layer.

pub mod lock;
pub mod stores;

pub use lock::RepositoryLocks;
pub use stores::application::ApplicationStore;
pub use stores::file::FileStore;
pub use stores::folder::FolderStore;
pub use stores::invitation::InvitationStore;
pub use stores::repository::RepositoryStore;
