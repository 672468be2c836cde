//! Per-repository mutual exclusion for structural mutations.

use std::sync::Arc;

use dashmap::DashMap;
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

/// Registry of one async mutex per repository.
///
/// Structural tree mutations (create, rename, move, cascading delete) take
/// the owning repository's mutex for the whole read-modify-write so two
/// concurrent writers can never publish an inconsistent `path`/`level`
/// snapshot. Reads never lock. The same lock also keeps a cascading delete
/// from interleaving with a move into the dying subtree.
#[derive(Debug, Default)]
pub struct RepositoryLocks {
    locks: DashMap<Uuid, Arc<Mutex<()>>>,
}

impl RepositoryLocks {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the mutation lock for `repository_id`, creating it on
    /// first use. The guard is owned so it can cross await points.
    pub async fn acquire(&self, repository_id: Uuid) -> OwnedMutexGuard<()> {
        let lock = self
            .locks
            .entry(repository_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        lock.lock_owned().await
    }

    /// Drop the lock entry for a deleted repository.
    ///
    /// Waiters already parked on the removed entry keep the old mutex, so
    /// a waiter and a fresh acquirer may briefly hold different mutexes
    /// for the same id. Mutators therefore re-verify that the repository
    /// still exists after acquiring; once the tenant is gone, a stale
    /// guard can no longer publish anything.
    pub fn release(&self, repository_id: Uuid) {
        self.locks.remove(&repository_id);
    }
}
