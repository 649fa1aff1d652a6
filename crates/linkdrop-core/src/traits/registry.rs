//! Entry registry trait: the authoritative token to share-entry mapping.

use crate::result::AppResult;
use crate::types::ShareEntry;

/// Outcome of a [`EntryRegistry::mutate`] transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Retention {
    /// Write the mutated entry back.
    Keep,
    /// Drop the entry from the registry in the same critical section.
    Remove,
}

/// Concurrent mapping from token to [`ShareEntry`].
///
/// Every read and write of share state goes through this trait. Implementations
/// must make [`mutate`](EntryRegistry::mutate) a single critical section that
/// excludes all other operations on the same token.
pub trait EntryRegistry: Send + Sync + std::fmt::Debug + 'static {
    /// Inserts a new entry.
    ///
    /// Fails with a `Conflict` error if the token is already present.
    fn insert(&self, entry: ShareEntry) -> AppResult<()>;

    /// Returns a snapshot of the entry, if present.
    fn get(&self, token: &str) -> Option<ShareEntry>;

    /// Removes the entry. Removing a missing token is a no-op and returns `None`.
    fn remove(&self, token: &str) -> Option<ShareEntry>;

    /// Atomically applies `transition` to the entry.
    ///
    /// Returns `None` without calling `transition` if the token is absent,
    /// otherwise a snapshot of the entry as the transition left it. When the
    /// transition returns [`Retention::Remove`] the entry is deleted before the
    /// lock is released.
    fn mutate(
        &self,
        token: &str,
        transition: &mut dyn FnMut(&mut ShareEntry) -> Retention,
    ) -> Option<ShareEntry>;

    /// Number of live entries.
    fn len(&self) -> usize;

    /// Whether the registry holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the token is currently registered.
    fn contains(&self, token: &str) -> bool {
        self.get(token).is_some()
    }
}
