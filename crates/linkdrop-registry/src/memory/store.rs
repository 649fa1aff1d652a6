//! In-memory entry registry using dashmap.

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use tracing::debug;

use linkdrop_core::error::AppError;
use linkdrop_core::result::AppResult;
use linkdrop_core::traits::registry::{EntryRegistry, Retention};
use linkdrop_core::types::ShareEntry;
use linkdrop_core::types::share::token_prefix;

/// In-memory registry keyed by token.
///
/// Each shard of the map is guarded by its own lock; `mutate` holds the
/// shard's write lock for the whole transition, which gives per-token
/// exclusion without a registry-wide mutex.
#[derive(Debug, Default)]
pub struct MemoryEntryRegistry {
    entries: DashMap<String, ShareEntry>,
}

impl MemoryEntryRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl EntryRegistry for MemoryEntryRegistry {
    fn insert(&self, entry: ShareEntry) -> AppResult<()> {
        match self.entries.entry(entry.token.clone()) {
            Entry::Occupied(_) => Err(AppError::conflict(format!(
                "Token '{}…' is already registered",
                entry.log_id()
            ))),
            Entry::Vacant(slot) => {
                debug!(token = %entry.log_id(), kind = %entry.kind, "Inserted share entry");
                slot.insert(entry);
                Ok(())
            }
        }
    }

    fn get(&self, token: &str) -> Option<ShareEntry> {
        self.entries.get(token).map(|entry| entry.value().clone())
    }

    fn remove(&self, token: &str) -> Option<ShareEntry> {
        let removed = self.entries.remove(token).map(|(_, entry)| entry);
        if removed.is_some() {
            debug!(token = %token_prefix(token), "Removed share entry");
        }
        removed
    }

    fn mutate(
        &self,
        token: &str,
        transition: &mut dyn FnMut(&mut ShareEntry) -> Retention,
    ) -> Option<ShareEntry> {
        match self.entries.entry(token.to_string()) {
            Entry::Vacant(_) => None,
            Entry::Occupied(mut slot) => match transition(slot.get_mut()) {
                Retention::Keep => Some(slot.get().clone()),
                Retention::Remove => {
                    debug!(token = %token_prefix(token), "Removed share entry during update");
                    Some(slot.remove())
                }
            },
        }
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
