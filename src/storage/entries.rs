//! Entry persistence
//!
//! Stores the whole entry collection as one JSON array under a fixed key.
//! Loading never fails: a missing or unreadable blob means "start fresh".

use std::collections::HashSet;

use tracing::{debug, warn};

use crate::error::FintrackResult;
use crate::models::Entry;

use super::store::KeyValueStore;

/// Key the entry collection is stored under
pub const ENTRIES_KEY: &str = "fintrackEntries";

/// Persistence adapter for the entry collection
#[derive(Debug)]
pub struct EntryStore<S: KeyValueStore> {
    store: S,
}

impl<S: KeyValueStore> EntryStore<S> {
    /// Wrap a key-value store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Mutably borrow the underlying store
    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    /// Unwrap the underlying store
    pub fn into_inner(self) -> S {
        self.store
    }

    /// Read the persisted collection
    ///
    /// Absent, unreadable and corrupt blobs all yield an empty collection. A
    /// blob in which two entries share an id counts as corrupt.
    pub fn load(&self) -> Vec<Entry> {
        let raw = match self.store.get(ENTRIES_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = ENTRIES_KEY, "no saved entries, starting fresh");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = ENTRIES_KEY, error = %e, "failed to read saved entries, starting fresh");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Entry>>(&raw) {
            Ok(entries) => {
                let mut seen = HashSet::with_capacity(entries.len());
                if let Some(dup) = entries.iter().find(|e| !seen.insert(e.id)) {
                    warn!(key = ENTRIES_KEY, id = %dup.id, "saved entries repeat an id, starting fresh");
                    return Vec::new();
                }
                debug!(count = entries.len(), "loaded entries");
                entries
            }
            Err(e) => {
                warn!(key = ENTRIES_KEY, error = %e, "saved entries are corrupt, starting fresh");
                Vec::new()
            }
        }
    }

    /// Overwrite the persisted collection
    pub fn save(&mut self, entries: &[Entry]) -> FintrackResult<()> {
        let raw = serde_json::to_string(entries)?;
        self.store.set(ENTRIES_KEY, &raw)?;
        debug!(count = entries.len(), "saved entries");
        Ok(())
    }
}
