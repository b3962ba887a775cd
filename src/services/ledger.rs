//! Ledger service
//!
//! Owns the in-memory entry collection and keeps it in step with the
//! persisted copy. Every successful mutation is written through before it
//! becomes visible; lookups and listings never touch storage.

use tracing::{debug, info};

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Amount, Entry, EntryFilter, EntryId, EntryKind};
use crate::reports::Summary;
use crate::storage::{EntryStore, KeyValueStore};
use crate::validation::{validate_description, validate_entry};

/// The entry repository
///
/// Entries are kept newest first. The collection is loaded once when the
/// ledger is opened.
pub struct Ledger<S: KeyValueStore> {
    entries: Vec<Entry>,
    store: EntryStore<S>,
}

impl<S: KeyValueStore> Ledger<S> {
    /// Open a ledger, seeding it from whatever the store holds
    pub fn open(store: S) -> Self {
        let store = EntryStore::new(store);
        let entries = store.load();
        info!(count = entries.len(), "ledger opened");
        Self { entries, store }
    }

    /// Borrow the backing store
    pub fn store(&self) -> &S {
        self.store.store()
    }

    /// Close the ledger and hand back the store
    pub fn into_store(self) -> S {
        self.store.into_inner()
    }

    /// Record a new entry at the front of the collection
    pub fn add(
        &mut self,
        kind: EntryKind,
        description: &str,
        amount: Amount,
    ) -> FintrackResult<Entry> {
        let description = validate_description(description)?;
        let entry = Entry::new(kind, description, amount);

        let mut next = Vec::with_capacity(self.entries.len() + 1);
        next.push(entry.clone());
        next.extend(self.entries.iter().cloned());
        self.commit(next)?;

        info!(id = %entry.id, kind = %entry.kind, amount = entry.amount.value(), "entry added");
        Ok(entry)
    }

    /// Validate raw form input and record a new entry
    pub fn add_raw(
        &mut self,
        kind: EntryKind,
        description: &str,
        amount_text: &str,
    ) -> FintrackResult<Entry> {
        let input = validate_entry(kind, description, amount_text)?;
        self.add(input.kind, &input.description, input.amount)
    }

    /// Replace the kind, description and amount of an existing entry
    pub fn update(
        &mut self,
        id: EntryId,
        kind: EntryKind,
        description: &str,
        amount: Amount,
    ) -> FintrackResult<Entry> {
        let description = validate_description(description)?;
        let index = self
            .position(id)
            .ok_or_else(|| FintrackError::entry_not_found(id.to_string()))?;

        let mut next = self.entries.clone();
        next[index].replace(kind, description, amount);
        let updated = next[index].clone();
        self.commit(next)?;

        info!(id = %updated.id, kind = %updated.kind, amount = updated.amount.value(), "entry updated");
        Ok(updated)
    }

    /// Validate raw form input and update an existing entry
    pub fn update_raw(
        &mut self,
        id: EntryId,
        kind: EntryKind,
        description: &str,
        amount_text: &str,
    ) -> FintrackResult<Entry> {
        let input = validate_entry(kind, description, amount_text)?;
        self.update(id, input.kind, &input.description, input.amount)
    }

    /// Delete an entry, returning it as confirmation
    ///
    /// Callers tracking a "currently editing" id must reset it themselves
    /// when it matches.
    pub fn remove(&mut self, id: EntryId) -> FintrackResult<Entry> {
        let index = self
            .position(id)
            .ok_or_else(|| FintrackError::entry_not_found(id.to_string()))?;

        let mut next = self.entries.clone();
        let removed = next.remove(index);
        self.commit(next)?;

        info!(id = %removed.id, "entry removed");
        Ok(removed)
    }

    /// Delete every entry, returning how many were removed
    ///
    /// An already-empty ledger reports `EmptyCollection` and writes nothing.
    pub fn clear(&mut self) -> FintrackResult<usize> {
        if self.entries.is_empty() {
            return Err(FintrackError::EmptyCollection);
        }

        let count = self.entries.len();
        self.commit(Vec::new())?;

        info!(count, "ledger cleared");
        Ok(count)
    }

    /// Entries in collection order, restricted by kind
    pub fn list(&self, filter: EntryFilter) -> Vec<Entry> {
        self.entries
            .iter()
            .filter(|e| filter.matches(e))
            .cloned()
            .collect()
    }

    /// Look up an entry by id
    pub fn find_by_id(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Resolve user-supplied id text to an existing entry id
    ///
    /// Accepts a full UUID (with or without the `ent-` prefix) or a unique
    /// short prefix such as the displayed `ent-1a2b3c4d`.
    pub fn resolve(&self, identifier: &str) -> FintrackResult<EntryId> {
        if let Ok(id) = identifier.parse::<EntryId>() {
            if self.find_by_id(id).is_some() {
                return Ok(id);
            }
            return Err(FintrackError::entry_not_found(identifier));
        }

        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id.matches_prefix(identifier));
        match (matches.next(), matches.next()) {
            (Some(entry), None) => Ok(entry.id),
            (Some(_), Some(_)) => {
                debug!(identifier, "ambiguous entry id prefix");
                Err(FintrackError::entry_not_found(identifier))
            }
            _ => Err(FintrackError::entry_not_found(identifier)),
        }
    }

    /// Current aggregate snapshot
    pub fn summary(&self) -> Summary {
        Summary::from_entries(&self.entries)
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    /// Persist `next`, then make it the live collection
    fn commit(&mut self, next: Vec<Entry>) -> FintrackResult<()> {
        self.store.save(&next)?;
        self.entries = next;
        Ok(())
    }
}
