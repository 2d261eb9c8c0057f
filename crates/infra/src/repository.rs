//! Inventory repository: the boundary operations exposed to the UI layer.
//!
//! Every mutation is a full-snapshot read-modify-write: load the whole list,
//! change it in memory, write the whole list back. The host model is a
//! single actor, so there is no locking and no conflict resolution.

use anyhow::Context;
use chrono::Utc;
use thiserror::Error;

use slatstock_core::{DomainError, EntryId};
use slatstock_inventory::{InventoryEntry, NewEntry};

use crate::store::KeyValueStore;

/// Fixed key the inventory blob lives under. Unchanged from the original
/// device format so existing data keeps working.
pub const STORAGE_KEY: &str = "factory-slat-inventory";

/// Failure of a mutating repository operation.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Creation-time validation rejection; no partial record is created.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Storage write/serialize failure; propagated to the caller, no retries.
    #[error(transparent)]
    Backend(#[from] anyhow::Error),
}

/// Snapshot-oriented repository over a [`KeyValueStore`].
#[derive(Debug)]
pub struct InventoryRepository<S> {
    store: S,
}

impl<S> InventoryRepository<S>
where
    S: KeyValueStore,
{
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate, assign id + timestamp, append to the snapshot, persist.
    pub fn create(&self, new_entry: NewEntry) -> Result<InventoryEntry, StoreError> {
        new_entry.validate()?;

        let entry = new_entry.into_entry(EntryId::new(), Utc::now());

        let mut entries = self.list();
        entries.push(entry.clone());
        self.save_snapshot(&entries)?;

        tracing::debug!(entry_id = %entry.id, "recorded inventory entry");
        Ok(entry)
    }

    /// The full persisted list.
    ///
    /// A missing blob is an empty inventory; a corrupt blob or a backend
    /// read failure is recovered as empty and logged, never raised.
    pub fn list(&self) -> Vec<InventoryEntry> {
        let raw = match self.store.get(STORAGE_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!("failed to read inventory blob, treating as empty: {err:?}");
                return Vec::new();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(err) => {
                tracing::warn!("corrupt inventory blob, treating as empty: {err}");
                Vec::new()
            }
        }
    }

    /// Remove the entry with the given id, preserving the order of the rest.
    ///
    /// Deleting a nonexistent id is a no-op, not an error.
    pub fn delete(&self, id: EntryId) -> Result<(), StoreError> {
        let mut entries = self.list();
        entries.retain(|e| e.id != id);
        self.save_snapshot(&entries)
    }

    fn save_snapshot(&self, entries: &[InventoryEntry]) -> Result<(), StoreError> {
        let blob =
            serde_json::to_string(entries).context("failed to serialize inventory snapshot")?;
        self.store
            .put(STORAGE_KEY, blob)
            .context("failed to persist inventory snapshot")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;
    use slatstock_inventory::{Category, Color, PositionType, ProductionStep};

    fn draft(quantity: u32) -> NewEntry {
        NewEntry {
            category: Category::Clothes,
            color: Color::Wh,
            length_mm: 961,
            position: PositionType::Front,
            step: ProductionStep::Hotstamping,
            quantity,
            pallet_id: Some("P-001".to_string()),
            photo_url: None,
        }
    }

    fn repo() -> InventoryRepository<InMemoryStore> {
        InventoryRepository::new(InMemoryStore::new())
    }

    #[test]
    fn create_then_list_round_trips() {
        let repo = repo();
        let before = Utc::now();

        let created = repo.create(draft(150)).unwrap();

        let listed = repo.list();
        assert_eq!(listed, vec![created.clone()]);
        assert_eq!(created.quantity, 150);
        assert_eq!(created.pallet_id.as_deref(), Some("P-001"));
        assert!(created.timestamp >= before);
    }

    #[test]
    fn validation_failure_creates_no_partial_record() {
        let repo = repo();
        let err = repo.create(draft(0)).unwrap_err();
        assert!(matches!(err, StoreError::Domain(DomainError::Validation(_))));
        assert!(repo.list().is_empty());
    }

    #[test]
    fn created_entries_get_unique_ids() {
        let repo = repo();
        let a = repo.create(draft(1)).unwrap();
        let b = repo.create(draft(2)).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn delete_removes_exactly_one_and_preserves_order() {
        let repo = repo();
        let a = repo.create(draft(1)).unwrap();
        let b = repo.create(draft(2)).unwrap();
        let c = repo.create(draft(3)).unwrap();

        repo.delete(b.id).unwrap();
        assert_eq!(repo.list(), vec![a, c]);
    }

    #[test]
    fn delete_of_nonexistent_id_is_a_noop() {
        let repo = repo();
        let a = repo.create(draft(1)).unwrap();

        repo.delete(EntryId::new()).unwrap();
        assert_eq!(repo.list(), vec![a]);
    }

    #[test]
    fn missing_blob_lists_as_empty() {
        assert!(repo().list().is_empty());
    }

    #[test]
    fn corrupt_blob_lists_as_empty() {
        let store = InMemoryStore::new();
        store
            .put(STORAGE_KEY, "{definitely not json".to_string())
            .unwrap();

        let repo = InventoryRepository::new(store);
        assert!(repo.list().is_empty());
    }

    #[test]
    fn backend_write_failure_propagates() {
        struct ReadOnlyStore;

        impl KeyValueStore for ReadOnlyStore {
            fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
                Ok(None)
            }

            fn put(&self, _key: &str, _value: String) -> anyhow::Result<()> {
                Err(anyhow::anyhow!("disk full"))
            }
        }

        let repo = InventoryRepository::new(ReadOnlyStore);
        let err = repo.create(draft(5)).unwrap_err();
        assert!(matches!(err, StoreError::Backend(_)));
    }

    #[test]
    fn backend_read_failure_lists_as_empty() {
        struct BrokenReadStore;

        impl KeyValueStore for BrokenReadStore {
            fn get(&self, _key: &str) -> anyhow::Result<Option<String>> {
                Err(anyhow::anyhow!("io error"))
            }

            fn put(&self, _key: &str, _value: String) -> anyhow::Result<()> {
                Ok(())
            }
        }

        let repo = InventoryRepository::new(BrokenReadStore);
        assert!(repo.list().is_empty());
    }
}
