//! `slatstock-infra` — storage port, adapters and the inventory repository.
//!
//! Everything here is synchronous: the host model is a single actor on a
//! single device, and every operation completes before returning.

pub mod repository;
pub mod store;

pub use repository::{InventoryRepository, STORAGE_KEY, StoreError};
pub use store::{InMemoryStore, JsonFileStore, KeyValueStore};
