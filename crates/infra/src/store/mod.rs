//! Narrow key-value storage port.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

mod json_file;

pub use json_file::JsonFileStore;

/// Keyed blob storage abstraction.
///
/// The repository keeps the entire inventory as one value under one key;
/// adapters only need whole-value get/put.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>>;
    fn put(&self, key: &str, value: String) -> anyhow::Result<()>;
}

impl<S> KeyValueStore for Arc<S>
where
    S: KeyValueStore + ?Sized,
{
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        (**self).get(key)
    }

    fn put(&self, key: &str, value: String) -> anyhow::Result<()> {
        (**self).put(key, value)
    }
}

/// In-memory store for tests/dev.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    inner: RwLock<HashMap<String, String>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &str) -> anyhow::Result<Option<String>> {
        let map = self
            .inner
            .read()
            .map_err(|_| anyhow::anyhow!("in-memory store lock poisoned"))?;
        Ok(map.get(key).cloned())
    }

    fn put(&self, key: &str, value: String) -> anyhow::Result<()> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| anyhow::anyhow!("in-memory store lock poisoned"))?;
        map.insert(key.to_string(), value);
        Ok(())
    }
}
