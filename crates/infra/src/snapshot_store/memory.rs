use std::collections::HashMap;
use std::sync::RwLock;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{validate_key, SnapshotStore, StoreError};

/// In-memory snapshot store.
///
/// Intended for tests and ephemeral runs; documents die with the process.
#[derive(Debug, Default)]
pub struct MemorySnapshotStore {
    documents: RwLock<HashMap<String, serde_json::Value>>,
}

impl MemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemorySnapshotStore {
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        validate_key(key)?;
        let value = serde_json::to_value(value)?;
        let mut documents = self.documents.write().map_err(|_| StoreError::Poisoned)?;
        documents.insert(key.to_string(), value);
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        validate_key(key)?;
        let documents = self.documents.read().map_err(|_| StoreError::Poisoned)?;
        match documents.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        let mut documents = self.documents.write().map_err(|_| StoreError::Poisoned)?;
        documents.remove(key);
        Ok(())
    }
}
