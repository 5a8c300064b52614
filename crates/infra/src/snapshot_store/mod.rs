//! Keyed JSON snapshot storage.
//!
//! The client persists small state records (session, UI preferences) as JSON
//! documents under fixed string keys. Writes overwrite the whole document;
//! the last write wins. There is no merging and no versioning - a crash
//! between a mutation and its persist loses only that mutation, because the
//! previously persisted document stays on disk until overwritten.

use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

mod file;
mod memory;

pub use file::FileSnapshotStore;
pub use memory::MemorySnapshotStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("invalid storage key '{0}': keys are lowercase alphanumeric with dashes")]
    InvalidKey(String),

    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot (de)serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("storage lock poisoned")]
    Poisoned,
}

/// Synchronous keyed document store.
///
/// Implementations must make `load` return `Ok(None)` for an absent key and
/// an error (not a panic) for an unreadable one; callers decide whether an
/// unreadable document is recoverable.
pub trait SnapshotStore {
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError>;

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError>;

    fn remove(&self, key: &str) -> Result<(), StoreError>;
}

/// Storage keys are fixed internal names ("auth-storage", "ui-storage");
/// anything else is a programming error surfaced as [`StoreError::InvalidKey`].
pub(crate) fn validate_key(key: &str) -> Result<(), StoreError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StoreError::InvalidKey(key.to_string()))
    }
}
