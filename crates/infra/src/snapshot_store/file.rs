use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{validate_key, SnapshotStore, StoreError};

/// File-backed snapshot store: one `<key>.json` document per key under a
/// root directory.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    root: PathBuf,
}

impl FileSnapshotStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        validate_key(key)?;
        let bytes = serde_json::to_vec_pretty(value)?;
        fs::write(self.path_for(key), bytes)?;
        Ok(())
    }

    fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        validate_key(key)?;
        let bytes = match fs::read(self.path_for(key)) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        Ok(Some(serde_json::from_slice(&bytes)?))
    }

    fn remove(&self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Doc {
        value: u32,
        label: String,
    }

    #[test]
    fn save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::open(dir.path()).unwrap();

        let doc = Doc {
            value: 7,
            label: "seven".to_string(),
        };
        store.save("ui-storage", &doc).unwrap();

        let loaded: Option<Doc> = store.load("ui-storage").unwrap();
        assert_eq!(loaded, Some(doc));
    }

    #[test]
    fn absent_key_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::open(dir.path()).unwrap();
        let loaded: Option<Doc> = store.load("auth-storage").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn corrupt_document_is_an_error_not_a_panic() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::open(dir.path()).unwrap();
        fs::write(dir.path().join("auth-storage.json"), b"{not json").unwrap();

        let result: Result<Option<Doc>, _> = store.load("auth-storage");
        assert!(result.is_err());
    }

    #[test]
    fn save_overwrites_last_write_wins() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::open(dir.path()).unwrap();

        for value in 0..3u32 {
            let doc = Doc {
                value,
                label: value.to_string(),
            };
            store.save("ui-storage", &doc).unwrap();
        }

        let loaded: Option<Doc> = store.load("ui-storage").unwrap();
        assert_eq!(loaded.unwrap().value, 2);
    }

    #[test]
    fn remove_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::open(dir.path()).unwrap();

        store.save("ui-storage", &1u32).unwrap();
        store.remove("ui-storage").unwrap();
        store.remove("ui-storage").unwrap();

        let loaded: Option<u32> = store.load("ui-storage").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn traversal_keys_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileSnapshotStore::open(dir.path()).unwrap();
        assert!(store.save("../outside", &1u32).is_err());
    }
}
