//! Durable key-value storage for app state
//!
//! The reading list and recent-search history are each persisted under a
//! single fixed key. Backends are deliberately flat: keys are plain names,
//! not paths.

use crate::error::StorageError;
use async_trait::async_trait;

/// Result type for storage operations
pub type StorageResult<T> = std::result::Result<T, StorageError>;

/// Abstract key-value storage backend
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read the value stored under the given key
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>>;

    /// Write a value under the given key, replacing any previous value
    async fn write(&self, key: &str, data: Vec<u8>) -> StorageResult<()>;

    /// Delete the value stored under the given key
    async fn delete(&self, key: &str) -> StorageResult<()>;

    /// Check whether a key has a stored value
    async fn exists(&self, key: &str) -> StorageResult<bool>;
}

/// Local filesystem backend: one file per key under a root directory
pub struct LocalStorage {
    root: std::path::PathBuf,
}

impl LocalStorage {
    /// Create a backend rooted at the given directory.
    /// The directory is created on first write.
    pub fn new(root: impl Into<std::path::PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a key to a file path, rejecting anything that could escape
    /// the root directory
    fn key_path(&self, key: &str) -> StorageResult<std::path::PathBuf> {
        if key.is_empty()
            || key.contains(['/', '\\'])
            || key == "."
            || key == ".."
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

#[async_trait]
impl StorageBackend for LocalStorage {
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        let path = self.key_path(key)?;
        match tokio::fs::read(&path).await {
            Ok(data) => Ok(data),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    async fn write(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        let path = self.key_path(key)?;
        tokio::fs::create_dir_all(&self.root)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;

        // Write to a temp file in the same directory, then rename, so a
        // crash mid-write never leaves a truncated value behind
        let temp_path = path.with_extension("tmp");
        tokio::fs::write(&temp_path, &data)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))?;
        tokio::fs::rename(&temp_path, &path)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        let path = self.key_path(key)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => Err(StorageError::Backend(e.to_string())),
        }
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        let path = self.key_path(key)?;
        tokio::fs::try_exists(&path)
            .await
            .map_err(|e| StorageError::Backend(e.to_string()))
    }
}

/// In-memory backend (for testing)
#[derive(Default)]
pub struct MemoryStorage {
    data: std::sync::RwLock<std::collections::HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl StorageBackend for MemoryStorage {
    async fn read(&self, key: &str) -> StorageResult<Vec<u8>> {
        self.data
            .read()
            .unwrap()
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn write(&self, key: &str, data: Vec<u8>) -> StorageResult<()> {
        self.data.write().unwrap().insert(key.to_string(), data);
        Ok(())
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        self.data
            .write()
            .unwrap()
            .remove(key)
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;
        Ok(())
    }

    async fn exists(&self, key: &str) -> StorageResult<bool> {
        Ok(self.data.read().unwrap().contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_memory_storage() {
        let storage = MemoryStorage::new();

        storage.write("test.json", b"hello".to_vec()).await.unwrap();

        let data = storage.read("test.json").await.unwrap();
        assert_eq!(data, b"hello");

        assert!(storage.exists("test.json").await.unwrap());
        assert!(!storage.exists("missing.json").await.unwrap());

        storage.delete("test.json").await.unwrap();
        assert!(!storage.exists("test.json").await.unwrap());
    }

    #[tokio::test]
    async fn test_local_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write("state.json", b"[1,2]".to_vec()).await.unwrap();
        assert_eq!(storage.read("state.json").await.unwrap(), b"[1,2]");

        // overwrite replaces the previous value
        storage.write("state.json", b"[3]".to_vec()).await.unwrap();
        assert_eq!(storage.read("state.json").await.unwrap(), b"[3]");
    }

    #[tokio::test]
    async fn test_local_storage_missing_key() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        assert!(matches!(
            storage.read("absent.json").await,
            Err(StorageError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_local_storage_rejects_path_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::new(dir.path());
        for key in ["../escape", "a/b", "a\\b", "", ".."] {
            assert!(matches!(
                storage.write(key, vec![]).await,
                Err(StorageError::InvalidKey(_))
            ));
        }
    }
}
