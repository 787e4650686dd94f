/// File-backed store backend
///
/// Maps each key to one JSON document at `<root>/<key>.json`. Writes go
/// straight to disk and are synced before `set` returns, so a value observed
/// as written survives process restarts.
///
/// Keys must be file-name safe: ASCII alphanumerics, `_`, `-`, and `.` only.
/// Anything else (in particular path separators) is rejected as
/// [`StoreError::InvalidKey`] instead of being resolved against the
/// filesystem.
///
/// # Example
///
/// ```no_run
/// use taskwise_core::store::{FileStore, Store};
///
/// # async fn example() -> Result<(), taskwise_core::store::StoreError> {
/// let store = FileStore::open("/var/lib/taskwise").await?;
/// store.set("taskwise_users", "{}").await?;
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use super::{Store, StoreError};

/// Durable file-per-key store
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Opens a store rooted at a directory, creating it if needed
    pub async fn open(root: impl AsRef<Path>) -> Result<Self, StoreError> {
        let root = root.as_ref().to_path_buf();
        fs::create_dir_all(&root).await?;

        tracing::debug!(root = %root.display(), "Opened file store");
        Ok(FileStore { root })
    }

    /// Resolves a key to its document path, rejecting unsafe keys
    fn key_path(&self, key: &str) -> Result<PathBuf, StoreError> {
        let safe = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
            && !key.starts_with('.');

        if !safe {
            return Err(StoreError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait]
impl Store for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.key_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StoreError::Io(err)),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.key_path(key)?;

        let mut file = fs::File::create(&path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let path = self.key_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StoreError::Io(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn open_temp_store() -> (tempfile::TempDir, FileStore) {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store = FileStore::open(dir.path()).await.expect("Failed to open store");
        (dir, store)
    }

    #[tokio::test]
    async fn test_get_of_unwritten_key_is_none() {
        let (_dir, store) = open_temp_store().await;
        assert!(store.get("taskwise_users").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_then_get_round_trips() {
        let (_dir, store) = open_temp_store().await;
        store.set("taskwise_users", r#"{"a":1}"#).await.unwrap();

        let value = store.get("taskwise_users").await.unwrap();
        assert_eq!(value.as_deref(), Some(r#"{"a":1}"#));
    }

    #[tokio::test]
    async fn test_values_survive_reopening() {
        let (dir, store) = open_temp_store().await;
        store.set("taskwise_users", "persisted").await.unwrap();
        drop(store);

        let reopened = FileStore::open(dir.path()).await.unwrap();
        let value = reopened.get("taskwise_users").await.unwrap();
        assert_eq!(value.as_deref(), Some("persisted"));
    }

    #[tokio::test]
    async fn test_remove_is_idempotent() {
        let (_dir, store) = open_temp_store().await;
        store.set("key", "value").await.unwrap();

        store.remove("key").await.unwrap();
        assert!(store.get("key").await.unwrap().is_none());

        store.remove("key").await.unwrap();
    }

    #[tokio::test]
    async fn test_path_traversal_keys_are_rejected() {
        let (_dir, store) = open_temp_store().await;

        let result = store.get("../etc/passwd").await;
        assert!(matches!(result, Err(StoreError::InvalidKey(_))));

        let result = store.set("a/b", "value").await;
        assert!(matches!(result, Err(StoreError::InvalidKey(_))));

        let result = store.remove("").await;
        assert!(matches!(result, Err(StoreError::InvalidKey(_))));
    }

    #[tokio::test]
    async fn test_set_replaces_previous_value() {
        let (_dir, store) = open_temp_store().await;
        store.set("key", "first").await.unwrap();
        store.set("key", "second").await.unwrap();

        assert_eq!(store.get("key").await.unwrap().as_deref(), Some("second"));
    }
}
