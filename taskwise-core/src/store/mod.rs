/// Key-value persistence abstraction
///
/// This module defines the store contract every backend must implement and
/// the backends shipped with Taskwise. All durable state (the account
/// directory, the session pointer, and per-user task lists) lives behind
/// this seam.
///
/// # Store Contract
///
/// All backends must:
/// 1. Treat values as opaque strings (serialization happens in the services)
/// 2. Return `None` from `get` for keys that were never written
/// 3. Make `set` a write-through upsert: once it returns Ok, the value is
///    visible to every later `get`
/// 4. Make `remove` idempotent: removing an absent key is Ok
///
/// # Backends
///
/// - `file`: One JSON document per key under a root directory
/// - `memory`: Mutex-guarded map for tests and ephemeral sessions
///
/// # Example
///
/// ```
/// use taskwise_core::store::{MemoryStore, Store};
///
/// # async fn example() -> Result<(), taskwise_core::store::StoreError> {
/// let store = MemoryStore::new();
/// store.set("taskwise_users", "{}").await?;
///
/// assert_eq!(store.get("taskwise_users").await?.as_deref(), Some("{}"));
/// assert_eq!(store.get("never_written").await?, None);
/// # Ok(())
/// # }
/// ```

use async_trait::async_trait;

pub mod file;
pub mod keys;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

/// Store error types
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Underlying storage I/O failed
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// Key cannot be mapped to a storage location
    #[error("Invalid store key: {0}")]
    InvalidKey(String),
}

/// String-keyed persistence contract
///
/// Keys are flat strings; the scheme in [`keys`] is a convention, not
/// something the store enforces. Values are opaque serialized documents.
#[async_trait]
pub trait Store: Send + Sync {
    /// Reads the value stored under a key
    ///
    /// Returns `None` for keys that were never written. Absence is not an
    /// error.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Writes a value under a key, replacing any previous value
    ///
    /// The write is durable by the time this returns Ok.
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Deletes the value stored under a key
    ///
    /// Removing a key that does not exist is Ok.
    async fn remove(&self, key: &str) -> Result<(), StoreError>;
}
