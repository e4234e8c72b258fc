//! Draft Cache Port - Interface for the local durable key/value cache.
//!
//! The wizard keeps its in-progress answers under a single fixed key as a
//! serialized blob. Writes are full overwrites with last-write-wins
//! semantics; no coordination between processes sharing the cache.

use async_trait::async_trait;

/// Errors that can occur during draft cache operations
#[derive(Debug, thiserror::Error)]
pub enum DraftCacheError {
    #[error("Invalid cache key: {0}")]
    InvalidKey(String),

    #[error("Failed to serialize draft: {0}")]
    SerializationFailed(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Cache unavailable: {0}")]
    Unavailable(String),
}

/// Port for the local durable cache holding the draft blob
#[async_trait]
pub trait DraftCache: Send + Sync {
    /// Read the value stored under `key`.
    ///
    /// # Returns
    /// `Ok(None)` if nothing was ever stored.
    async fn get(&self, key: &str) -> Result<Option<String>, DraftCacheError>;

    /// Overwrite the value stored under `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), DraftCacheError>;

    /// Remove the value stored under `key`. Removing a missing key succeeds.
    async fn remove(&self, key: &str) -> Result<(), DraftCacheError>;
}
