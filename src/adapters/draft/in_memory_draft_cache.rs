//! In-Memory Draft Cache Adapter
//!
//! Keeps cache entries in memory. Useful for testing and for runs that
//! should not touch the disk.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::ports::{DraftCache, DraftCacheError};

/// In-memory draft cache
#[derive(Debug, Clone, Default)]
pub struct InMemoryDraftCache {
    entries: Arc<RwLock<HashMap<String, String>>>,
    writes: Arc<AtomicUsize>,
    fail_writes: Arc<AtomicBool>,
}

impl InMemoryDraftCache {
    /// Create a new empty in-memory cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache that already holds one entry
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let cache = Self::new();
        if let Ok(mut entries) = cache.entries.try_write() {
            entries.insert(key.into(), value.into());
        }
        cache
    }

    /// Make every subsequent `set` fail (for error path tests)
    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Number of successful `set` calls
    pub fn write_count(&self) -> usize {
        self.writes.load(Ordering::SeqCst)
    }

    /// Raw value stored under a key
    pub async fn raw(&self, key: &str) -> Option<String> {
        self.entries.read().await.get(key).cloned()
    }
}

#[async_trait]
impl DraftCache for InMemoryDraftCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DraftCacheError> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DraftCacheError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DraftCacheError::Unavailable("writes disabled".to_string()));
        }
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        self.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DraftCacheError> {
        self.entries.write().await.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_get_remove() {
        let cache = InMemoryDraftCache::new();
        assert_eq!(cache.get("k").await.unwrap(), None);

        cache.set("k", "v").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap().as_deref(), Some("v"));
        assert_eq!(cache.write_count(), 1);

        cache.remove("k").await.unwrap();
        assert_eq!(cache.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clones_share_entries() {
        let cache = InMemoryDraftCache::new();
        let other = cache.clone();
        cache.set("k", "v").await.unwrap();
        assert_eq!(other.raw("k").await.as_deref(), Some("v"));
    }

    #[tokio::test]
    async fn failing_writes_leave_previous_value() {
        let cache = InMemoryDraftCache::with_entry("k", "old");
        cache.fail_writes(true);

        let err = cache.set("k", "new").await.unwrap_err();
        assert!(matches!(err, DraftCacheError::Unavailable(_)));
        assert_eq!(cache.raw("k").await.as_deref(), Some("old"));
        assert_eq!(cache.write_count(), 0);
    }
}
