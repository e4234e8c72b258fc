//! In-Memory Record Store Adapter
//!
//! Keeps inserted rows in memory, generating a v4 UUID for each.
//! Failures can be injected per collection or after a number of inserts
//! to exercise partial-write paths.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::submission::RecordRow;
use crate::ports::{InsertedRecord, RecordStore, RecordStoreError};

/// One stored row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRecord {
    pub collection: String,
    pub id: Uuid,
    pub row: RecordRow,
}

#[derive(Debug, Default)]
struct Failures {
    collections: Vec<String>,
    after_inserts: Option<usize>,
}

/// In-memory record store
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecordStore {
    records: Arc<RwLock<Vec<StoredRecord>>>,
    failures: Arc<RwLock<Failures>>,
}

impl InMemoryRecordStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject every insert into `collection`
    pub async fn fail_collection(&self, collection: impl Into<String>) {
        self.failures.write().await.collections.push(collection.into());
    }

    /// Reject every insert once `count` rows have been stored
    pub async fn fail_after(&self, count: usize) {
        self.failures.write().await.after_inserts = Some(count);
    }

    /// Remove all injected failures
    pub async fn clear_failures(&self) {
        *self.failures.write().await = Failures::default();
    }

    /// All stored rows in insertion order
    pub async fn all(&self) -> Vec<StoredRecord> {
        self.records.read().await.clone()
    }

    /// Rows stored in one collection
    pub async fn in_collection(&self, collection: &str) -> Vec<StoredRecord> {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.collection == collection)
            .cloned()
            .collect()
    }

    /// Number of rows stored in one collection
    pub async fn count(&self, collection: &str) -> usize {
        self.records
            .read()
            .await
            .iter()
            .filter(|r| r.collection == collection)
            .count()
    }

    /// Total number of stored rows
    pub async fn total_count(&self) -> usize {
        self.records.read().await.len()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn insert(
        &self,
        collection: &str,
        row: &RecordRow,
    ) -> Result<InsertedRecord, RecordStoreError> {
        let mut records = self.records.write().await;

        {
            let failures = self.failures.read().await;
            if failures.collections.iter().any(|c| c == collection) {
                return Err(RecordStoreError::Rejected {
                    collection: collection.to_string(),
                    reason: "injected failure".to_string(),
                });
            }
            if failures.after_inserts.is_some_and(|n| records.len() >= n) {
                return Err(RecordStoreError::Unavailable("injected failure".to_string()));
            }
        }

        let id = Uuid::new_v4();
        records.push(StoredRecord {
            collection: collection.to_string(),
            id,
            row: row.clone(),
        });
        Ok(InsertedRecord { id })
    }
}
