//! Record Store Port - Insert-only access to the backend datastore.
//!
//! Every insert targets a named collection and receives a column -> value
//! row. Collection and column names always come from the static catalog.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::submission::RecordRow;

/// Errors that can occur during record store operations
#[derive(Debug, thiserror::Error)]
pub enum RecordStoreError {
    #[error("Unknown collection: {0}")]
    UnknownCollection(String),

    #[error("Insert into '{collection}' rejected: {reason}")]
    Rejected { collection: String, reason: String },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

/// The inserted record as reported back by the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InsertedRecord {
    /// Identifier generated by the store.
    pub id: Uuid,
}

/// Port for writing submission records
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert one row and return its generated identifier.
    async fn insert(
        &self,
        collection: &str,
        row: &RecordRow,
    ) -> Result<InsertedRecord, RecordStoreError>;

    /// Insert several rows into one collection.
    ///
    /// Stops at the first failing row; rows already inserted stay.
    async fn insert_many(
        &self,
        collection: &str,
        rows: &[RecordRow],
    ) -> Result<Vec<InsertedRecord>, RecordStoreError> {
        let mut inserted = Vec::with_capacity(rows.len());
        for row in rows {
            inserted.push(self.insert(collection, row).await?);
        }
        Ok(inserted)
    }
}
