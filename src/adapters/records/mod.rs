//! Record store adapters.
//!
//! - `PostgresRecordStore` - One table per collection, `INSERT ... RETURNING id`
//! - `InMemoryRecordStore` - Process-local rows with failure injection

mod in_memory_record_store;
mod postgres_record_store;

pub use in_memory_record_store::{InMemoryRecordStore, StoredRecord};
pub use postgres_record_store::{connect_pool, PostgresRecordStore};
