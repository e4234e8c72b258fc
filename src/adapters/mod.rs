//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `draft` - Local durable cache for the in-progress draft (file, in-memory)
//! - `identity` - Identity providers (static from config, mock)
//! - `records` - Submission record stores (PostgreSQL, in-memory)

pub mod draft;
pub mod identity;
pub mod records;

pub use draft::{FileDraftCache, InMemoryDraftCache};
pub use identity::{MockIdentityProvider, StaticIdentityProvider};
pub use records::{connect_pool, InMemoryRecordStore, PostgresRecordStore, StoredRecord};
