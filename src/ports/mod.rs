//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `DraftCache` - Local durable key/value cache holding the draft blob
//! - `IdentityProvider` - The signed-in user a submission belongs to
//! - `RecordStore` - Insert-only access to the backend datastore

mod draft_cache;
mod identity_provider;
mod record_store;

pub use draft_cache::{DraftCache, DraftCacheError};
pub use identity_provider::IdentityProvider;
pub use record_store::{InsertedRecord, RecordStore, RecordStoreError};
