//! Draft cache adapters.
//!
//! - `FileDraftCache` - One JSON file per key, atomic replace on write
//! - `InMemoryDraftCache` - Process-local map for tests and ephemeral runs

mod file_draft_cache;
mod in_memory_draft_cache;

pub use file_draft_cache::FileDraftCache;
pub use in_memory_draft_cache::InMemoryDraftCache;
