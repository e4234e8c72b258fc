//! DraftStore - Persists the in-progress answer set to the local cache.
//!
//! The draft lives under one fixed key as a JSON object. Loading is
//! fail-soft: anything unreadable yields no draft, and keys that no longer
//! fit the catalog are dropped. Saving skips an all-default answer set so a
//! blank session never overwrites a meaningful draft.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::domain::foundation::Timestamp;
use crate::domain::questionnaire::{AnswerSet, AnswerValue, Catalog};
use crate::ports::{DraftCache, DraftCacheError};

/// Cache key the draft is stored under unless configured otherwise.
pub const DEFAULT_DRAFT_KEY: &str = "formData";

/// What a save attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftSaveOutcome {
    Saved(Timestamp),
    /// Every answer still held its default; nothing was written.
    SkippedPristine,
}

/// Load/save/clear for the single draft slot.
pub struct DraftStore {
    cache: Arc<dyn DraftCache>,
    catalog: &'static Catalog,
    key: String,
    last_saved_at: RwLock<Option<Timestamp>>,
}

impl DraftStore {
    pub fn new(cache: Arc<dyn DraftCache>, catalog: &'static Catalog, key: impl Into<String>) -> Self {
        Self {
            cache,
            catalog,
            key: key.into(),
            last_saved_at: RwLock::new(None),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reads the last saved draft.
    ///
    /// Returns `None` when nothing is stored, the cache cannot be read, or
    /// the stored blob is not a JSON object. Otherwise every declared field
    /// is present: restored where the stored value fits, default elsewhere.
    pub async fn load(&self) -> Option<AnswerSet> {
        let raw = match self.cache.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No saved draft");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read draft");
                return None;
            }
        };

        let stored = match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(serde_json::Value::Object(map)) => map,
            Ok(_) => {
                warn!(key = %self.key, "Saved draft is not a JSON object, ignoring");
                return None;
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Saved draft is malformed, ignoring");
                return None;
            }
        };

        let mut answers = AnswerSet::new(self.catalog);
        let mut dropped = 0usize;
        for (field_id, value) in stored {
            let restored = serde_json::from_value::<AnswerValue>(value)
                .map_err(|e| e.to_string())
                .and_then(|v| {
                    answers
                        .set(self.catalog, &field_id, v)
                        .map_err(|e| e.to_string())
                });
            if let Err(reason) = restored {
                warn!(field = %field_id, reason = %reason, "Dropping draft entry");
                dropped += 1;
            }
        }

        debug!(key = %self.key, dropped, "Restored draft");
        Some(answers)
    }

    /// Overwrites the stored draft unless every answer is still default.
    pub async fn save(&self, answers: &AnswerSet) -> Result<DraftSaveOutcome, DraftCacheError> {
        if answers.is_pristine(self.catalog) {
            debug!(key = %self.key, "Draft is blank, skipping save");
            return Ok(DraftSaveOutcome::SkippedPristine);
        }

        let json = serde_json::to_string(answers)
            .map_err(|e| DraftCacheError::SerializationFailed(e.to_string()))?;
        self.cache.set(&self.key, &json).await?;

        let now = Timestamp::now();
        *self.last_saved_at.write().await = Some(now);
        debug!(key = %self.key, saved_at = %now.time_of_day(), "Draft saved");
        Ok(DraftSaveOutcome::Saved(now))
    }

    /// Saves and swallows failures, returning the save time if written.
    pub async fn save_best_effort(&self, answers: &AnswerSet) -> Option<Timestamp> {
        match self.save(answers).await {
            Ok(DraftSaveOutcome::Saved(at)) => Some(at),
            Ok(DraftSaveOutcome::SkippedPristine) => None,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Draft save failed");
                None
            }
        }
    }

    /// Removes the stored draft.
    pub async fn clear(&self) -> Result<(), DraftCacheError> {
        self.cache.remove(&self.key).await?;
        *self.last_saved_at.write().await = None;
        Ok(())
    }

    pub async fn last_saved_at(&self) -> Option<Timestamp> {
        *self.last_saved_at.read().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::draft::InMemoryDraftCache;

    fn catalog() -> &'static Catalog {
        Catalog::standard()
    }

    fn store_with(cache: InMemoryDraftCache) -> DraftStore {
        DraftStore::new(Arc::new(cache), catalog(), DEFAULT_DRAFT_KEY)
    }

    fn filled() -> AnswerSet {
        let mut answers = AnswerSet::new(catalog());
        answers
            .set(catalog(), "companyName", AnswerValue::text("Acme"))
            .unwrap();
        answers
            .set(catalog(), "painPoints", AnswerValue::selections(["scaling_challenges"]))
            .unwrap();
        answers
    }

    // ───────────────────────────────────────────────────────────────
    // load
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn load_without_draft_returns_none() {
        let store = store_with(InMemoryDraftCache::new());
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn load_malformed_json_returns_none() {
        let store = store_with(InMemoryDraftCache::with_entry("formData", "{not json"));
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn load_non_object_json_returns_none() {
        let store = store_with(InMemoryDraftCache::with_entry("formData", "[1,2,3]"));
        assert_eq!(store.load().await, None);
    }

    #[tokio::test]
    async fn load_prunes_unknown_and_ill_typed_entries() {
        let raw = r#"{
            "companyName": "Acme",
            "legacyField": "x",
            "industry": "mining",
            "successMetrics": "meetings_booked",
            "dataSources": ["crm_data", "crm_data"]
        }"#;
        let store = store_with(InMemoryDraftCache::with_entry("formData", raw));

        let answers = store.load().await.unwrap();

        assert_eq!(answers.text("companyName"), "Acme");
        assert_eq!(answers.text("industry"), "");
        assert!(answers.selections("successMetrics").is_empty());
        assert_eq!(answers.selections("dataSources"), ["crm_data"]);
        assert!(answers.get("legacyField").is_none());
        assert_eq!(answers.len(), catalog().fields().count());
    }

    // ───────────────────────────────────────────────────────────────
    // save
    // ───────────────────────────────────────────────────────────────

    #[tokio::test]
    async fn save_then_load_round_trips() {
        let cache = InMemoryDraftCache::new();
        let store = store_with(cache.clone());

        let outcome = store.save(&filled()).await.unwrap();
        assert!(matches!(outcome, DraftSaveOutcome::Saved(_)));
        assert_eq!(store.load().await, Some(filled()));
        assert!(store.last_saved_at().await.is_some());
    }

    #[tokio::test]
    async fn save_skips_pristine_answers_and_keeps_previous_draft() {
        let cache = InMemoryDraftCache::new();
        let store = store_with(cache.clone());
        store.save(&filled()).await.unwrap();

        let outcome = store.save(&AnswerSet::new(catalog())).await.unwrap();

        assert_eq!(outcome, DraftSaveOutcome::SkippedPristine);
        assert_eq!(cache.write_count(), 1);
        assert_eq!(store.load().await, Some(filled()));
    }

    #[tokio::test]
    async fn repeated_saves_store_identical_blobs() {
        let cache = InMemoryDraftCache::new();
        let store = store_with(cache.clone());

        store.save(&filled()).await.unwrap();
        let first = cache.raw("formData").await;
        store.save(&filled()).await.unwrap();
        let second = cache.raw("formData").await;

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn save_best_effort_swallows_cache_failures() {
        let cache = InMemoryDraftCache::new();
        cache.fail_writes(true);
        let store = store_with(cache);

        assert_eq!(store.save_best_effort(&filled()).await, None);
        assert!(store.last_saved_at().await.is_none());
    }

    #[tokio::test]
    async fn clear_removes_draft() {
        let cache = InMemoryDraftCache::new();
        let store = store_with(cache.clone());
        store.save(&filled()).await.unwrap();

        store.clear().await.unwrap();

        assert_eq!(store.load().await, None);
        assert!(store.last_saved_at().await.is_none());
    }
}
