//! File-based Draft Cache Adapter
//!
//! Stores each cache key as one JSON file under a base directory.
//! Writes go to a temporary sibling first and are renamed into place so a
//! crash mid-write never leaves a truncated draft behind.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::ports::{DraftCache, DraftCacheError};

/// File-based draft cache
#[derive(Debug, Clone)]
pub struct FileDraftCache {
    base_path: PathBuf,
}

impl FileDraftCache {
    /// Create a new file cache with a base directory
    ///
    /// # Example
    /// ```ignore
    /// let cache = FileDraftCache::new("./data/drafts");
    /// ```
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        Self {
            base_path: base_path.as_ref().to_path_buf(),
        }
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Get the file path for a key, rejecting anything that could escape the base directory
    fn key_path(&self, key: &str) -> Result<PathBuf, DraftCacheError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(DraftCacheError::InvalidKey(key.to_string()));
        }
        Ok(self.base_path.join(format!("{key}.json")))
    }

    async fn ensure_dir(&self) -> Result<(), DraftCacheError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| DraftCacheError::IoError(e.to_string()))
    }
}

#[async_trait]
impl DraftCache for FileDraftCache {
    async fn get(&self, key: &str) -> Result<Option<String>, DraftCacheError> {
        let path = self.key_path(key)?;

        match fs::read_to_string(&path).await {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DraftCacheError::IoError(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), DraftCacheError> {
        let path = self.key_path(key)?;
        self.ensure_dir().await?;

        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, value)
            .await
            .map_err(|e| DraftCacheError::IoError(e.to_string()))?;
        fs::rename(&tmp_path, &path)
            .await
            .map_err(|e| DraftCacheError::IoError(e.to_string()))?;

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), DraftCacheError> {
        let path = self.key_path(key)?;

        match fs::remove_file(&path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(DraftCacheError::IoError(e.to_string())),
        }
    }
}
