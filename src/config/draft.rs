//! Draft cache configuration

use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use super::error::ValidationError;

/// Where and how often the in-progress answers are saved
#[derive(Debug, Clone, Deserialize)]
pub struct DraftConfig {
    /// Directory holding one JSON file per draft key
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Cache key for the draft
    #[serde(default = "default_key")]
    pub key: String,

    /// Seconds between background saves
    #[serde(default = "default_autosave_interval")]
    pub autosave_interval_secs: u64,
}

impl DraftConfig {
    /// Get autosave interval as Duration
    pub fn autosave_interval(&self) -> Duration {
        Duration::from_secs(self.autosave_interval_secs)
    }

    /// Validate draft configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.key.is_empty()
            || !self
                .key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(ValidationError::InvalidDraftKey);
        }
        if !(1..=3600).contains(&self.autosave_interval_secs) {
            return Err(ValidationError::InvalidAutosaveInterval(
                self.autosave_interval_secs,
            ));
        }
        Ok(())
    }
}

impl Default for DraftConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            key: default_key(),
            autosave_interval_secs: default_autosave_interval(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("./data/drafts")
}

fn default_key() -> String {
    "formData".to_string()
}

fn default_autosave_interval() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_config_defaults() {
        let config = DraftConfig::default();
        assert_eq!(config.directory, PathBuf::from("./data/drafts"));
        assert_eq!(config.key, "formData");
        assert_eq!(config.autosave_interval(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_interval_bounds() {
        for secs in [0, 3601] {
            let config = DraftConfig {
                autosave_interval_secs: secs,
                ..Default::default()
            };
            assert_eq!(
                config.validate(),
                Err(ValidationError::InvalidAutosaveInterval(secs))
            );
        }
        for secs in [1, 3600] {
            let config = DraftConfig {
                autosave_interval_secs: secs,
                ..Default::default()
            };
            assert!(config.validate().is_ok());
        }
    }

    #[test]
    fn test_validation_rejects_path_like_keys() {
        for key in ["", "../formData", "form data", "a/b"] {
            let config = DraftConfig {
                key: key.to_string(),
                ..Default::default()
            };
            assert_eq!(config.validate(), Err(ValidationError::InvalidDraftKey), "{key}");
        }
    }
}
