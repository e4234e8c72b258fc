//! Application configuration module
//!
//! Type-safe configuration loaded from environment variables with the
//! `config` and `dotenvy` crates. Variables use the `SDR_INTAKE` prefix and
//! nested values are separated by double underscores.
//!
//! # Example
//!
//! ```no_run
//! use sdr_intake::config::IntakeConfig;
//!
//! let config = IntakeConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Drafts stored under {}", config.draft.directory.display());
//! ```

mod database;
mod draft;
mod error;
mod identity;
mod telemetry;

pub use database::DatabaseConfig;
pub use draft::DraftConfig;
pub use error::{ConfigError, ValidationError};
pub use identity::IdentityConfig;
pub use telemetry::TelemetryConfig;

use serde::Deserialize;

/// Root configuration
///
/// Every section has defaults, so an empty environment yields a usable
/// configuration: file drafts, in-memory records, signed out.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeConfig {
    /// Draft cache location and autosave cadence
    #[serde(default)]
    pub draft: DraftConfig,

    /// PostgreSQL connection; records stay in memory when absent
    #[serde(default)]
    pub database: Option<DatabaseConfig>,

    /// Signed-in user
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Log filter and format
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl IntakeConfig {
    /// Load configuration from environment variables
    ///
    /// # Environment Variable Format
    ///
    /// - `SDR_INTAKE__DRAFT__DIRECTORY=/var/lib/sdr` -> `draft.directory`
    /// - `SDR_INTAKE__DATABASE__URL=...` -> `database.url`
    /// - `SDR_INTAKE__IDENTITY__USER_ID=...` -> `identity.user_id`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("SDR_INTAKE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.draft.validate()?;
        if let Some(database) = &self.database {
            database.validate()?;
        }
        self.identity.validate()?;
        self.telemetry.validate()?;
        Ok(())
    }
}
