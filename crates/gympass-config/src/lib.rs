//! # gympass-config
//!
//! Layered configuration loading for gympass using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`GYMPASS_*` prefix, `__` as separator)
//! 2. Project-level `.gympass/config.toml`
//! 3. User-level `~/.config/gympass/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `GYMPASS_DATABASE__PATH` -> `database.path`,
//! `GYMPASS_CHECK_IN__MAX_DISTANCE_KM` -> `check_in.max_distance_km`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use gympass_config::GymPassConfig;
//!
//! let config = GymPassConfig::load_with_dotenv().expect("config");
//! println!("database: {}", config.database.path);
//! ```

mod check_in;
mod database;
mod error;
mod gyms;

pub use check_in::CheckInConfig;
pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use gyms::GymsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local directory holding the config file and the default database.
pub const PROJECT_DIR: &str = ".gympass";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GymPassConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub check_in: CheckInConfig,
    #[serde(default)]
    pub gyms: GymsConfig,
}

impl GymPassConfig {
    /// Load and validate configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed or a value is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("GYMPASS_").split("__"))
    }

    /// Check every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "database.path".into(),
                reason: "must not be empty".into(),
            });
        }
        self.check_in.validate()?;
        self.gyms.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("gympass").join("config.toml"))
    }
}
