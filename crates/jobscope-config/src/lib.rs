//! # jobscope-config
//!
//! Layered configuration loading for jobscope using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`JOBSCOPE_*` prefix, `__` as separator)
//! 2. Project-level `.jobscope/config.toml`
//! 3. User-level `~/.config/jobscope/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `JOBSCOPE_WAREHOUSE__PATH` -> `warehouse.path`,
//! `JOBSCOPE_REPORTS__TOP_N` -> `reports.top_n`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use jobscope_config::JobscopeConfig;
//!
//! let config = JobscopeConfig::load_with_dotenv().expect("config");
//! config.validate().expect("valid config");
//!
//! if config.warehouse.is_configured() {
//!     println!("Warehouse: {}", config.warehouse.path);
//! }
//! ```

mod error;
mod reports;
mod warehouse;

pub use error::ConfigError;
pub use reports::ReportsConfig;
pub use warehouse::WarehouseConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct JobscopeConfig {
    #[serde(default)]
    pub warehouse: WarehouseConfig,
    #[serde(default)]
    pub reports: ReportsConfig,
}

impl JobscopeConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::figment().extract().map_err(ConfigError::from)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] if a source cannot be parsed.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests and the CLI can layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".jobscope/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("JOBSCOPE_").split("__"))
    }

    /// Reject values the reports cannot run with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NotConfigured`] when no warehouse path is set and
    /// [`ConfigError::InvalidValue`] for zero limits or thread counts.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.warehouse.is_configured() {
            return Err(ConfigError::NotConfigured {
                section: "warehouse".to_string(),
            });
        }
        if self.warehouse.threads == Some(0) {
            return Err(invalid("warehouse.threads", "must be at least 1"));
        }
        if self.reports.top_n == 0 {
            return Err(invalid("reports.top_n", "must be at least 1"));
        }
        if self.reports.industry_limit == 0 {
            return Err(invalid("reports.industry_limit", "must be at least 1"));
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("jobscope").join("config.toml"))
    }
}

fn invalid(field: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
