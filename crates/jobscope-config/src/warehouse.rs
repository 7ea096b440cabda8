//! Warehouse (`DuckDB`) connection configuration.

use serde::{Deserialize, Serialize};

/// Default access mode: the reporting tool never writes.
const fn default_read_only() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WarehouseConfig {
    /// Path to the `DuckDB` database file holding the job-posting tables.
    #[serde(default)]
    pub path: String,

    /// Open the database in read-only access mode.
    #[serde(default = "default_read_only")]
    pub read_only: bool,

    /// Worker threads for `DuckDB`. Engine default when unset.
    #[serde(default)]
    pub threads: Option<u32>,
}

impl Default for WarehouseConfig {
    fn default() -> Self {
        Self {
            path: String::new(),
            read_only: default_read_only(),
            threads: None,
        }
    }
}

impl WarehouseConfig {
    /// Check if a database path has been provided.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        !self.path.is_empty()
    }
}
