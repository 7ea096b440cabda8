//! Warehouse error types.

use jobscope_core::ReportKind;

/// Errors raised while acquiring the warehouse or running report queries.
#[derive(Debug, thiserror::Error)]
pub enum WarehouseError {
    /// The configured database file does not exist.
    #[error("Warehouse not found: {path}")]
    NotFound { path: String },

    /// `DuckDB` refused to open the database.
    #[error("Failed to open warehouse {path}: {source}")]
    Connect {
        path: String,
        #[source]
        source: duckdb::Error,
    },

    /// A report query failed.
    #[error("Report '{report}' failed: {source}")]
    Query {
        report: ReportKind,
        #[source]
        source: duckdb::Error,
    },

    /// Any other `DuckDB` operation failed.
    #[error("DuckDB error: {0}")]
    DuckDb(#[from] duckdb::Error),

    /// The warehouse section of the configuration is unusable.
    #[error("Warehouse configuration error: {0}")]
    Config(#[from] jobscope_config::ConfigError),
}
