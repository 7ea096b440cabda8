//! # jobscope-warehouse
//!
//! Read-only access to the job-posting warehouse.
//!
//! The warehouse is a `DuckDB` database holding three externally owned tables:
//! - `job_postings`: `title`, `company_name`, `max_salary`, `pay_period`, `formatted_work_type`
//! - `companies`: `company_id`, `company_size`
//! - `company_industries`: `company_id`, `industry`
//!
//! [`Warehouse`] is acquired once at startup and passed by reference to every
//! report. [`ReportSession`] fetches each report at most once per run and
//! serves drill-downs from the cached rows.

pub mod error;
pub mod queries;
pub mod reports;
pub mod session;

pub use error::WarehouseError;
pub use session::{ReportSession, ReportSettings};

use std::cell::Cell;
use std::path::Path;

use duckdb::{AccessMode, Config, Connection};
use jobscope_config::WarehouseConfig;

/// Handle on the warehouse connection.
///
/// Counts every report query it runs so callers can check that filter-only
/// interactions stay off the database.
pub struct Warehouse {
    conn: Connection,
    queries_issued: Cell<u64>,
}

impl Warehouse {
    /// Open the configured database file.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Config`] if no path is configured,
    /// [`WarehouseError::NotFound`] if the file does not exist, and
    /// [`WarehouseError::Connect`] if `DuckDB` cannot open it.
    pub fn open(config: &WarehouseConfig) -> Result<Self, WarehouseError> {
        if !config.is_configured() {
            return Err(jobscope_config::ConfigError::NotConfigured {
                section: "warehouse".to_string(),
            }
            .into());
        }

        let path = config.path.as_str();
        if !Path::new(path).exists() {
            return Err(WarehouseError::NotFound {
                path: path.to_string(),
            });
        }

        let connect_err = |source: duckdb::Error| WarehouseError::Connect {
            path: path.to_string(),
            source,
        };

        let mut flags = Config::default();
        if config.read_only {
            flags = flags.access_mode(AccessMode::ReadOnly).map_err(connect_err)?;
        }
        if let Some(threads) = config.threads {
            flags = flags.threads(i64::from(threads)).map_err(connect_err)?;
        }

        let conn = Connection::open_with_flags(path, flags).map_err(connect_err)?;
        tracing::info!(path, read_only = config.read_only, "warehouse opened");
        Ok(Self::from_connection(conn))
    }

    /// Open an empty in-memory warehouse (for testing).
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::DuckDb`] if `DuckDB` fails to start.
    pub fn open_in_memory() -> Result<Self, WarehouseError> {
        let conn = Connection::open_in_memory()?;
        Ok(Self::from_connection(conn))
    }

    const fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            queries_issued: Cell::new(0),
        }
    }

    /// Access the underlying `DuckDB` connection.
    ///
    /// Exposed for test fixtures. Report code goes through the typed methods.
    #[must_use]
    pub const fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Number of queries executed through this handle, counting the five
    /// report queries and the join diagnostic alike.
    #[must_use]
    pub fn queries_issued(&self) -> u64 {
        self.queries_issued.get()
    }

    fn record_query(&self) {
        self.queries_issued.set(self.queries_issued.get() + 1);
    }
}

#[cfg(test)]
pub(crate) mod fixtures;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_warehouse_starts_with_no_queries() {
        let warehouse = Warehouse::open_in_memory().expect("open in-memory warehouse");
        assert_eq!(warehouse.queries_issued(), 0);
    }

    #[test]
    fn every_query_kind_is_counted() {
        let warehouse = fixtures::seeded(&[], &[], &[]);
        warehouse.postings_by_work_type().unwrap();
        assert_eq!(warehouse.queries_issued(), 1);
        warehouse.join_diagnostics().unwrap();
        assert_eq!(warehouse.queries_issued(), 2);
    }

    #[test]
    fn open_requires_configured_path() {
        let err = Warehouse::open(&WarehouseConfig::default())
            .err()
            .expect("unconfigured warehouse must fail");
        assert!(matches!(err, WarehouseError::Config(_)));
    }

    #[test]
    fn open_missing_file_is_not_found() {
        let tmpdir = tempfile::tempdir().unwrap();
        let path = tmpdir.path().join("missing.duckdb");
        let config = WarehouseConfig {
            path: path.to_string_lossy().into_owned(),
            ..WarehouseConfig::default()
        };

        let err = Warehouse::open(&config).err().expect("missing file must fail");
        assert!(matches!(err, WarehouseError::NotFound { .. }));
        assert!(!path.exists(), "read-only open must not create the file");
    }

    #[test]
    fn fixture_tables_exist() {
        let warehouse = fixtures::seeded(&[], &[], &[]);
        let tables: Vec<String> = {
            let mut stmt = warehouse
                .conn()
                .prepare(
                    "SELECT table_name FROM information_schema.tables
                     WHERE table_schema = 'main'
                     ORDER BY table_name",
                )
                .unwrap();
            stmt.query_map([], |row| row.get(0))
                .unwrap()
                .collect::<Result<Vec<_>, _>>()
                .unwrap()
        };
        assert_eq!(
            tables,
            vec!["companies", "company_industries", "job_postings"]
        );
    }
}
