use anyhow::Context;
use jobscope_config::JobscopeConfig;
use jobscope_warehouse::{ReportSession, ReportSettings, Warehouse};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: JobscopeConfig,
    pub warehouse: Warehouse,
}

impl AppContext {
    /// Open the configured warehouse. Failure here ends the run.
    pub fn init(config: JobscopeConfig) -> anyhow::Result<Self> {
        let warehouse = Warehouse::open(&config.warehouse).with_context(|| {
            format!(
                "failed to connect to warehouse at '{}'",
                config.warehouse.path
            )
        })?;

        Ok(Self { config, warehouse })
    }

    /// Start a report session bound to this run's warehouse handle.
    #[must_use]
    pub fn session(&self) -> ReportSession<'_> {
        ReportSession::new(&self.warehouse, ReportSettings::from(&self.config.reports))
    }
}
