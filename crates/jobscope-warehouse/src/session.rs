//! Session-scoped report cache.
//!
//! A session fetches each report at most once. Drill-down selections are
//! served from the cached rows, so changing the selected industry never
//! issues another query.

use std::cell::OnceCell;

use jobscope_config::ReportsConfig;
use jobscope_core::{
    CompanySizeCount, IndustryCount, IndustryDrilldown, JoinDiagnostics, ReportOutcome,
    TitleCount, TitleSalary, WorkTypeShare,
};

use crate::{Warehouse, WarehouseError};

/// Limits bound into the report queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportSettings {
    /// Rows kept per industry by the two top-N reports.
    pub top_n: u32,
    /// Industries kept by the postings-by-industry report.
    pub industry_limit: u32,
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            top_n: 10,
            industry_limit: 20,
        }
    }
}

impl From<&ReportsConfig> for ReportSettings {
    fn from(config: &ReportsConfig) -> Self {
        Self {
            top_n: config.top_n,
            industry_limit: config.industry_limit,
        }
    }
}

/// Lazily fetched, cached report results for one run.
pub struct ReportSession<'w> {
    warehouse: &'w Warehouse,
    settings: ReportSettings,
    top_titles: OnceCell<ReportOutcome<TitleCount>>,
    top_paid_titles: OnceCell<ReportOutcome<TitleSalary>>,
    company_size: OnceCell<ReportOutcome<CompanySizeCount>>,
    industries: OnceCell<ReportOutcome<IndustryCount>>,
    work_types: OnceCell<ReportOutcome<WorkTypeShare>>,
    join_diagnostics: OnceCell<JoinDiagnostics>,
}

impl<'w> ReportSession<'w> {
    #[must_use]
    pub const fn new(warehouse: &'w Warehouse, settings: ReportSettings) -> Self {
        Self {
            warehouse,
            settings,
            top_titles: OnceCell::new(),
            top_paid_titles: OnceCell::new(),
            company_size: OnceCell::new(),
            industries: OnceCell::new(),
            work_types: OnceCell::new(),
            join_diagnostics: OnceCell::new(),
        }
    }

    /// Report 1: most-posted titles per industry.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the first fetch fails.
    pub fn top_titles(&self) -> Result<&ReportOutcome<TitleCount>, WarehouseError> {
        cached(&self.top_titles, || {
            self.warehouse.top_titles_by_industry(self.settings.top_n)
        })
    }

    /// Report 2: best-paid titles per industry.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the first fetch fails.
    pub fn top_paid_titles(&self) -> Result<&ReportOutcome<TitleSalary>, WarehouseError> {
        cached(&self.top_paid_titles, || {
            self.warehouse
                .top_paid_titles_by_industry(self.settings.top_n)
        })
    }

    /// Report 3: postings per company-size band.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the first fetch fails.
    pub fn company_size(&self) -> Result<&ReportOutcome<CompanySizeCount>, WarehouseError> {
        cached(&self.company_size, || {
            self.warehouse.postings_by_company_size()
        })
    }

    /// Report 4: postings per industry.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the first fetch fails.
    pub fn industries(&self) -> Result<&ReportOutcome<IndustryCount>, WarehouseError> {
        cached(&self.industries, || {
            self.warehouse
                .postings_by_industry(self.settings.industry_limit)
        })
    }

    /// Report 5: postings and share per work type.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the first fetch fails.
    pub fn work_types(&self) -> Result<&ReportOutcome<WorkTypeShare>, WarehouseError> {
        cached(&self.work_types, || self.warehouse.postings_by_work_type())
    }

    /// Industry selector for report 1, or `None` when it has no data.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the first fetch fails.
    pub fn title_drilldown(
        &self,
    ) -> Result<Option<IndustryDrilldown<TitleCount>>, WarehouseError> {
        Ok(self
            .top_titles()?
            .rows()
            .map(|rows| IndustryDrilldown::new(rows.clone())))
    }

    /// Industry selector for report 2, or `None` when it has no data.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the first fetch fails.
    pub fn salary_drilldown(
        &self,
    ) -> Result<Option<IndustryDrilldown<TitleSalary>>, WarehouseError> {
        Ok(self
            .top_paid_titles()?
            .rows()
            .map(|rows| IndustryDrilldown::new(rows.clone())))
    }

    /// Join-loss counts, computed once per session.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::DuckDb`] if the first computation fails.
    pub fn join_diagnostics(&self) -> Result<JoinDiagnostics, WarehouseError> {
        if let Some(diagnostics) = self.join_diagnostics.get() {
            return Ok(*diagnostics);
        }
        let diagnostics = self.warehouse.join_diagnostics()?;
        if diagnostics.has_loss() {
            tracing::warn!(
                total = diagnostics.total_postings,
                dropped_from_company_reports = diagnostics.dropped_from_company_reports(),
                dropped_from_industry_reports = diagnostics.dropped_from_industry_reports(),
                dropped_from_title_reports = diagnostics.dropped_from_title_reports(),
                "postings dropped by company join or missing title"
            );
        }
        Ok(*self.join_diagnostics.get_or_init(|| diagnostics))
    }
}

fn cached<R>(
    cell: &OnceCell<ReportOutcome<R>>,
    fetch: impl FnOnce() -> Result<Vec<R>, WarehouseError>,
) -> Result<&ReportOutcome<R>, WarehouseError> {
    if let Some(outcome) = cell.get() {
        return Ok(outcome);
    }
    let outcome = ReportOutcome::from_rows(fetch()?);
    Ok(cell.get_or_init(|| outcome))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::fixtures::{Posting, repeat, seeded};

    fn populated() -> Warehouse {
        let mut postings = repeat(
            Posting::at("Engineer", "1")
                .paid(140_000.0, "YEARLY")
                .work_type("Full-time"),
            3,
        );
        postings.extend(repeat(
            Posting::at("Teller", "2")
                .paid(40_000.0, "YEARLY")
                .work_type("Part-time"),
            2,
        ));
        seeded(
            &postings,
            &[(1, Some(5)), (2, Some(1))],
            &[(1, "Software"), (2, "Banking")],
        )
    }

    #[test]
    fn each_report_is_fetched_once() {
        let warehouse = populated();
        let session = ReportSession::new(&warehouse, ReportSettings::default());

        for _ in 0..3 {
            session.top_titles().unwrap();
            session.top_paid_titles().unwrap();
            session.company_size().unwrap();
            session.industries().unwrap();
            session.work_types().unwrap();
        }
        assert_eq!(warehouse.queries_issued(), 5);
    }

    #[test]
    fn reselecting_industry_never_requeries() {
        let warehouse = populated();
        let session = ReportSession::new(&warehouse, ReportSettings::default());

        let drill = session.title_drilldown().unwrap().expect("report has rows");
        let issued = warehouse.queries_issued();
        let rows_before = Arc::clone(drill.rows());

        let banking = drill.select("Banking").unwrap();
        let software = drill.select("Software").unwrap();
        let again = session.title_drilldown().unwrap().unwrap();

        assert_eq!(banking[0].title, "Teller");
        assert_eq!(software[0].title, "Engineer");
        assert_eq!(warehouse.queries_issued(), issued);
        assert!(Arc::ptr_eq(&rows_before, drill.rows()));
        assert!(Arc::ptr_eq(&rows_before, again.rows()));
    }

    #[test]
    fn empty_report_has_no_drilldown() {
        let warehouse = seeded(&[], &[], &[]);
        let session = ReportSession::new(&warehouse, ReportSettings::default());

        assert!(session.top_titles().unwrap().rows().is_none());
        assert!(session.title_drilldown().unwrap().is_none());
        assert!(session.salary_drilldown().unwrap().is_none());
    }

    #[test]
    fn one_empty_report_does_not_block_others() {
        // Work types are present but no posting matches a company.
        let postings = repeat(Posting::at("Any", "nope").work_type("Contract"), 2);
        let warehouse = seeded(&postings, &[], &[]);
        let session = ReportSession::new(&warehouse, ReportSettings::default());

        assert!(session.company_size().unwrap().rows().is_none());
        assert!(session.industries().unwrap().rows().is_none());
        assert_eq!(session.work_types().unwrap().rows().map(|rows| rows.len()), Some(1));
    }

    #[test]
    fn settings_flow_into_queries() {
        let warehouse = populated();
        let settings = ReportSettings {
            top_n: 10,
            industry_limit: 1,
        };
        let session = ReportSession::new(&warehouse, settings);

        let industries = session.industries().unwrap().rows().unwrap();
        assert_eq!(industries.len(), 1);
        assert_eq!(industries[0].industry, "Software");
    }

    #[test]
    fn settings_from_config() {
        let config = ReportsConfig {
            top_n: 3,
            industry_limit: 7,
            surface_join_loss: true,
        };
        assert_eq!(
            ReportSettings::from(&config),
            ReportSettings {
                top_n: 3,
                industry_limit: 7,
            }
        );
    }

    #[test]
    fn join_diagnostics_are_cached() {
        let warehouse = populated();
        let session = ReportSession::new(&warehouse, ReportSettings::default());

        let first = session.join_diagnostics().unwrap();
        let second = session.join_diagnostics().unwrap();
        assert_eq!(first, second);
        assert!(!first.has_loss());
        assert_eq!(warehouse.queries_issued(), 1);
    }
}
