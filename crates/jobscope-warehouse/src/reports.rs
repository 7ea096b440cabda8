//! Typed report queries.
//!
//! Each method runs one fixed query from [`crate::queries`] and maps the rows
//! into the matching `jobscope-core` row type, in the order the SQL returns.

use duckdb::{Params, Row, params};
use jobscope_core::{
    CompanySizeCount, IndustryCount, JoinDiagnostics, ReportKind, TitleCount, TitleSalary,
    WorkTypeShare,
};

use crate::{Warehouse, WarehouseError, queries};

impl Warehouse {
    /// Most-posted titles per industry, at most `top_n` per industry.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the query fails.
    pub fn top_titles_by_industry(&self, top_n: u32) -> Result<Vec<TitleCount>, WarehouseError> {
        self.fetch(
            ReportKind::TopTitles,
            queries::TOP_TITLES_BY_INDUSTRY,
            params![i64::from(top_n)],
            |row| {
                Ok(TitleCount {
                    industry: row.get(0)?,
                    title: row.get(1)?,
                    postings: row.get(2)?,
                })
            },
        )
    }

    /// Best-paid titles per industry, at most `top_n` per industry.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the query fails.
    pub fn top_paid_titles_by_industry(
        &self,
        top_n: u32,
    ) -> Result<Vec<TitleSalary>, WarehouseError> {
        self.fetch(
            ReportKind::TopPaidTitles,
            queries::TOP_PAID_TITLES_BY_INDUSTRY,
            params![i64::from(top_n)],
            |row| {
                Ok(TitleSalary {
                    industry: row.get(0)?,
                    title: row.get(1)?,
                    max_salary: row.get(2)?,
                    pay_period: row.get(3)?,
                })
            },
        )
    }

    /// Postings per company-size ordinal, ordered by ordinal with nulls last.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the query fails.
    pub fn postings_by_company_size(&self) -> Result<Vec<CompanySizeCount>, WarehouseError> {
        self.fetch(
            ReportKind::CompanySize,
            queries::POSTINGS_BY_COMPANY_SIZE,
            [],
            |row| Ok(CompanySizeCount::from_ordinal(row.get(0)?, row.get(1)?)),
        )
    }

    /// Postings per industry, the `limit` largest.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the query fails.
    pub fn postings_by_industry(&self, limit: u32) -> Result<Vec<IndustryCount>, WarehouseError> {
        self.fetch(
            ReportKind::Industries,
            queries::POSTINGS_BY_INDUSTRY,
            params![i64::from(limit)],
            |row| {
                Ok(IndustryCount {
                    industry: row.get(0)?,
                    postings: row.get(1)?,
                })
            },
        )
    }

    /// Postings and percentage share per work type.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::Query`] if the query fails.
    pub fn postings_by_work_type(&self) -> Result<Vec<WorkTypeShare>, WarehouseError> {
        self.fetch(
            ReportKind::WorkTypes,
            queries::POSTINGS_BY_WORK_TYPE,
            [],
            |row| {
                Ok(WorkTypeShare {
                    work_type: row.get(0)?,
                    postings: row.get(1)?,
                    percentage: row.get(2)?,
                })
            },
        )
    }

    /// Count postings dropped by the company and industry joins.
    ///
    /// # Errors
    ///
    /// Returns [`WarehouseError::DuckDb`] if the query fails.
    pub fn join_diagnostics(&self) -> Result<JoinDiagnostics, WarehouseError> {
        self.record_query();
        let diagnostics = self
            .conn
            .query_row(queries::JOIN_DIAGNOSTICS, [], |row| {
                Ok(JoinDiagnostics {
                    total_postings: row.get(0)?,
                    unparseable_identifier: row.get(1)?,
                    unmatched_company: row.get(2)?,
                    without_industry: row.get(3)?,
                    without_title: row.get(4)?,
                })
            })?;
        tracing::debug!(?diagnostics, "join diagnostics computed");
        Ok(diagnostics)
    }

    fn fetch<R, P, F>(
        &self,
        report: ReportKind,
        sql: &str,
        params: P,
        map_row: F,
    ) -> Result<Vec<R>, WarehouseError>
    where
        P: Params,
        F: FnMut(&Row<'_>) -> duckdb::Result<R>,
    {
        let query_err = |source: duckdb::Error| WarehouseError::Query { report, source };

        self.record_query();
        let mut stmt = self.conn.prepare(sql).map_err(query_err)?;
        let rows = stmt
            .query_map(params, map_row)
            .map_err(query_err)?
            .collect::<Result<Vec<_>, _>>()
            .map_err(query_err)?;

        tracing::debug!(%report, rows = rows.len(), "report query executed");
        Ok(rows)
    }
}
