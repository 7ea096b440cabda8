//! Counts of postings lost by the identifier-based company join.
//!
//! Postings reference companies through a free-text identifier that must parse
//! as a number. Rows that fail to parse or match are dropped by the company and
//! industry reports, and rows without a title are dropped by the title reports.
//! These counts make that loss visible on request.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct JoinDiagnostics {
    pub total_postings: i64,
    /// Identifier missing or not numeric.
    pub unparseable_identifier: i64,
    /// Numeric identifier with no matching company.
    pub unmatched_company: i64,
    /// Matched a company that has no industry.
    pub without_industry: i64,
    /// Reached an industry but has no title.
    pub without_title: i64,
}

impl JoinDiagnostics {
    /// Postings absent from the company-size report.
    #[must_use]
    pub const fn dropped_from_company_reports(&self) -> i64 {
        self.unparseable_identifier + self.unmatched_company
    }

    /// Postings absent from the per-industry reports.
    #[must_use]
    pub const fn dropped_from_industry_reports(&self) -> i64 {
        self.dropped_from_company_reports() + self.without_industry
    }

    /// Postings absent from the two per-title reports.
    #[must_use]
    pub const fn dropped_from_title_reports(&self) -> i64 {
        self.dropped_from_industry_reports() + self.without_title
    }

    #[must_use]
    pub const fn has_loss(&self) -> bool {
        self.dropped_from_title_reports() > 0
    }
}
