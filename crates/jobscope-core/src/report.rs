//! The five fixed reports.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the five job-posting analyses, in dashboard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    /// Most-posted titles per industry.
    TopTitles,
    /// Best-paid titles per industry.
    TopPaidTitles,
    /// Posting counts per company-size band.
    CompanySize,
    /// Posting counts per industry.
    Industries,
    /// Posting counts and shares per work type.
    WorkTypes,
}

impl ReportKind {
    /// All reports in dashboard order.
    pub const ALL: [Self; 5] = [
        Self::TopTitles,
        Self::TopPaidTitles,
        Self::CompanySize,
        Self::Industries,
        Self::WorkTypes,
    ];

    /// Slug used on the command line and in JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TopTitles => "top-titles",
            Self::TopPaidTitles => "top-paid-titles",
            Self::CompanySize => "company-size",
            Self::Industries => "industries",
            Self::WorkTypes => "work-types",
        }
    }

    /// 1-based position on the dashboard.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::TopTitles => 1,
            Self::TopPaidTitles => 2,
            Self::CompanySize => 3,
            Self::Industries => 4,
            Self::WorkTypes => 5,
        }
    }

    /// Section heading.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TopTitles => "Most-posted job titles by industry",
            Self::TopPaidTitles => "Best-paid job titles by industry",
            Self::CompanySize => "Postings by company size",
            Self::Industries => "Postings by industry",
            Self::WorkTypes => "Postings by work type",
        }
    }

    /// Whether the report carries an industry selector.
    #[must_use]
    pub const fn has_industry_selector(self) -> bool {
        matches!(self, Self::TopTitles | Self::TopPaidTitles)
    }

    /// Informational message shown instead of a chart when the query returns nothing.
    #[must_use]
    pub fn no_data_message(self) -> String {
        match self {
            Self::CompanySize => format!(
                "No data for report {}: no posting matched a company.",
                self.number()
            ),
            _ => format!("No data available for report {}.", self.number()),
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
