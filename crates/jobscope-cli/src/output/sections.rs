//! Output shapes for report commands.
//!
//! Every response serializes to JSON as-is and also knows how to draw itself
//! as text for `--format table`.

use chrono::{DateTime, Utc};
use jobscope_core::{
    BarChart, Charted, CompanySizeCount, IndustryCount, IndustryDrilldown, IndustryRanked,
    JoinDiagnostics, ReportKind, ReportOutcome, TitleCount, TitleSalary, WorkTypeShare,
};
use serde::Serialize;
use serde_json::Value;

use super::chart::render_bar_chart;
use super::table::{TableOptions, render_table};

/// Plain-text rendering used by `--format table`.
pub trait TextView {
    fn to_text(&self, options: TableOptions) -> String;
}

/// Table columns for a report row type.
pub trait Tabular {
    const HEADERS: &'static [&'static str];
    /// Column drawn by the bar chart.
    const MEASURE: &'static str;

    fn cells(&self) -> Vec<String>;
}

impl Tabular for TitleCount {
    const HEADERS: &'static [&'static str] = &["industry", "title", "postings"];
    const MEASURE: &'static str = "postings";

    fn cells(&self) -> Vec<String> {
        vec![
            self.industry.clone(),
            self.title.clone(),
            self.postings.to_string(),
        ]
    }
}

impl Tabular for TitleSalary {
    const HEADERS: &'static [&'static str] = &["industry", "title", "max_salary", "pay_period"];
    const MEASURE: &'static str = "max_salary";

    fn cells(&self) -> Vec<String> {
        vec![
            self.industry.clone(),
            self.title.clone(),
            format!("{:.2}", self.max_salary),
            self.pay_period.clone().unwrap_or_else(|| "-".to_string()),
        ]
    }
}

impl Tabular for CompanySizeCount {
    const HEADERS: &'static [&'static str] = &["company_size", "band", "postings"];
    const MEASURE: &'static str = "postings";

    fn cells(&self) -> Vec<String> {
        vec![
            self.company_size
                .map_or_else(|| "-".to_string(), |size| size.to_string()),
            self.band.label().to_string(),
            self.postings.to_string(),
        ]
    }
}

impl Tabular for IndustryCount {
    const HEADERS: &'static [&'static str] = &["industry", "postings"];
    const MEASURE: &'static str = "postings";

    fn cells(&self) -> Vec<String> {
        vec![self.industry.clone(), self.postings.to_string()]
    }
}

impl Tabular for WorkTypeShare {
    const HEADERS: &'static [&'static str] = &["work_type", "postings", "percentage"];
    const MEASURE: &'static str = "postings";

    fn cells(&self) -> Vec<String> {
        vec![
            self.work_type.clone(),
            self.postings.to_string(),
            format!("{:.2}%", self.percentage),
        ]
    }
}

/// Industry selector state attached to drill-down sections.
#[derive(Debug, Clone, Serialize)]
pub struct IndustrySelector {
    pub industries: Vec<String>,
    pub selected: String,
}

/// One report as heading, table and bar chart, or a no-data notice.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSection {
    pub report: ReportKind,
    pub number: u8,
    pub title: &'static str,
    pub no_data: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selector: Option<IndustrySelector>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub rows: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<BarChart>,
    #[serde(skip)]
    columns: &'static [&'static str],
    #[serde(skip)]
    cells: Vec<Vec<String>>,
}

impl ReportSection {
    /// Section for a report whose query returned nothing.
    #[must_use]
    pub fn no_data(report: ReportKind) -> Self {
        Self {
            no_data: true,
            ..Self::notice(report, report.no_data_message())
        }
    }

    /// Section that shows `message` in place of the report body.
    #[must_use]
    pub fn notice(report: ReportKind, message: String) -> Self {
        Self {
            report,
            number: report.number(),
            title: report.title(),
            no_data: false,
            message: Some(message),
            selector: None,
            rows: Vec::new(),
            chart: None,
            columns: &[],
            cells: Vec::new(),
        }
    }

    /// Section over rows in display order.
    pub fn from_rows<R>(report: ReportKind, rows: &[&R]) -> anyhow::Result<Self>
    where
        R: Serialize + Tabular + Charted,
    {
        if rows.is_empty() {
            return Ok(Self::no_data(report));
        }

        let values = rows
            .iter()
            .map(serde_json::to_value)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            report,
            number: report.number(),
            title: report.title(),
            no_data: false,
            message: None,
            selector: None,
            rows: values,
            chart: Some(BarChart::from_rows(R::MEASURE, rows.iter().copied())),
            columns: R::HEADERS,
            cells: rows.iter().map(|row| row.cells()).collect(),
        })
    }

    /// Section for a report without an industry selector.
    pub fn from_outcome<R>(report: ReportKind, outcome: &ReportOutcome<R>) -> anyhow::Result<Self>
    where
        R: Serialize + Tabular + Charted,
    {
        match outcome.rows() {
            None => Ok(Self::no_data(report)),
            Some(rows) => Self::from_rows(report, &rows.iter().collect::<Vec<_>>()),
        }
    }

    /// Section for a drill-down report narrowed to one industry.
    ///
    /// `industry` defaults to the first industry in the selector. An industry
    /// the report does not contain is an error.
    pub fn drilldown<R>(
        report: ReportKind,
        drilldown: Option<&IndustryDrilldown<R>>,
        industry: Option<&str>,
    ) -> anyhow::Result<Self>
    where
        R: Serialize + Tabular + Charted + IndustryRanked,
    {
        let Some(drilldown) = drilldown else {
            return Ok(Self::no_data(report));
        };
        let Some(selected) = industry.or_else(|| drilldown.default_industry()) else {
            return Ok(Self::no_data(report));
        };

        let rows = drilldown.select(selected)?;
        let mut section = Self::from_rows(report, &rows)?;
        section.selector = Some(IndustrySelector {
            industries: drilldown.industries().to_vec(),
            selected: selected.to_string(),
        });
        Ok(section)
    }
}

impl TextView for ReportSection {
    fn to_text(&self, options: TableOptions) -> String {
        let mut blocks = vec![format!("[{}] {}", self.number, self.title)];

        if let Some(message) = &self.message {
            blocks.push(message.clone());
            return blocks.join("\n");
        }

        if let Some(selector) = &self.selector {
            blocks.push(format!(
                "industry: {} ({} available)",
                selector.selected,
                selector.industries.len()
            ));
        }

        blocks.push(render_table(self.columns, &self.cells, options));
        if let Some(chart) = &self.chart {
            blocks.push(String::new());
            blocks.push(render_bar_chart(chart, options));
        }
        blocks.join("\n")
    }
}

/// All five reports in dashboard order.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardResponse {
    pub generated_at: DateTime<Utc>,
    pub sections: Vec<ReportSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_loss: Option<DiagnosticsView>,
}

impl TextView for DashboardResponse {
    fn to_text(&self, options: TableOptions) -> String {
        let mut blocks = self
            .sections
            .iter()
            .map(|section| section.to_text(options))
            .collect::<Vec<_>>();
        if let Some(join_loss) = &self.join_loss {
            blocks.push(join_loss.to_text(options));
        }
        blocks.join("\n\n")
    }
}

/// Selector values of a drill-down report.
#[derive(Debug, Clone, Serialize)]
pub struct IndustriesResponse {
    pub report: ReportKind,
    pub industries: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl IndustriesResponse {
    #[must_use]
    pub fn new<R: IndustryRanked>(
        report: ReportKind,
        drilldown: Option<&IndustryDrilldown<R>>,
    ) -> Self {
        match drilldown {
            Some(drilldown) => Self {
                report,
                industries: drilldown.industries().to_vec(),
                default: drilldown.default_industry().map(str::to_string),
                message: None,
            },
            None => Self {
                report,
                industries: Vec::new(),
                default: None,
                message: Some(report.no_data_message()),
            },
        }
    }
}

impl TextView for IndustriesResponse {
    fn to_text(&self, _options: TableOptions) -> String {
        if let Some(message) = &self.message {
            return message.clone();
        }
        numbered_list(&self.industries)
    }
}

/// `1. name` per line.
pub(crate) fn numbered_list(items: &[String]) -> String {
    let width = items.len().to_string().len();
    items
        .iter()
        .enumerate()
        .map(|(index, item)| format!("{:>width$}. {item}", index + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join-loss counts plus the derived totals.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct DiagnosticsView {
    #[serde(flatten)]
    pub counts: JoinDiagnostics,
    pub dropped_from_company_reports: i64,
    pub dropped_from_industry_reports: i64,
    pub dropped_from_title_reports: i64,
}

impl From<JoinDiagnostics> for DiagnosticsView {
    fn from(counts: JoinDiagnostics) -> Self {
        Self {
            counts,
            dropped_from_company_reports: counts.dropped_from_company_reports(),
            dropped_from_industry_reports: counts.dropped_from_industry_reports(),
            dropped_from_title_reports: counts.dropped_from_title_reports(),
        }
    }
}

impl TextView for DiagnosticsView {
    fn to_text(&self, options: TableOptions) -> String {
        let counts = [
            ("total postings", self.counts.total_postings),
            ("unparseable identifier", self.counts.unparseable_identifier),
            ("unmatched company", self.counts.unmatched_company),
            ("without industry", self.counts.without_industry),
            ("without title", self.counts.without_title),
            ("dropped from company reports", self.dropped_from_company_reports),
            ("dropped from industry reports", self.dropped_from_industry_reports),
            ("dropped from title reports", self.dropped_from_title_reports),
        ];
        let rows = counts
            .iter()
            .map(|(label, count)| vec![(*label).to_string(), count.to_string()])
            .collect::<Vec<_>>();
        format!(
            "Join loss\n{}",
            render_table(&["measure", "postings"], &rows, options)
        )
    }
}
