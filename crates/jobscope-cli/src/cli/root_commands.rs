use clap::{Args, Subcommand, ValueEnum};
use jobscope_core::ReportKind;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run all five reports in order.
    Dashboard(DashboardArgs),
    /// Run a single report.
    Report(ReportArgs),
    /// List the industries offered by a drill-down report.
    Industries(DrilldownArgs),
    /// Pick industries interactively; the report is fetched once.
    Explore(DrilldownArgs),
    /// Count postings dropped by the company join.
    Diagnostics,
    /// Print the JSON Schema of a report's rows.
    Schema(SchemaArgs),
}

/// Report selector on the command line.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum ReportArg {
    TopTitles,
    TopPaidTitles,
    CompanySize,
    Industries,
    WorkTypes,
}

impl From<ReportArg> for ReportKind {
    fn from(arg: ReportArg) -> Self {
        match arg {
            ReportArg::TopTitles => Self::TopTitles,
            ReportArg::TopPaidTitles => Self::TopPaidTitles,
            ReportArg::CompanySize => Self::CompanySize,
            ReportArg::Industries => Self::Industries,
            ReportArg::WorkTypes => Self::WorkTypes,
        }
    }
}

/// Reports that carry an industry selector.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum DrilldownArg {
    TopTitles,
    TopPaidTitles,
}

impl From<DrilldownArg> for ReportKind {
    fn from(arg: DrilldownArg) -> Self {
        match arg {
            DrilldownArg::TopTitles => Self::TopTitles,
            DrilldownArg::TopPaidTitles => Self::TopPaidTitles,
        }
    }
}

#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Industry shown by the most-posted titles report (default: first).
    #[arg(long)]
    pub industry: Option<String>,
    /// Industry shown by the best-paid titles report (default: first).
    #[arg(long)]
    pub salary_industry: Option<String>,
    /// Include counts of postings dropped by the company join.
    #[arg(long)]
    pub join_loss: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Report to run.
    #[arg(value_enum)]
    pub kind: ReportArg,
    /// Industry to show (drill-down reports only; default: first).
    #[arg(long)]
    pub industry: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DrilldownArgs {
    /// Drill-down report.
    #[arg(value_enum)]
    pub report: DrilldownArg,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Report whose row schema to print.
    #[arg(value_enum)]
    pub report: ReportArg,
}
