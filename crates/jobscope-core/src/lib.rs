//! # jobscope-core
//!
//! Domain types shared by every jobscope crate.
//!
//! This crate performs no I/O. It provides:
//! - Result row types for the five job-posting reports
//! - The company-size ordinal to band mapping
//! - Report kinds and the rows-or-no-data report outcome
//! - Industry drill-down over already-fetched rows
//! - A chart model that renderers turn into bar charts
//! - Join-loss counts for the identifier-based company join
//! - Cross-cutting error types

pub mod band;
pub mod chart;
pub mod diagnostics;
pub mod drilldown;
pub mod errors;
pub mod outcome;
pub mod report;
pub mod rows;

pub use band::CompanySizeBand;
pub use chart::{Bar, BarChart, Charted};
pub use diagnostics::JoinDiagnostics;
pub use drilldown::{IndustryDrilldown, IndustryRanked};
pub use errors::CoreError;
pub use outcome::ReportOutcome;
pub use report::ReportKind;
pub use rows::{CompanySizeCount, IndustryCount, TitleCount, TitleSalary, WorkTypeShare};
