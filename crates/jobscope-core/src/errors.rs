//! Cross-cutting error types for jobscope.
//!
//! Storage errors live in `jobscope-warehouse` and configuration errors in
//! `jobscope-config`. The CLI converges all of them through `anyhow`.

use thiserror::Error;

/// Errors raised by pure report logic.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A drill-down selection named an industry absent from the fetched rows.
    #[error("Industry not present in report: {industry}")]
    UnknownIndustry { industry: String },
}
