//! Report tuning.

use serde::{Deserialize, Serialize};

/// Default ranking cutoff per industry.
const fn default_top_n() -> u32 {
    10
}

/// Default number of industries in the postings-by-industry report.
const fn default_industry_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReportsConfig {
    /// Rows kept per industry by the two top-N reports.
    #[serde(default = "default_top_n")]
    pub top_n: u32,

    /// Industries kept by the postings-by-industry report.
    #[serde(default = "default_industry_limit")]
    pub industry_limit: u32,

    /// Report how many postings the company join drops.
    #[serde(default)]
    pub surface_join_loss: bool,
}

impl Default for ReportsConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            industry_limit: default_industry_limit(),
            surface_join_loss: false,
        }
    }
}
