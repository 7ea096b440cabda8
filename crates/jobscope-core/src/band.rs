//! Company-size bands.
//!
//! The warehouse stores company size as an ordinal `0..=7`. Each ordinal names
//! a headcount band; anything outside that range (including a missing value)
//! is reported as [`CompanySizeBand::Unknown`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Headcount band of a company, decoded from its `company_size` ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum CompanySizeBand {
    #[serde(rename = "1-10")]
    UpTo10,
    #[serde(rename = "11-50")]
    UpTo50,
    #[serde(rename = "51-200")]
    UpTo200,
    #[serde(rename = "201-500")]
    UpTo500,
    #[serde(rename = "501-1000")]
    UpTo1000,
    #[serde(rename = "1001-5000")]
    UpTo5000,
    #[serde(rename = "5001-10000")]
    UpTo10000,
    #[serde(rename = "10000+")]
    Over10000,
    #[serde(rename = "Unknown")]
    Unknown,
}

impl CompanySizeBand {
    /// Decode a raw `company_size` value.
    #[must_use]
    pub const fn from_ordinal(ordinal: Option<i64>) -> Self {
        match ordinal {
            Some(0) => Self::UpTo10,
            Some(1) => Self::UpTo50,
            Some(2) => Self::UpTo200,
            Some(3) => Self::UpTo500,
            Some(4) => Self::UpTo1000,
            Some(5) => Self::UpTo5000,
            Some(6) => Self::UpTo10000,
            Some(7) => Self::Over10000,
            _ => Self::Unknown,
        }
    }

    /// Display label of the band.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpTo10 => "1-10",
            Self::UpTo50 => "11-50",
            Self::UpTo200 => "51-200",
            Self::UpTo500 => "201-500",
            Self::UpTo1000 => "501-1000",
            Self::UpTo5000 => "1001-5000",
            Self::UpTo10000 => "5001-10000",
            Self::Over10000 => "10000+",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CompanySizeBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
