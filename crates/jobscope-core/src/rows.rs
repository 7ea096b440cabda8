//! Result rows of the five reports.
//!
//! One struct per report. Field names are the JSON keys used by `--format json`
//! and the column headers used by `--format table`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::band::CompanySizeBand;
use crate::chart::Charted;
use crate::drilldown::IndustryRanked;

/// Number of postings for one title within one industry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TitleCount {
    pub industry: String,
    pub title: String,
    pub postings: i64,
}

/// Highest advertised salary for one title within one industry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TitleSalary {
    pub industry: String,
    pub title: String,
    pub max_salary: f64,
    /// Pay period of the posting carrying `max_salary` (e.g. `YEARLY`, `HOURLY`).
    pub pay_period: Option<String>,
}

/// Number of postings for one raw `company_size` ordinal.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CompanySizeCount {
    /// Raw ordinal as stored in the warehouse.
    pub company_size: Option<i64>,
    pub band: CompanySizeBand,
    pub postings: i64,
}

impl CompanySizeCount {
    /// Build a row from the raw ordinal, decoding its band.
    #[must_use]
    pub const fn from_ordinal(company_size: Option<i64>, postings: i64) -> Self {
        Self {
            company_size,
            band: CompanySizeBand::from_ordinal(company_size),
            postings,
        }
    }
}

/// Number of postings for one industry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct IndustryCount {
    pub industry: String,
    pub postings: i64,
}

/// Postings for one work type and their share of all typed postings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WorkTypeShare {
    pub work_type: String,
    pub postings: i64,
    /// Percentage of all postings with a work type, rounded to two decimals.
    pub percentage: f64,
}

#[allow(clippy::cast_precision_loss)] // Posting counts stay far below 2^52
fn count_value(postings: i64) -> f64 {
    postings as f64
}

impl IndustryRanked for TitleCount {
    fn industry(&self) -> &str {
        &self.industry
    }

    fn metric(&self) -> f64 {
        count_value(self.postings)
    }
}

impl IndustryRanked for TitleSalary {
    fn industry(&self) -> &str {
        &self.industry
    }

    fn metric(&self) -> f64 {
        self.max_salary
    }
}

impl Charted for TitleCount {
    fn bar_label(&self) -> &str {
        &self.title
    }

    fn bar_value(&self) -> f64 {
        count_value(self.postings)
    }
}

impl Charted for TitleSalary {
    fn bar_label(&self) -> &str {
        &self.title
    }

    fn bar_value(&self) -> f64 {
        self.max_salary
    }
}

impl Charted for CompanySizeCount {
    fn bar_label(&self) -> &str {
        self.band.label()
    }

    fn bar_value(&self) -> f64 {
        count_value(self.postings)
    }
}

impl Charted for IndustryCount {
    fn bar_label(&self) -> &str {
        &self.industry
    }

    fn bar_value(&self) -> f64 {
        count_value(self.postings)
    }
}

impl Charted for WorkTypeShare {
    fn bar_label(&self) -> &str {
        &self.work_type
    }

    fn bar_value(&self) -> f64 {
        count_value(self.postings)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn company_size_row_decodes_band() {
        let row = CompanySizeCount::from_ordinal(Some(2), 5);
        assert_eq!(row.band, CompanySizeBand::UpTo200);
        assert_eq!(row.bar_label(), "51-200");

        let odd = CompanySizeCount::from_ordinal(Some(9), 1);
        assert_eq!(odd.band, CompanySizeBand::Unknown);
        assert_eq!(odd.company_size, Some(9));
    }

    #[test]
    fn company_size_json_shape() {
        let row = CompanySizeCount::from_ordinal(None, 3);
        let value = serde_json::to_value(&row).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"company_size": null, "band": "Unknown", "postings": 3})
        );
    }

    #[test]
    fn salary_rows_rank_by_salary() {
        let row = TitleSalary {
            industry: "Banking".into(),
            title: "Quant".into(),
            max_salary: 250_000.0,
            pay_period: Some("YEARLY".into()),
        };
        assert_eq!(row.industry(), "Banking");
        assert!((row.metric() - 250_000.0).abs() < f64::EPSILON);
        assert_eq!(row.bar_label(), "Quant");
    }
}
