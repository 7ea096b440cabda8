//! Industry drill-down over fetched report rows.
//!
//! The two per-industry reports are fetched once. Picking an industry narrows
//! the shared rows in memory; it never touches the warehouse.

use std::sync::Arc;

use crate::errors::CoreError;

/// A row that belongs to an industry and is ranked by a numeric metric.
pub trait IndustryRanked {
    fn industry(&self) -> &str;
    fn metric(&self) -> f64;
}

/// Single-select industry filter bound to one fetched result.
#[derive(Debug, Clone)]
pub struct IndustryDrilldown<R> {
    rows: Arc<[R]>,
    industries: Vec<String>,
}

impl<R: IndustryRanked> IndustryDrilldown<R> {
    /// Bind a drill-down to fetched rows.
    ///
    /// Selector values are the distinct industries in first-seen order.
    #[must_use]
    pub fn new(rows: Arc<[R]>) -> Self {
        let mut industries: Vec<String> = Vec::new();
        for row in rows.iter() {
            if !industries.iter().any(|seen| seen == row.industry()) {
                industries.push(row.industry().to_string());
            }
        }
        Self { rows, industries }
    }

    /// Values offered by the selector.
    #[must_use]
    pub fn industries(&self) -> &[String] {
        &self.industries
    }

    /// Initial selection: the first industry offered.
    #[must_use]
    pub fn default_industry(&self) -> Option<&str> {
        self.industries.first().map(String::as_str)
    }

    /// The rows this drill-down filters.
    #[must_use]
    pub const fn rows(&self) -> &Arc<[R]> {
        &self.rows
    }

    #[must_use]
    pub fn contains(&self, industry: &str) -> bool {
        self.industries.iter().any(|known| known == industry)
    }

    /// Rows of `industry`, sorted by metric descending.
    ///
    /// The sort is stable, so rows with equal metrics keep their fetched order.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownIndustry`] if no fetched row has that industry.
    pub fn select(&self, industry: &str) -> Result<Vec<&R>, CoreError> {
        if !self.contains(industry) {
            return Err(CoreError::UnknownIndustry {
                industry: industry.to_string(),
            });
        }

        let mut selected: Vec<&R> = self
            .rows
            .iter()
            .filter(|row| row.industry() == industry)
            .collect();
        selected.sort_by(|a, b| b.metric().total_cmp(&a.metric()));
        Ok(selected)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::rows::{TitleCount, TitleSalary};

    fn count(industry: &str, title: &str, postings: i64) -> TitleCount {
        TitleCount {
            industry: industry.into(),
            title: title.into(),
            postings,
        }
    }

    fn fixture() -> Arc<[TitleCount]> {
        vec![
            count("Banking", "Analyst", 3),
            count("Banking", "Teller", 7),
            count("Software", "Engineer", 9),
            count("Software", "Designer", 2),
            count("Software", "Tester", 9),
        ]
        .into()
    }

    #[test]
    fn industries_are_distinct_in_first_seen_order() {
        let drill = IndustryDrilldown::new(fixture());
        assert_eq!(drill.industries(), ["Banking", "Software"]);
        assert_eq!(drill.default_industry(), Some("Banking"));
    }

    #[test]
    fn select_filters_and_sorts_descending() {
        let drill = IndustryDrilldown::new(fixture());
        let titles: Vec<&str> = drill
            .select("Banking")
            .unwrap()
            .into_iter()
            .map(|row| row.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Teller", "Analyst"]);
    }

    #[test]
    fn ties_keep_fetched_order() {
        let drill = IndustryDrilldown::new(fixture());
        let titles: Vec<&str> = drill
            .select("Software")
            .unwrap()
            .into_iter()
            .map(|row| row.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Engineer", "Tester", "Designer"]);
    }

    #[test]
    fn unknown_industry_is_an_error() {
        let drill = IndustryDrilldown::new(fixture());
        let err = drill.select("Farming").unwrap_err();
        assert!(matches!(err, CoreError::UnknownIndustry { ref industry } if industry == "Farming"));
    }

    #[test]
    fn reselection_borrows_the_same_rows() {
        let rows = fixture();
        let drill = IndustryDrilldown::new(Arc::clone(&rows));

        let first = drill.select("Banking").unwrap();
        let second = drill.select("Software").unwrap();

        assert!(Arc::ptr_eq(drill.rows(), &rows));
        let base = rows.as_ptr_range();
        assert!(
            first
                .iter()
                .chain(second.iter())
                .all(|row| base.contains(&std::ptr::from_ref(*row)))
        );
    }

    #[test]
    fn salary_drilldown_orders_by_salary() {
        let rows: Arc<[TitleSalary]> = vec![
            TitleSalary {
                industry: "Health".into(),
                title: "Nurse".into(),
                max_salary: 90_000.0,
                pay_period: Some("YEARLY".into()),
            },
            TitleSalary {
                industry: "Health".into(),
                title: "Surgeon".into(),
                max_salary: 400_000.0,
                pay_period: Some("YEARLY".into()),
            },
        ]
        .into();
        let drill = IndustryDrilldown::new(rows);
        let selected = drill.select("Health").unwrap();
        assert_eq!(selected[0].title, "Surgeon");
        assert_eq!(selected[1].title, "Nurse");
    }

    #[test]
    fn empty_rows_have_no_default() {
        let drill = IndustryDrilldown::<TitleCount>::new(Vec::new().into());
        assert!(drill.industries().is_empty());
        assert_eq!(drill.default_industry(), None);
    }
}
