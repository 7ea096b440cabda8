//! Bar-chart model.
//!
//! Charts are built from report rows and handed to a renderer; this module
//! knows nothing about terminals.

use serde::Serialize;

/// A row that can be drawn as one bar.
pub trait Charted {
    /// Category shown on the bar's axis.
    fn bar_label(&self) -> &str;
    /// Bar length.
    fn bar_value(&self) -> f64;
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Bar {
    pub label: String,
    pub value: f64,
}

/// Ordered bars keyed by a categorical column.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BarChart {
    /// Name of the measured quantity (e.g. `postings`).
    pub measure: String,
    pub bars: Vec<Bar>,
}

impl BarChart {
    /// Build a chart from rows, keeping their order.
    pub fn from_rows<'a, R, I>(measure: &str, rows: I) -> Self
    where
        R: Charted + 'a,
        I: IntoIterator<Item = &'a R>,
    {
        let bars = rows
            .into_iter()
            .map(|row| Bar {
                label: row.bar_label().to_string(),
                value: row.bar_value(),
            })
            .collect();
        Self {
            measure: measure.to_string(),
            bars,
        }
    }

    /// Largest bar value, or `0.0` for an empty chart.
    #[must_use]
    pub fn max_value(&self) -> f64 {
        self.bars.iter().map(|bar| bar.value).fold(0.0, f64::max)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }
}
