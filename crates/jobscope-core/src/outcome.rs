//! Rows-or-no-data result of a report query.

use std::sync::Arc;

/// What a report query produced.
///
/// An empty result is not an error. Renderers must show an informational
/// message for [`ReportOutcome::NoData`] and never look at columns.
#[derive(Debug, Clone, PartialEq)]
pub enum ReportOutcome<R> {
    /// The query returned zero rows.
    NoData,
    /// The fetched rows, shared so drill-downs can borrow them without copying.
    Rows(Arc<[R]>),
}

impl<R> ReportOutcome<R> {
    /// Wrap freshly fetched rows.
    #[must_use]
    pub fn from_rows(rows: Vec<R>) -> Self {
        if rows.is_empty() {
            Self::NoData
        } else {
            Self::Rows(rows.into())
        }
    }

    /// The fetched rows, if any.
    #[must_use]
    pub const fn rows(&self) -> Option<&Arc<[R]>> {
        match self {
            Self::NoData => None,
            Self::Rows(rows) => Some(rows),
        }
    }
}
