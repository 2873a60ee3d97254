// File: crates/chart-data/src/error.rs
// Summary: Error and diagnostic type shared by the series and dataset engines.

use thiserror::Error;

/// Failures and soft diagnostics reported by [`crate::Dataset`].
///
/// None of these abort an operation midway: a rejected call leaves the
/// dataset untouched, and `SeriesExceedsLabels` is advisory only.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DataError {
    #[error("series index {index} out of range (dataset holds {count} series)")]
    SeriesIndexOutOfRange { index: usize, count: usize },

    #[error("no matching entry in series {series_index}")]
    EntryNotFound { series_index: usize },

    #[error(
        "series {series_index} ('{label}') holds {entries} entries but only {labels} labels exist"
    )]
    SeriesExceedsLabels {
        series_index: usize,
        label: String,
        entries: usize,
        labels: usize,
    },
}
