// File: crates/chart-data/src/highlight.rs
// Summary: Highlight request coming from the gesture layer (series index + label index).

/// Addresses one entry by position: the series' index inside the dataset and
/// the entry's label index inside that series.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Highlight {
    pub series_index: usize,
    pub label_index: usize,
}

impl Highlight {
    pub const fn new(series_index: usize, label_index: usize) -> Self {
        Self { series_index, label_index }
    }
}
