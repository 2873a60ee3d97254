// File: crates/chart-data/src/dataset.rs
// Summary: Dataset: shared labels + series, and the cross-series aggregate engine.
// Notes:
// - Insertions widen bounds in place. Removals can drop an extremum, so they
//   always end in a full `recompute_min_max`.
// - An axis with no series mirrors the other axis (see `apply_axis_fallback`).

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::axis::{AxisDependency, AxisRange};
use crate::entry::{Entry, EntryId};
use crate::error::DataError;
use crate::highlight::Highlight;
use crate::labels::average_label_length;
use crate::options::{DatasetOptions, LegalityCheck};
use crate::series::{Series, SeriesId};
use crate::style::{Color, SeriesStyle, ValueFont, ValueFormatter};

/// Point-in-time copy of every dataset aggregate.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct Aggregates {
    pub y_min: f64,
    pub y_max: f64,
    pub left_axis_min: f64,
    pub left_axis_max: f64,
    pub right_axis_min: f64,
    pub right_axis_max: f64,
    pub value_sum: f64,
    pub entry_count: usize,
    pub label_average_length: f64,
}

#[derive(Debug)]
pub struct Dataset {
    labels: Vec<String>,
    series: Vec<Series>,
    options: DatasetOptions,
    y: AxisRange,
    left: AxisRange,
    right: AxisRange,
    value_sum: f64,
    entry_count: usize,
    label_average_length: f64,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Dataset {
    pub fn new(labels: Vec<String>) -> Self {
        Self::with_series(labels, Vec::new())
    }

    pub fn with_series(labels: Vec<String>, series: Vec<Series>) -> Self {
        Self::with_options(labels, series, DatasetOptions::default())
    }

    /// Build a dataset and run the full aggregate computation. Legality
    /// diagnostics are logged; use [`Dataset::check_legal`] to inspect them.
    pub fn with_options(labels: Vec<String>, series: Vec<Series>, options: DatasetOptions) -> Self {
        let mut data = Self {
            labels,
            series,
            options,
            y: AxisRange::ZERO,
            left: AxisRange::ZERO,
            right: AxisRange::ZERO,
            value_sum: 0.0,
            entry_count: 0,
            label_average_length: 1.0,
        };
        data.initialize();
        data
    }

    fn initialize(&mut self) -> Vec<DataError> {
        let diagnostics = self.check_legal();
        self.recompute_min_max();
        self.recompute_sum();
        self.recompute_count();
        self.recompute_label_average_length();
        debug!(
            series = self.series.len(),
            labels = self.labels.len(),
            entries = self.entry_count,
            y_min = self.y.min,
            y_max = self.y.max,
            "dataset aggregates recomputed"
        );
        diagnostics
    }

    /// Re-run the legality check and every aggregate from scratch. Call after
    /// bulk edits such as label changes. Returns the legality diagnostics.
    pub fn notify_changed(&mut self) -> Vec<DataError> {
        self.initialize()
    }

    /// Report series holding more entries than there are labels. Nothing is
    /// rejected; every diagnostic is also logged at `warn`.
    pub fn check_legal(&self) -> Vec<DataError> {
        let mut found = Vec::new();
        if self.options.legality == LegalityCheck::Disabled {
            return found;
        }
        let labels = self.labels.len();
        for (i, s) in self.series.iter().enumerate() {
            if s.entry_count() <= labels {
                continue;
            }
            warn!(
                series_index = i,
                series = s.label(),
                entries = s.entry_count(),
                labels,
                "series holds more entries than the dataset has labels"
            );
            found.push(DataError::SeriesExceedsLabels {
                series_index: i,
                label: s.label().to_string(),
                entries: s.entry_count(),
                labels,
            });
            if self.options.legality == LegalityCheck::FirstOffender {
                break;
            }
        }
        found
    }

    // ---- full recomputation -------------------------------------------------

    /// Rescan global and per-axis bounds over every series. O(series).
    pub fn recompute_min_max(&mut self) {
        let Some(first) = self.series.first() else {
            self.y = AxisRange::ZERO;
            self.left = AxisRange::ZERO;
            self.right = AxisRange::ZERO;
            return;
        };

        let mut y = AxisRange::new(first.value_min(), first.value_max());
        for s in &self.series[1..] {
            y.widen(s.value_min(), s.value_max());
        }
        self.y = y;

        if let Some(r) = fold_axis(&self.series, AxisDependency::Left) {
            self.left = r;
        }
        if let Some(r) = fold_axis(&self.series, AxisDependency::Right) {
            self.right = r;
        }
        self.apply_axis_fallback();
    }

    /// Sum of the absolute per-series sums.
    pub fn recompute_sum(&mut self) {
        self.value_sum = self.series.iter().map(|s| s.value_sum().abs()).sum();
    }

    pub fn recompute_count(&mut self) {
        self.entry_count = self.series.iter().map(Series::entry_count).sum();
    }

    pub fn recompute_label_average_length(&mut self) {
        self.label_average_length = average_label_length(&self.labels);
    }

    fn apply_axis_fallback(&mut self) {
        if self.first_left_series().is_none() {
            self.left = self.right;
        } else if self.first_right_series().is_none() {
            self.right = self.left;
        }
    }

    fn axis_range_mut(&mut self, axis: AxisDependency) -> &mut AxisRange {
        match axis {
            AxisDependency::Left => &mut self.left,
            AxisDependency::Right => &mut self.right,
        }
    }

    // ---- series mutation ----------------------------------------------------

    /// Append a series, widening the aggregates in place.
    pub fn add_series(&mut self, series: Series) -> SeriesId {
        let id = series.id();
        let axis = series.axis();
        let (lo, hi) = (series.value_min(), series.value_max());

        self.entry_count += series.entry_count();
        self.value_sum += series.value_sum();

        if self.series.is_empty() {
            self.y = AxisRange::new(lo, hi);
        } else {
            self.y.widen(lo, hi);
        }
        // The first series on an axis replaces whatever that axis mirrored.
        let axis_populated = self.first_series(axis).is_some();
        let bounds = self.axis_range_mut(axis);
        if axis_populated {
            bounds.widen(lo, hi);
        } else {
            *bounds = AxisRange::new(lo, hi);
        }

        trace!(series = series.label(), entries = series.entry_count(), ?axis, "series added");
        self.series.push(series);
        self.apply_axis_fallback();
        id
    }

    /// Remove the series at `index` and hand it back, or `None` if out of range.
    pub fn remove_series_at(&mut self, index: usize) -> Option<Series> {
        if index >= self.series.len() {
            return None;
        }
        let removed = self.series.remove(index);
        self.entry_count -= removed.entry_count();
        self.value_sum -= removed.value_sum();
        self.recompute_min_max();
        trace!(series = removed.label(), index, "series removed");
        Some(removed)
    }

    pub fn remove_series(&mut self, id: SeriesId) -> Option<Series> {
        let index = self.series_index_of(id)?;
        self.remove_series_at(index)
    }

    /// Drop every series and recompute.
    pub fn clear_values(&mut self) {
        self.series.clear();
        self.notify_changed();
    }

    // ---- entry mutation -----------------------------------------------------

    /// Append a new entry to the series at `series_index`.
    pub fn add_entry(&mut self, value: f64, label_index: usize, series_index: usize) -> Result<EntryId, DataError> {
        self.insert_entry(Entry::new(value, label_index), series_index)
    }

    /// Append a prebuilt entry (e.g. one carrying display data).
    /// An out-of-range `series_index` is logged and leaves the dataset untouched.
    pub fn insert_entry(&mut self, entry: Entry, series_index: usize) -> Result<EntryId, DataError> {
        let count = self.series.len();
        if series_index >= count {
            warn!(series_index, count, "add_entry ignored: series index out of range");
            return Err(DataError::SeriesIndexOutOfRange { index: series_index, count });
        }

        let id = entry.id();
        let value = entry.value();
        let axis = self.series[series_index].axis();
        let was_empty = self.series[series_index].is_empty();

        self.entry_count += 1;
        self.value_sum += value;
        self.y.widen_to(value);
        self.axis_range_mut(axis).widen_to(value);
        self.apply_axis_fallback();

        self.series[series_index].add_entry(entry);
        if was_empty {
            // an empty series contributed placeholder 0/0 bounds
            self.recompute_min_max();
        }
        trace!(series_index, value, "entry added");
        Ok(id)
    }

    /// Remove the entry with identity `id` from the series at `series_index`.
    pub fn remove_entry(&mut self, id: EntryId, series_index: usize) -> Result<Entry, DataError> {
        let count = self.series.len();
        let series = self
            .series
            .get_mut(series_index)
            .ok_or(DataError::SeriesIndexOutOfRange { index: series_index, count })?;
        let entry = series.remove_entry(id).ok_or(DataError::EntryNotFound { series_index })?;
        series.recompute();

        self.entry_count -= 1;
        self.value_sum -= entry.value();
        self.recompute_min_max();
        trace!(series_index, value = entry.value(), "entry removed");
        Ok(entry)
    }

    /// Remove the first entry at `label_index` from the series at `series_index`.
    pub fn remove_entry_by_label_index(&mut self, label_index: usize, series_index: usize) -> Result<Entry, DataError> {
        let count = self.series.len();
        let id = self
            .series
            .get(series_index)
            .ok_or(DataError::SeriesIndexOutOfRange { index: series_index, count })?
            .entry_at(label_index)
            .ok_or(DataError::EntryNotFound { series_index })?
            .id();
        self.remove_entry(id, series_index)
    }

    // ---- labels -------------------------------------------------------------

    /// Append a label. Aggregates are not refreshed; call `notify_changed`.
    pub fn add_label(&mut self, label: impl Into<String>) {
        self.labels.push(label.into());
    }

    /// Remove the label at `index`. Aggregates are not refreshed; call `notify_changed`.
    pub fn remove_label_at(&mut self, index: usize) -> Option<String> {
        if index < self.labels.len() {
            Some(self.labels.remove(index))
        } else {
            None
        }
    }

    /// Replace all labels and recompute.
    pub fn set_labels(&mut self, labels: Vec<String>) -> Vec<DataError> {
        self.labels = labels;
        self.notify_changed()
    }

    pub fn labels(&self) -> &[String] { &self.labels }
    pub fn label_count(&self) -> usize { self.labels.len() }

    // ---- lookup -------------------------------------------------------------

    pub fn series(&self) -> &[Series] { &self.series }
    pub fn series_count(&self) -> usize { self.series.len() }

    pub fn series_at(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    /// Display labels of every series, in order.
    pub fn series_labels(&self) -> Vec<&str> {
        self.series.iter().map(Series::label).collect()
    }

    /// Index of the first series labelled `label`. Linear scan.
    pub fn series_index_by_label(&self, label: &str, case_insensitive: bool) -> Option<usize> {
        if case_insensitive {
            let wanted = label.to_lowercase();
            self.series.iter().position(|s| s.label().to_lowercase() == wanted)
        } else {
            self.series.iter().position(|s| s.label() == label)
        }
    }

    pub fn series_by_label(&self, label: &str, case_insensitive: bool) -> Option<&Series> {
        self.series_index_by_label(label, case_insensitive).map(|i| &self.series[i])
    }

    pub fn series_index_of(&self, id: SeriesId) -> Option<usize> {
        self.series.iter().position(|s| s.id() == id)
    }

    pub fn series_containing_entry(&self, id: EntryId) -> Option<&Series> {
        self.series.iter().find(|s| s.contains(id))
    }

    pub fn contains_series(&self, id: SeriesId) -> bool {
        self.series_index_of(id).is_some()
    }

    pub fn contains_entry(&self, id: EntryId) -> bool {
        self.series_containing_entry(id).is_some()
    }

    pub fn first_series(&self, axis: AxisDependency) -> Option<&Series> {
        self.series.iter().find(|s| s.axis() == axis)
    }

    pub fn first_left_series(&self) -> Option<&Series> {
        self.first_series(AxisDependency::Left)
    }

    pub fn first_right_series(&self) -> Option<&Series> {
        self.first_series(AxisDependency::Right)
    }

    /// Resolve a highlight from the gesture layer to the entry it points at.
    pub fn entry_for_highlight(&self, highlight: &Highlight) -> Option<&Entry> {
        self.series.get(highlight.series_index)?.entry_at(highlight.label_index)
    }

    // ---- aggregates ---------------------------------------------------------

    pub fn y_min(&self) -> f64 { self.y.min }
    pub fn y_max(&self) -> f64 { self.y.max }

    pub fn axis_range(&self, axis: AxisDependency) -> AxisRange {
        match axis {
            AxisDependency::Left => self.left,
            AxisDependency::Right => self.right,
        }
    }

    pub fn y_min_for(&self, axis: AxisDependency) -> f64 { self.axis_range(axis).min }
    pub fn y_max_for(&self, axis: AxisDependency) -> f64 { self.axis_range(axis).max }

    pub fn value_sum(&self) -> f64 { self.value_sum }
    pub fn entry_count(&self) -> usize { self.entry_count }
    pub fn label_average_length(&self) -> f64 { self.label_average_length }
    pub fn options(&self) -> &DatasetOptions { &self.options }

    pub fn aggregates(&self) -> Aggregates {
        Aggregates {
            y_min: self.y.min,
            y_max: self.y.max,
            left_axis_min: self.left.min,
            left_axis_max: self.left.max,
            right_axis_min: self.right.min,
            right_axis_max: self.right.max,
            value_sum: self.value_sum,
            entry_count: self.entry_count,
            label_average_length: self.label_average_length,
        }
    }

    // ---- styling broadcast --------------------------------------------------

    /// Style of one series. Styling never affects aggregates.
    pub fn series_style_mut(&mut self, index: usize) -> Option<&mut SeriesStyle> {
        self.series.get_mut(index).map(|s| &mut s.style)
    }

    /// Every series' colors concatenated in series order.
    pub fn all_colors(&self) -> Vec<Color> {
        self.series.iter().flat_map(|s| s.style.colors.iter().copied()).collect()
    }

    pub fn set_value_formatter(&mut self, formatter: Arc<dyn ValueFormatter>) {
        for s in &mut self.series {
            s.style.value_formatter = Some(Arc::clone(&formatter));
        }
    }

    pub fn set_value_text_color(&mut self, color: Color) {
        for s in &mut self.series {
            s.style.value_text_color = color;
        }
    }

    pub fn set_value_font(&mut self, font: ValueFont) {
        for s in &mut self.series {
            s.style.value_font = font.clone();
        }
    }

    pub fn set_draw_values_enabled(&mut self, enabled: bool) {
        for s in &mut self.series {
            s.style.draw_values = enabled;
        }
    }
}

fn fold_axis(series: &[Series], axis: AxisDependency) -> Option<AxisRange> {
    series.iter().filter(|s| s.axis() == axis).fold(None, |acc, s| match acc {
        None => Some(AxisRange::new(s.value_min(), s.value_max())),
        Some(mut r) => {
            r.widen(s.value_min(), s.value_max());
            Some(r)
        }
    })
}
