// File: crates/chart-data/src/series.rs
// Summary: Series model: ordered entries plus running min/max/sum, tagged with an axis.
// Notes:
// - Aggregates are private so they can only change alongside the entries.
// - `remove_entry_at`/`remove_entry` leave min/max untouched; see their docs.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::axis::AxisDependency;
use crate::entry::{Entry, EntryId};
use crate::style::SeriesStyle;

static NEXT_SERIES_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of a [`Series`], stable across moves into and out of a dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeriesId(u64);

impl SeriesId {
    fn next() -> Self {
        Self(NEXT_SERIES_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(self) -> u64 { self.0 }
}

#[derive(Debug)]
pub struct Series {
    id: SeriesId,
    label: String,
    axis: AxisDependency,
    entries: Vec<Entry>,
    value_min: f64,
    value_max: f64,
    value_sum: f64,
    pub style: SeriesStyle,
}

impl Series {
    pub fn new(label: impl Into<String>, axis: AxisDependency) -> Self {
        Self {
            id: SeriesId::next(),
            label: label.into(),
            axis,
            entries: Vec::new(),
            value_min: 0.0,
            value_max: 0.0,
            value_sum: 0.0,
            style: SeriesStyle::default(),
        }
    }

    pub fn with_entries(label: impl Into<String>, axis: AxisDependency, entries: Vec<Entry>) -> Self {
        let mut s = Self::new(label, axis);
        s.entries = entries;
        s.recompute();
        s
    }

    /// Build from `(value, label_index)` pairs.
    pub fn from_values(label: impl Into<String>, axis: AxisDependency, values: &[(f64, usize)]) -> Self {
        let entries = values.iter().map(|&(v, i)| Entry::new(v, i)).collect();
        Self::with_entries(label, axis, entries)
    }

    pub fn with_style(mut self, style: SeriesStyle) -> Self {
        self.style = style;
        self
    }

    pub fn id(&self) -> SeriesId { self.id }
    pub fn label(&self) -> &str { &self.label }
    pub fn axis(&self) -> AxisDependency { self.axis }
    pub fn entries(&self) -> &[Entry] { &self.entries }
    pub fn entry_count(&self) -> usize { self.entries.len() }
    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    /// Smallest value, or 0 for an empty series.
    pub fn value_min(&self) -> f64 { self.value_min }
    /// Largest value, or 0 for an empty series.
    pub fn value_max(&self) -> f64 { self.value_max }
    pub fn value_sum(&self) -> f64 { self.value_sum }

    /// Append `entry` and fold it into the aggregates in O(1).
    pub fn add_entry(&mut self, entry: Entry) {
        let v = entry.value();
        if self.entries.is_empty() {
            self.value_min = v;
            self.value_max = v;
        } else {
            if v < self.value_min { self.value_min = v; }
            if v > self.value_max { self.value_max = v; }
        }
        self.value_sum += v;
        self.entries.push(entry);
    }

    /// Remove the first entry whose label index is `label_index`.
    ///
    /// Only `value_sum` is adjusted. The removed value may have been the
    /// minimum or maximum, so bounds can be stale until [`Series::recompute`]
    /// runs; the dataset-level removal methods always do that for you.
    pub fn remove_entry_at(&mut self, label_index: usize) -> bool {
        match self.entries.iter().position(|e| e.label_index() == label_index) {
            Some(pos) => {
                self.take(pos);
                true
            }
            None => false,
        }
    }

    /// Remove the entry with identity `id`. Same bound caveat as
    /// [`Series::remove_entry_at`].
    pub fn remove_entry(&mut self, id: EntryId) -> Option<Entry> {
        let pos = self.entry_index(id)?;
        Some(self.take(pos))
    }

    fn take(&mut self, pos: usize) -> Entry {
        let e = self.entries.remove(pos);
        self.value_sum -= e.value();
        e
    }

    pub fn entry_at(&self, label_index: usize) -> Option<&Entry> {
        self.entries.iter().find(|e| e.label_index() == label_index)
    }

    pub fn entry(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id() == id)
    }

    pub fn entry_index(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|e| e.id() == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.entry_index(id).is_some()
    }

    /// Recompute min/max/sum from scratch. O(n).
    pub fn recompute(&mut self) {
        self.value_sum = self.entries.iter().map(Entry::value).sum();
        let mut it = self.entries.iter().map(Entry::value);
        match it.next() {
            Some(first) => {
                let (lo, hi) = it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
                self.value_min = lo;
                self.value_max = hi;
            }
            None => {
                self.value_min = 0.0;
                self.value_max = 0.0;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Series {
        Series::from_values("s", AxisDependency::Left, &[(1.0, 0), (5.0, 1), (2.0, 2)])
    }

    #[test]
    fn construction_folds_aggregates() {
        let s = sample();
        assert_eq!(s.entry_count(), 3);
        assert_eq!((s.value_min(), s.value_max(), s.value_sum()), (1.0, 5.0, 8.0));
    }

    #[test]
    fn empty_series_reports_zero_bounds() {
        let s = Series::new("empty", AxisDependency::Right);
        assert_eq!((s.value_min(), s.value_max(), s.value_sum()), (0.0, 0.0, 0.0));
    }

    #[test]
    fn first_entry_seeds_bounds() {
        let mut s = Series::new("s", AxisDependency::Left);
        s.add_entry(Entry::new(7.0, 0));
        assert_eq!((s.value_min(), s.value_max()), (7.0, 7.0));
        s.add_entry(Entry::new(-2.0, 1));
        assert_eq!((s.value_min(), s.value_max(), s.value_sum()), (-2.0, 7.0, 5.0));
    }

    #[test]
    fn remove_by_label_index_keeps_bounds_until_recompute() {
        let mut s = sample();
        assert!(s.remove_entry_at(1));
        assert_eq!(s.value_sum(), 3.0);
        assert_eq!(s.value_max(), 5.0, "bounds are not shrunk incrementally");
        s.recompute();
        assert_eq!((s.value_min(), s.value_max()), (1.0, 2.0));
        assert!(!s.remove_entry_at(9));
    }

    #[test]
    fn lookup_by_label_index_and_identity() {
        let s = sample();
        let e = s.entry_at(2).expect("entry at label 2");
        assert_eq!(e.value(), 2.0);
        let id = e.id();
        assert!(s.contains(id));
        assert_eq!(s.entry_index(id), Some(2));
        assert!(s.entry_at(7).is_none());
    }

    #[test]
    fn remove_by_identity_returns_entry() {
        let mut s = sample();
        let id = s.entries()[0].id();
        let removed = s.remove_entry(id).expect("removed");
        assert_eq!(removed.value(), 1.0);
        assert!(s.remove_entry(id).is_none());
        assert_eq!(s.entry_count(), 2);
    }
}
