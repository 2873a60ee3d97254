// File: crates/chart-data/src/entry.rs
// Summary: Single data point (value + label index) with a stable identity handle.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::Value as JsonValue;

static NEXT_ENTRY_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of an [`Entry`]. Two entries with equal values are still distinct
/// entries; removal and lookup by reference compare ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    fn next() -> Self {
        Self(NEXT_ENTRY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub const fn get(self) -> u64 { self.0 }
}

/// One data point of a series.
///
/// `label_index` points into the dataset's shared label sequence. Value and
/// label index are fixed for the lifetime of the entry; to change either,
/// remove the entry and add a new one.
#[derive(Debug)]
pub struct Entry {
    id: EntryId,
    value: f64,
    label_index: usize,
    data: Option<JsonValue>,
}

impl Entry {
    pub fn new(value: f64, label_index: usize) -> Self {
        Self { id: EntryId::next(), value, label_index, data: None }
    }

    /// Attach opaque display data (tooltip payload, marker info, ...).
    pub fn with_data(mut self, data: JsonValue) -> Self {
        self.data = Some(data);
        self
    }

    pub fn id(&self) -> EntryId { self.id }
    pub fn value(&self) -> f64 { self.value }
    pub fn label_index(&self) -> usize { self.label_index }
    pub fn data(&self) -> Option<&JsonValue> { self.data.as_ref() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_per_entry() {
        let a = Entry::new(1.0, 0);
        let b = Entry::new(1.0, 0);
        assert_ne!(a.id(), b.id());
        assert_eq!(a.value(), b.value());
    }

    #[test]
    fn carries_display_data() {
        let e = Entry::new(2.5, 3).with_data(serde_json::json!({ "note": "peak" }));
        assert_eq!(e.label_index(), 3);
        assert_eq!(e.data().and_then(|d| d["note"].as_str()), Some("peak"));
    }
}
