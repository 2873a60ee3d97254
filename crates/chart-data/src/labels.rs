// File: crates/chart-data/src/labels.rs
// Summary: Helpers for the shared label (x-value) sequence.

/// Labels `"from"`, `"from + 1"`, ... up to but excluding `to`.
/// Returns an empty list when `to <= from`.
pub fn generate_label_range(from: i64, to: i64) -> Vec<String> {
    (from..to).map(|i| i.to_string()).collect()
}

/// Mean label length in UTF-16 code units, used downstream as a text-width
/// estimate. An empty label list yields `1.0`.
pub fn average_label_length(labels: &[String]) -> f64 {
    if labels.is_empty() {
        return 1.0;
    }
    let total: usize = labels.iter().map(|l| l.encode_utf16().count()).sum();
    total as f64 / labels.len() as f64
}
