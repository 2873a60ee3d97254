// File: crates/chart-data/src/options.rs
// Summary: Dataset configuration (legality checking mode).

use serde::{Deserialize, Serialize};

/// How `Dataset::check_legal` scans series that are longer than the label list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LegalityCheck {
    /// Report the first offending series and stop.
    #[default]
    FirstOffender,
    /// Report every offending series.
    AllSeries,
    /// Skip the check.
    Disabled,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetOptions {
    pub legality: LegalityCheck,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_with_defaults() {
        let o: DatasetOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(o.legality, LegalityCheck::FirstOffender);
        let o: DatasetOptions = serde_json::from_str(r#"{"legality":"all-series"}"#).unwrap();
        assert_eq!(o.legality, LegalityCheck::AllSeries);
    }
}
