// File: crates/demo/src/main.rs
// Summary: Demo loads a label + series CSV into a Dataset, mutates it, and prints aggregate snapshots as JSON.
// Usage: chart-data-demo [path.csv] [--strict]
// - First column holds the labels; every other column is a series.
// - A column named `name@right` is plotted against the right axis.
// - Empty cells are skipped, so series may be shorter than the label list.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chart_data::{
    AxisDependency, Dataset, DatasetOptions, DecimalFormatter, Highlight, LegalityCheck, Series,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

const SAMPLE: &str = include_str!("../data/quarterly.csv");

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("chart_data=info,chart_data_demo=info")))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let strict = args.iter().any(|a| a == "--strict");
    let raw = args.iter().find(|a| !a.starts_with("--"));

    let options = DatasetOptions {
        legality: if strict { LegalityCheck::AllSeries } else { LegalityCheck::FirstOffender },
    };

    let (labels, series) = match raw {
        Some(raw) => {
            let (path, used_alt) = resolve_path(raw)?;
            info!(path = %path.display(), used_alt, "loading CSV");
            let file = std::fs::File::open(&path).with_context(|| format!("opening {}", path.display()))?;
            load_series_csv(file).with_context(|| format!("failed to load CSV '{}'", path.display()))?
        }
        None => {
            info!("no input given; using bundled quarterly sample");
            load_series_csv(SAMPLE.as_bytes()).context("bundled sample")?
        }
    };

    if series.is_empty() {
        anyhow::bail!("no series columns found; expected `label,<series>...` headers");
    }

    let mut data = Dataset::with_options(labels, series, options);
    data.set_value_formatter(std::sync::Arc::new(DecimalFormatter { digits: 2 }));
    print_snapshot("loaded", &data)?;

    for (i, s) in data.series().iter().enumerate() {
        println!(
            "  [{i}] {:<12} {:?}  entries={} min={} max={}",
            s.label(),
            s.axis(),
            s.entry_count(),
            s.style.format_value(s.value_min()),
            s.style.format_value(s.value_max()),
        );
    }

    // Highlight the peak of the first series, as a tap on the chart would.
    if let Some(first) = data.series_at(0) {
        if let Some(peak) = first.entries().iter().max_by(|a, b| a.value().total_cmp(&b.value())) {
            let h = Highlight::new(0, peak.label_index());
            if let Some(e) = data.entry_for_highlight(&h) {
                let label = data.labels().get(e.label_index()).map(String::as_str).unwrap_or("?");
                println!("Highlight {:?} -> {} at '{}'", h, e.value(), label);
            }
        }
    }

    // Drop the last right-axis series, if any, to show the axis fallback.
    let right = data
        .series()
        .iter()
        .rev()
        .find(|s| s.axis() == AxisDependency::Right)
        .map(Series::id);
    if let Some(id) = right {
        if let Some(removed) = data.remove_series(id) {
            info!(series = removed.label(), "removed right-axis series");
            print_snapshot("after removing right-axis series", &data)?;
        }
    }

    Ok(())
}

fn print_snapshot(stage: &str, data: &Dataset) -> Result<()> {
    let json = serde_json::to_string_pretty(&data.aggregates())?;
    println!("== {stage}\n{json}");
    Ok(())
}

/// Read labels from the first column and one series per remaining column.
fn load_series_csv<R: Read>(reader: R) -> Result<(Vec<String>, Vec<Series>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let mut series = headers
        .iter()
        .skip(1)
        .map(|h| match h.strip_suffix("@right") {
            Some(name) => Series::new(name, AxisDependency::Right),
            None => Series::new(h.as_str(), AxisDependency::Left),
        })
        .collect::<Vec<_>>();

    let mut labels = Vec::new();
    for (row, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("row {}", row + 1))?;
        labels.push(rec.get(0).unwrap_or_default().to_string());
        for (col, s) in series.iter_mut().enumerate() {
            let cell = rec.get(col + 1).unwrap_or_default();
            if cell.is_empty() {
                continue;
            }
            let value = cell
                .parse::<f64>()
                .with_context(|| format!("row {}, column '{}': not a number: {cell:?}", row + 1, s.label()))?;
            s.add_entry(chart_data::Entry::new(value, row));
        }
    }
    Ok((labels, series))
}

/// Resolve path, trying .csv/.cvs swap if needed.
/// Returns (actual_path, used_alt)
fn resolve_path(raw: &str) -> Result<(PathBuf, bool)> {
    let p = Path::new(raw);
    if p.exists() {
        return Ok((p.to_path_buf(), false));
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            return Ok((alt, true));
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "cvs" => {
            alt.set_extension("csv");
            Some(alt)
        }
        "csv" => {
            alt.set_extension("cvs");
            Some(alt)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_loads_with_right_axis_column_and_gaps() {
        let (labels, series) = load_series_csv(SAMPLE.as_bytes()).unwrap();
        assert_eq!(labels.len(), 6);
        assert_eq!(series.len(), 3);
        assert_eq!(series[2].label(), "margin");
        assert_eq!(series[2].axis(), AxisDependency::Right);
        assert_eq!(series[1].entry_count(), 5, "empty cell skipped");
        assert!(series[1].entry_at(5).is_none());
    }

    #[test]
    fn rejects_non_numeric_cells() {
        let csv = "label,a\nx,1\ny,oops\n";
        assert!(load_series_csv(csv.as_bytes()).is_err());
    }
}
