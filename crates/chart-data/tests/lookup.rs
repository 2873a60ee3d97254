// File: crates/chart-data/tests/lookup.rs
// Purpose: Identity/label lookups, highlight resolution, and style broadcast across series.

use std::sync::Arc;

use chart_data::{
    AxisDependency, Color, Dataset, DecimalFormatter, Entry, Highlight, Series, ValueFont,
};

fn dataset() -> Dataset {
    let labels = chart_data::generate_label_range(0, 5);
    Dataset::with_series(
        labels,
        vec![
            Series::from_values("Revenue", AxisDependency::Left, &[(3.0, 0), (4.0, 1)]),
            Series::from_values("Margin", AxisDependency::Right, &[(0.2, 0), (0.4, 1)]),
            Series::from_values("Costs", AxisDependency::Left, &[(1.0, 0)]),
        ],
    )
}

#[test]
fn series_by_label_respects_case_mode() {
    let d = dataset();
    assert_eq!(d.series_by_label("Margin", false).map(Series::label), Some("Margin"));
    assert!(d.series_by_label("margin", false).is_none());
    assert_eq!(d.series_index_by_label("MARGIN", true), Some(1));
    assert!(d.series_by_label("Missing", true).is_none());
    assert_eq!(d.series_labels(), vec!["Revenue", "Margin", "Costs"]);
}

#[test]
fn first_series_per_axis() {
    let d = dataset();
    assert_eq!(d.first_left_series().map(Series::label), Some("Revenue"));
    assert_eq!(d.first_right_series().map(Series::label), Some("Margin"));

    let only_left = Dataset::with_series(vec![], vec![Series::new("l", AxisDependency::Left)]);
    assert!(only_left.first_right_series().is_none());
}

#[test]
fn identity_lookups() {
    let mut d = dataset();
    let margin_id = d.series_at(1).map(Series::id).unwrap();
    assert_eq!(d.series_index_of(margin_id), Some(1));
    assert!(d.contains_series(margin_id));

    let entry_id = d.add_entry(9.0, 2, 2).unwrap();
    assert_eq!(d.series_containing_entry(entry_id).map(Series::label), Some("Costs"));
    assert!(d.contains_entry(entry_id));

    let detached = Entry::new(9.0, 2);
    assert!(!d.contains_entry(detached.id()), "equal value, different identity");

    let removed = d.remove_series(margin_id).unwrap();
    assert!(!d.contains_series(removed.id()));
    assert_eq!(d.series_index_of(margin_id), None);
}

#[test]
fn highlight_resolves_to_entry() {
    let d = dataset();
    let e = d.entry_for_highlight(&Highlight::new(0, 1)).expect("entry");
    assert_eq!(e.value(), 4.0);
    assert!(d.entry_for_highlight(&Highlight::new(2, 4)).is_none());
    assert!(d.entry_for_highlight(&Highlight::new(7, 0)).is_none());
}

#[test]
fn insert_entry_keeps_display_data() {
    let mut d = dataset();
    let entry = Entry::new(2.0, 3).with_data(serde_json::json!({ "tooltip": "Q4" }));
    let id = d.insert_entry(entry, 0).unwrap();
    let stored = d.series_at(0).and_then(|s| s.entry(id)).unwrap();
    assert_eq!(stored.data().and_then(|v| v["tooltip"].as_str()), Some("Q4"));
}

#[test]
fn broadcast_setters_reach_every_series() {
    let mut d = dataset();
    let teal = Color::from_argb(255, 0x2a, 0xa1, 0x98);
    d.set_value_text_color(teal);
    d.set_value_font(ValueFont { family: "Menlo".into(), size: 11.0 });
    d.set_draw_values_enabled(false);
    d.set_value_formatter(Arc::new(DecimalFormatter { digits: 1 }));

    for s in d.series() {
        assert_eq!(s.style.value_text_color, teal);
        assert_eq!(s.style.value_font.family, "Menlo");
        assert!(!s.style.draw_values);
        assert_eq!(s.style.format_value(0.26), "0.3");
    }
}

#[test]
fn all_colors_concatenates_in_series_order() {
    let mut d = dataset();
    let red = Color::from_argb(255, 220, 80, 80);
    if let Some(style) = d.series_style_mut(1) {
        style.colors = vec![red, Color::WHITE];
    }
    let colors = d.all_colors();
    assert_eq!(colors.len(), 4);
    assert_eq!(&colors[1..3], &[red, Color::WHITE]);
    assert!(d.series_style_mut(9).is_none());
}
