// File: crates/chart-data/src/style.rs
// Summary: Per-series styling carried on behalf of the renderer (colors, value text, formatter).
// Notes:
// - Nothing here participates in aggregate computation. The dataset only
//   broadcasts these settings and concatenates color lists.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// 8-bit ARGB color, laid out like the renderer's color type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Self = Self::from_argb(255, 0, 0, 0);
    pub const WHITE: Self = Self::from_argb(255, 255, 255, 255);

    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }
}

/// Font used for value labels drawn next to entries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValueFont {
    pub family: String,
    pub size: f32,
}

impl Default for ValueFont {
    fn default() -> Self {
        Self { family: "Helvetica".to_string(), size: 7.0 }
    }
}

/// Turns an entry value into the text drawn next to it.
pub trait ValueFormatter {
    fn format(&self, value: f64) -> String;
}

/// Fixed number of decimal places.
#[derive(Clone, Copy, Debug)]
pub struct DecimalFormatter {
    pub digits: usize,
}

impl ValueFormatter for DecimalFormatter {
    fn format(&self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.digits)
    }
}

/// Default series colors, cycled by index.
pub fn palette() -> [Color; 5] {
    [
        Color::from_argb(255, 64, 160, 255),
        Color::from_argb(255, 40, 200, 120),
        Color::from_argb(255, 220, 80, 80),
        Color::from_argb(255, 255, 230, 70),
        Color::from_argb(255, 150, 110, 220),
    ]
}

#[derive(Clone)]
pub struct SeriesStyle {
    pub colors: Vec<Color>,
    pub value_text_color: Color,
    pub value_font: ValueFont,
    pub value_formatter: Option<Arc<dyn ValueFormatter>>,
    pub draw_values: bool,
}

impl SeriesStyle {
    /// Format a value with the configured formatter, or plain `Display` without one.
    pub fn format_value(&self, value: f64) -> String {
        match &self.value_formatter {
            Some(f) => f.format(value),
            None => value.to_string(),
        }
    }
}

impl Default for SeriesStyle {
    fn default() -> Self {
        Self {
            colors: vec![palette()[0]],
            value_text_color: Color::BLACK,
            value_font: ValueFont::default(),
            value_formatter: None,
            draw_values: true,
        }
    }
}

impl fmt::Debug for SeriesStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SeriesStyle")
            .field("colors", &self.colors)
            .field("value_text_color", &self.value_text_color)
            .field("value_font", &self.value_font)
            .field("value_formatter", &self.value_formatter.as_ref().map(|_| "<formatter>"))
            .field("draw_values", &self.draw_values)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_and_without_formatter() {
        let mut style = SeriesStyle::default();
        assert_eq!(style.format_value(2.5), "2.5");
        style.value_formatter = Some(Arc::new(DecimalFormatter { digits: 2 }));
        assert_eq!(style.format_value(2.5), "2.50");
    }
}
