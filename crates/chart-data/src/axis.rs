// File: crates/chart-data/src/axis.rs
// Summary: Axis affinity tag and the min/max range tracked per y-axis.

use serde::{Deserialize, Serialize};

/// Which of the two y-axes a series' values are plotted against.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AxisDependency {
    #[default]
    Left,
    Right,
}

/// Closed value range `[min, max]` for one axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    pub const ZERO: Self = Self { min: 0.0, max: 0.0 };

    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Grow the range so it also covers `[min, max]`. Never shrinks.
    #[inline]
    pub fn widen(&mut self, min: f64, max: f64) {
        if min < self.min { self.min = min; }
        if max > self.max { self.max = max; }
    }

    #[inline]
    pub fn widen_to(&mut self, value: f64) {
        self.widen(value, value);
    }

    pub fn span(&self) -> f64 { self.max - self.min }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn widen_never_shrinks() {
        let mut r = AxisRange::new(1.0, 5.0);
        r.widen(2.0, 4.0);
        assert_eq!(r, AxisRange::new(1.0, 5.0));
        r.widen_to(-3.0);
        r.widen_to(10.0);
        assert_eq!(r, AxisRange::new(-3.0, 10.0));
        assert_eq!(r.span(), 13.0);
    }
}
