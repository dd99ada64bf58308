// File: crates/meridian-core/src/series.rs
// Summary: Line series model: named (x, y) samples with a stroke color.

use crate::types::Rgb;

/// One plottable series. `data` may be empty; an empty series is skipped
/// at plot time instead of producing degenerate extents.
#[derive(Clone, Debug)]
pub struct Series {
    pub name: String,
    pub data: Vec<(f64, f64)>,
    pub color: Rgb,
}

impl Series {
    pub fn new(name: impl Into<String>, color: Rgb) -> Self {
        Self { name: name.into(), data: Vec::new(), color }
    }

    pub fn with_data(name: impl Into<String>, color: Rgb, data: Vec<(f64, f64)>) -> Self {
        Self { name: name.into(), data, color }
    }
}
