// File: crates/meridian-core/src/scale.rs
// Summary: Per-series coordinate mapper: data extents to surface-space scale factors.

use crate::types::SurfaceSize;

/// Scale factors fitted to one series' data extents.
///
/// `fit` folds min/max over both components, then derives one factor per
/// axis so the data range fills the surface. A zero span (single distinct
/// value on an axis) maps with factor 1.0 so transforms stay finite; such
/// a series renders flat at the origin baseline.
#[derive(Clone, Copy, Debug)]
pub struct SeriesScale {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
    pub x_scale: f64,
    pub y_scale: f64,
}

impl SeriesScale {
    /// Fit scale factors for `data` on a surface. Returns `None` for an
    /// empty series (degenerate min/max).
    pub fn fit(data: &[(f64, f64)], surface: SurfaceSize) -> Option<Self> {
        if data.is_empty() {
            return None;
        }
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for &(x, y) in data {
            x_min = x_min.min(x);
            x_max = x_max.max(x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
        }
        Some(Self {
            x_min,
            x_max,
            y_min,
            y_max,
            x_scale: span_scale(surface.width as f64, x_max - x_min),
            y_scale: span_scale(surface.height as f64, y_max - y_min),
        })
    }

    /// Transform one data point into surface-space offsets from the origin.
    #[inline]
    pub fn transform(&self, point: (f64, f64)) -> (f64, f64) {
        (
            (point.0 - self.x_min) * self.x_scale,
            (point.1 - self.y_min) * self.y_scale,
        )
    }

    /// Transform a whole series, preserving input order exactly.
    pub fn transform_all(&self, data: &[(f64, f64)]) -> Vec<(f64, f64)> {
        data.iter().map(|&p| self.transform(p)).collect()
    }
}

#[inline]
fn span_scale(extent: f64, span: f64) -> f64 {
    if span == 0.0 { 1.0 } else { extent / span }
}
