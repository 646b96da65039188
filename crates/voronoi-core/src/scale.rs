// File: crates/voronoi-core/src/scale.rs
// Summary: Data-to-screen scale functions (linear and log10) handed to the partition builder.

use std::sync::Arc;

/// Caller-supplied mapping from a data value to a screen coordinate.
pub type ScaleFn = Arc<dyn Fn(f64) -> f64>;

/// Maps a data range onto a pixel range; `to_px(min) == start_px`, `to_px(max) == end_px`.
/// Y scales pass `start_px = height, end_px = 0.0` so larger values sit higher.
#[derive(Clone, Copy, Debug)]
pub struct Scale {
    pub start_px: f64,
    pub end_px: f64,
    pub vmin: f64,
    pub vmax: f64,
    pub log: bool,
    // cached log endpoints when log is true
    log_min: f64,
    log_max: f64,
}

impl Scale {
    pub fn new_linear(start_px: f64, end_px: f64, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { start_px, end_px, vmin, vmax, log: false, log_min: 0.0, log_max: 0.0 };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    pub fn new_log10(start_px: f64, end_px: f64, mut vmin: f64, mut vmax: f64) -> Self {
        // Ensure strictly positive range for log scale
        let eps = 1e-12;
        vmin = if vmin <= eps { eps } else { vmin };
        vmax = if vmax <= vmin { vmin * 10.0 } else { vmax };
        Self { start_px, end_px, vmin, vmax, log: true, log_min: vmin.log10(), log_max: vmax.log10() }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        let frac = if self.log {
            let span = (self.log_max - self.log_min).max(1e-12);
            (v.max(1e-12).log10() - self.log_min) / span
        } else {
            (v - self.vmin) / (self.vmax - self.vmin)
        };
        self.start_px + frac * (self.end_px - self.start_px)
    }

    #[inline]
    pub fn from_px(&self, px: f64) -> f64 {
        let range = self.end_px - self.start_px;
        let frac = if range.abs() < 1e-12 { 0.0 } else { (px - self.start_px) / range };
        if self.log {
            10f64.powf(self.log_min + frac * (self.log_max - self.log_min))
        } else {
            self.vmin + frac * (self.vmax - self.vmin)
        }
    }

    /// Freeze this scale into the closure form the overlay consumes.
    pub fn into_fn(self) -> ScaleFn {
        Arc::new(move |v: f64| self.to_px(v))
    }
}

/// 1:1 mapping, handy when data is already in screen units.
pub fn identity() -> ScaleFn {
    Arc::new(|v: f64| v)
}
