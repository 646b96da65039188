// File: crates/voronoi-core/src/domain.rs
// Active data domain: visible ranges, autoscale and pixel pan.
//
// Layers compare domains by `Arc` identity, so panning produces a new value rather
// than mutating the shared one.

use crate::scale::Scale;
use crate::series::{flatten, Series};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Domain {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Domain {
    pub const fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self { x_min, x_max, y_min, y_max }
    }

    /// Fit all points of `dataset` with 2% vertical headroom. Uses `y + y0` when
    /// `stack` is set so stacked tops stay visible.
    pub fn from_dataset<D>(dataset: &[Series<D>], stack: bool) -> Self {
        let mut x_min = f64::INFINITY;
        let mut x_max = f64::NEG_INFINITY;
        let mut y_min = f64::INFINITY;
        let mut y_max = f64::NEG_INFINITY;
        for p in flatten(dataset) {
            let y = if stack { p.stacked_y() } else { p.y };
            x_min = x_min.min(p.x);
            x_max = x_max.max(p.x);
            y_min = y_min.min(y);
            y_max = y_max.max(y);
            if stack {
                let base = p.y0.unwrap_or(0.0);
                y_min = y_min.min(base);
            }
        }
        if !x_min.is_finite() || !x_max.is_finite() || !y_min.is_finite() || !y_max.is_finite() {
            return Self::new(0.0, 1.0, 0.0, 1.0);
        }
        if (x_max - x_min).abs() < 1e-9 { x_max = x_min + 1.0; }
        if (y_max - y_min).abs() < 1e-9 { y_max = y_min + 1.0; }
        let ym = (y_max - y_min) * 0.02;
        Self::new(x_min, x_max, y_min - ym, y_max + ym)
    }

    /// Shift by a pixel drag over a plot of `width` x `height`.
    pub fn panned_by_pixels(&self, dx: f64, dy: f64, width: f64, height: f64) -> Self {
        let wx = -dx / width.max(1.0) * (self.x_max - self.x_min);
        let wy = dy / height.max(1.0) * (self.y_max - self.y_min);
        Self::new(self.x_min + wx, self.x_max + wx, self.y_min + wy, self.y_max + wy)
    }

    pub fn x_scale(&self, width: f64) -> Scale {
        Scale::new_linear(0.0, width, self.x_min, self.x_max)
    }

    /// Y grows upwards in data space and downwards on screen.
    pub fn y_scale(&self, height: f64) -> Scale {
        Scale::new_linear(height, 0.0, self.y_min, self.y_max)
    }

    pub fn y_scale_log10(&self, height: f64) -> Scale {
        Scale::new_log10(height, 0.0, self.y_min, self.y_max)
    }
}
