// File: crates/voronoi-core/src/types.rs
// Summary: Shared types and constants (plot sizes, margins, clip rectangle, screen points).

/// Default plot width in pixels.
pub const WIDTH: f64 = 960.0;
/// Default plot height in pixels.
pub const HEIGHT: f64 = 540.0;

/// Where the focus indicator parks until the first hover relocates it.
pub const OFFSCREEN: ScreenPoint = ScreenPoint { x: -100.0, y: -100.0 };

/// A position in screen space (pixels, y grows downwards).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_sq(&self, other: &ScreenPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for ScreenPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Outward offsets around the plot area, in pixels.
/// Contract: all fields are finite (checked when props are built).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0, 0.0)
    }
    /// Total horizontal margin (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }

    pub fn is_finite(&self) -> bool {
        self.top.is_finite() && self.right.is_finite() && self.bottom.is_finite() && self.left.is_finite()
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(24.0, 24.0, 56.0, 72.0)
    }
}

/// Rectangle every partition cell is clipped to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipRect {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl ClipRect {
    pub const fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self { min_x, min_y, max_x, max_y }
    }

    /// Plot rectangle `[0, width] x [0, height]` grown outward by `margins`, so the
    /// margin band still resolves to the nearest interior point.
    pub fn from_plot(width: f64, height: f64, margins: &Margins) -> Self {
        // + 0.0 folds -0.0 so zero margins print as "0"
        Self {
            min_x: -margins.left + 0.0,
            min_y: -margins.top + 0.0,
            max_x: width + margins.right,
            max_y: height + margins.bottom,
        }
    }

    pub fn width(&self) -> f64 { self.max_x - self.min_x }
    pub fn height(&self) -> f64 { self.max_y - self.min_y }
    pub fn area(&self) -> f64 { self.width() * self.height() }

    /// True when the rectangle encloses no area (or is inverted / non-finite).
    pub fn is_degenerate(&self) -> bool {
        !(self.width() > 0.0 && self.height() > 0.0 && self.area().is_finite())
    }

    pub fn contains(&self, p: ScreenPoint, tol: f64) -> bool {
        p.x >= self.min_x - tol && p.x <= self.max_x + tol && p.y >= self.min_y - tol && p.y <= self.max_y + tol
    }

    /// Corners in path order, starting at the top-left.
    pub fn corners(&self) -> [ScreenPoint; 4] {
        [
            ScreenPoint::new(self.min_x, self.min_y),
            ScreenPoint::new(self.max_x, self.min_y),
            ScreenPoint::new(self.max_x, self.max_y),
            ScreenPoint::new(self.min_x, self.max_y),
        ]
    }
}
