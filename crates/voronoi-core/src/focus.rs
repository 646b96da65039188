// File: crates/voronoi-core/src/focus.rs
// Summary: Crosshair + ring marker that follows the hovered point.

use skia_safe as skia;

use crate::types::{ScreenPoint, OFFSCREEN};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FocusStyle {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub stroke_width: f32,
    pub stroke_opacity: f32,
}

impl Default for FocusStyle {
    fn default() -> Self {
        Self { inner_radius: 3.0, outer_radius: 7.0, stroke_width: 2.0, stroke_opacity: 0.5 }
    }
}

/// Exists for as long as focus mode is on; hover callbacks move it around.
#[derive(Clone, Debug)]
pub struct FocusIndicator {
    position: ScreenPoint,
    height: f64,
    style: FocusStyle,
}

impl FocusIndicator {
    /// The vertical line spans `[-height, +height]` around the marker.
    pub fn new(height: f64) -> Self {
        Self { position: OFFSCREEN, height, style: FocusStyle::default() }
    }

    pub fn reposition(&mut self, x: f64, y: f64) {
        self.position = ScreenPoint::new(x, y);
    }

    /// Park the marker off-canvas again.
    pub fn hide(&mut self) {
        self.position = OFFSCREEN;
    }

    pub fn position(&self) -> ScreenPoint { self.position }
    pub fn is_visible(&self) -> bool { self.position != OFFSCREEN }
    pub fn height(&self) -> f64 { self.height }
    pub fn style(&self) -> &FocusStyle { &self.style }

    pub(crate) fn set_height(&mut self, height: f64) {
        self.height = height;
    }

    /// Draw at the current position; `canvas` is expected in plot coordinates.
    pub fn draw(&self, canvas: &skia::Canvas, color: skia::Color) {
        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(self.style.stroke_width);
        stroke.set_color(color);
        stroke.set_alpha_f(self.style.stroke_opacity);

        let mut fill = skia::Paint::default();
        fill.set_anti_alias(true);
        fill.set_style(skia::paint::Style::Fill);
        fill.set_color(color);

        let h = self.height as f32;
        canvas.save();
        canvas.translate((self.position.x as f32, self.position.y as f32));
        canvas.draw_line((0.0, -h), (0.0, h), &stroke);
        canvas.draw_circle((0.0, 0.0), self.style.outer_radius, &stroke);
        canvas.draw_circle((0.0, 0.0), self.style.inner_radius, &fill);
        canvas.restore();
    }
}
