// File: crates/voronoi-core/src/overlay.rs
// Summary: Invisible hit regions (one closed path per cell) and hover enter/leave routing.

use skia_safe as skia;

use crate::focus::FocusIndicator;
use crate::partition::Cell;
use crate::series::Point;
use crate::theme::Theme;
use crate::types::ScreenPoint;

/// Slack (px) for pointers that land exactly on a shared edge.
const BOUNDARY_TOL: f64 = 1e-6;

/// What a hover callback receives.
///
/// `focus` and `stack` are only set when the layer runs in focus mode; otherwise the
/// callback gets just the point.
pub struct HoverEvent<'a, D> {
    pub point: &'a Point<D>,
    /// Screen position of the hovered point.
    pub site: ScreenPoint,
    pub focus: Option<&'a mut FocusIndicator>,
    pub stack: Option<bool>,
}

pub type HoverFn<D> = Box<dyn FnMut(HoverEvent<'_, D>)>;

pub struct HoverCallbacks<D> {
    pub on_mouse_over: HoverFn<D>,
    pub on_mouse_out: HoverFn<D>,
}

impl<D> Default for HoverCallbacks<D> {
    fn default() -> Self {
        Self { on_mouse_over: Box::new(|_| {}), on_mouse_out: Box::new(|_| {}) }
    }
}

impl<D> HoverCallbacks<D> {
    pub fn new() -> Self { Self::default() }

    pub fn on_mouse_over(mut self, f: impl FnMut(HoverEvent<'_, D>) + 'static) -> Self {
        self.on_mouse_over = Box::new(f);
        self
    }

    pub fn on_mouse_out(mut self, f: impl FnMut(HoverEvent<'_, D>) + 'static) -> Self {
        self.on_mouse_out = Box::new(f);
        self
    }

    /// Move the focus indicator onto the hovered point, park it again on leave.
    pub fn track_focus() -> Self {
        Self::new()
            .on_mouse_over(|ev| {
                if let Some(focus) = ev.focus {
                    focus.reposition(ev.site.x, ev.site.y);
                }
            })
            .on_mouse_out(|ev| {
                if let Some(focus) = ev.focus {
                    focus.hide();
                }
            })
    }
}

/// A cell plus the closed path used to hit-test and draw it.
pub struct HitRegion<D> {
    cell: Cell<D>,
    path: skia::Path,
}

impl<D> HitRegion<D> {
    fn new(cell: Cell<D>) -> Self {
        let mut path = skia::Path::new();
        if let Some((first, rest)) = cell.polygon.split_first() {
            path.move_to((first.x as f32, first.y as f32));
            for v in rest {
                path.line_to((v.x as f32, v.y as f32));
            }
            path.close();
        }
        Self { cell, path }
    }

    pub fn cell(&self) -> &Cell<D> { &self.cell }
    pub fn path(&self) -> &skia::Path { &self.path }

    pub fn contains(&self, p: ScreenPoint) -> bool {
        self.path.contains((p.x as f32, p.y as f32))
    }
}

/// The current set of hit regions. Contents are only ever replaced wholesale.
pub struct HitOverlay<D> {
    regions: Vec<HitRegion<D>>,
    hovered: Option<usize>,
    callbacks: HoverCallbacks<D>,
    generation: u64,
}

impl<D> HitOverlay<D> {
    pub fn new(callbacks: HoverCallbacks<D>) -> Self {
        Self { regions: Vec::new(), hovered: None, callbacks, generation: 0 }
    }

    pub fn set_callbacks(&mut self, callbacks: HoverCallbacks<D>) {
        self.callbacks = callbacks;
    }

    /// Drop every region. Removed shapes emit no leave event, so hover state is reset
    /// without calling back.
    pub fn clear(&mut self) {
        self.regions.clear();
        self.hovered = None;
    }

    /// Replace the contents with one region per cell (clearing first).
    pub fn set_cells(&mut self, cells: Vec<Cell<D>>) {
        self.clear();
        self.regions = cells.into_iter().map(HitRegion::new).collect();
        self.generation += 1;
    }

    /// Number of times contents were replaced.
    pub fn generation(&self) -> u64 { self.generation }
    pub fn regions(&self) -> &[HitRegion<D>] { &self.regions }
    pub fn len(&self) -> usize { self.regions.len() }
    pub fn is_empty(&self) -> bool { self.regions.is_empty() }

    pub fn cells(&self) -> impl Iterator<Item = &Cell<D>> {
        self.regions.iter().map(|r| &r.cell)
    }

    pub fn hovered(&self) -> Option<&Cell<D>> {
        self.hovered.map(|i| &self.regions[i].cell)
    }

    /// Index of the region under `(x, y)`.
    pub fn hit_test(&self, x: f64, y: f64) -> Option<usize> {
        let p = ScreenPoint::new(x, y);
        self.regions
            .iter()
            .position(|r| r.contains(p))
            .or_else(|| self.regions.iter().position(|r| r.cell.contains(p, BOUNDARY_TOL)))
    }

    /// Route a pointer position: fires `on_mouse_out` for the region being left, then
    /// `on_mouse_over` for the one entered. Passing `focus` selects focus mode.
    pub fn pointer_move(&mut self, x: f64, y: f64, mut focus: Option<&mut FocusIndicator>, stack: bool) -> Option<&Cell<D>> {
        let next = self.hit_test(x, y);
        if next != self.hovered {
            if let Some(prev) = self.hovered.take() {
                self.emit_out(prev, focus.as_deref_mut(), stack);
            }
            if let Some(idx) = next {
                self.emit_over(idx, focus.as_deref_mut(), stack);
            }
            self.hovered = next;
        }
        self.hovered()
    }

    /// Pointer left the overlay entirely.
    pub fn pointer_leave(&mut self, focus: Option<&mut FocusIndicator>, stack: bool) {
        if let Some(prev) = self.hovered.take() {
            self.emit_out(prev, focus, stack);
        }
    }

    fn emit_over(&mut self, idx: usize, focus: Option<&mut FocusIndicator>, stack: bool) {
        let cell = &self.regions[idx].cell;
        tracing::trace!("hover: enter cell {} at ({:.1}, {:.1})", idx, cell.site.x, cell.site.y);
        let stack = focus.is_some().then_some(stack);
        (self.callbacks.on_mouse_over)(HoverEvent { point: &cell.point, site: cell.site, focus, stack });
    }

    fn emit_out(&mut self, idx: usize, focus: Option<&mut FocusIndicator>, stack: bool) {
        let cell = &self.regions[idx].cell;
        tracing::trace!("hover: leave cell {}", idx);
        let stack = focus.is_some().then_some(stack);
        (self.callbacks.on_mouse_out)(HoverEvent { point: &cell.point, site: cell.site, focus, stack });
    }

    /// Draw the regions. They are invisible unless `show_cells` is set, in which case
    /// outlines, sites and the hovered cell are painted for debugging.
    pub fn draw(&self, canvas: &skia::Canvas, theme: &Theme, show_cells: bool) {
        let mut hidden = skia::Paint::default();
        hidden.set_style(skia::paint::Style::Fill);
        hidden.set_color(skia::Color::TRANSPARENT);
        for r in &self.regions {
            canvas.draw_path(&r.path, &hidden);
        }
        if !show_cells {
            return;
        }

        if let Some(i) = self.hovered {
            let mut hover = skia::Paint::default();
            hover.set_anti_alias(true);
            hover.set_style(skia::paint::Style::Fill);
            hover.set_color(theme.cell_hover);
            canvas.draw_path(&self.regions[i].path, &hover);
        }

        let mut stroke = skia::Paint::default();
        stroke.set_anti_alias(true);
        stroke.set_style(skia::paint::Style::Stroke);
        stroke.set_stroke_width(1.0);
        stroke.set_color(theme.cell_stroke);

        let mut dot = skia::Paint::default();
        dot.set_anti_alias(true);
        dot.set_color(theme.site);

        for r in &self.regions {
            canvas.draw_path(&r.path, &stroke);
            canvas.draw_circle((r.cell.site.x as f32, r.cell.site.y as f32), 2.0, &dot);
        }
    }
}
