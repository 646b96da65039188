// File: crates/voronoi-core/src/layer.rs
// Summary: Mounted Voronoi layer (overlay + optional focus + rebuild policy) and its PNG debug renderer.

use anyhow::Result;
use skia_safe as skia;

use crate::config::VoronoiProps;
use crate::dedup::dedup;
use crate::focus::FocusIndicator;
use crate::overlay::{HitOverlay, HoverCallbacks};
use crate::partition::Cell;
use crate::rebuild::{RebuildController, RebuildDecision, RebuildState};
use crate::theme::Theme;

pub struct RenderOptions {
    pub theme: Theme,
    /// Paint cell outlines and sites instead of leaving the regions invisible.
    pub show_cells: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self { theme: Theme::dark(), show_cells: true }
    }
}

/// The hover layer of a chart: hit regions for the current dataset plus the focus
/// indicator when focus mode is on.
pub struct VoronoiLayer<D> {
    props: VoronoiProps<D>,
    overlay: HitOverlay<D>,
    focus: Option<FocusIndicator>,
    controller: RebuildController<D>,
}

impl<D: Clone + 'static> VoronoiLayer<D> {
    /// Create the layer and build the partition for the initial props.
    pub fn mount(props: VoronoiProps<D>, callbacks: HoverCallbacks<D>) -> Self {
        let focus = props.focus.then(|| FocusIndicator::new(props.height));
        let mut layer = Self {
            props,
            overlay: HitOverlay::new(callbacks),
            focus,
            controller: RebuildController::new(),
        };
        let decision = layer.controller.observe(&layer.props.domain, &layer.props.dataset);
        layer.apply(decision);
        layer
    }

    /// Take new props. The partition is rebuilt only when the domain or dataset is a
    /// different object than last time.
    pub fn update(&mut self, props: VoronoiProps<D>) -> RebuildDecision {
        self.props = props;
        self.sync_focus();
        let decision = self.controller.observe(&self.props.domain, &self.props.dataset);
        self.apply(decision);
        decision
    }

    pub fn unmount(mut self) {
        self.overlay.clear();
        self.focus = None;
        self.controller.reset();
        tracing::debug!("voronoi layer unmounted");
    }

    fn apply(&mut self, decision: RebuildDecision) {
        if let RebuildDecision::Rebuild(_) = decision {
            debug_assert_eq!(self.controller.state(), RebuildState::Rebuilding);
            self.overlay.clear();
            // no region is hovered any more, so the marker starts parked
            if let Some(f) = self.focus.as_mut() {
                f.hide();
            }
            let points = dedup(&self.props.dataset);
            let cells = self.props.partition_builder().build(&points);
            self.overlay.set_cells(cells);
            self.controller.finish();
        }
    }

    /// Focus indicator exists exactly while the flag is set.
    fn sync_focus(&mut self) {
        if !self.props.focus {
            self.focus = None;
        } else if let Some(f) = self.focus.as_mut() {
            f.set_height(self.props.height);
        } else {
            self.focus = Some(FocusIndicator::new(self.props.height));
        }
    }

    pub fn pointer_move(&mut self, x: f64, y: f64) -> Option<&Cell<D>> {
        let stack = self.props.stack;
        self.overlay.pointer_move(x, y, self.focus.as_mut(), stack)
    }

    pub fn pointer_leave(&mut self) {
        let stack = self.props.stack;
        self.overlay.pointer_leave(self.focus.as_mut(), stack);
    }

    pub fn set_callbacks(&mut self, callbacks: HoverCallbacks<D>) {
        self.overlay.set_callbacks(callbacks);
    }

    pub fn props(&self) -> &VoronoiProps<D> { &self.props }
    pub fn overlay(&self) -> &HitOverlay<D> { &self.overlay }
    pub fn focus(&self) -> Option<&FocusIndicator> { self.focus.as_ref() }
    pub fn state(&self) -> RebuildState { self.controller.state() }
    pub fn rebuilds(&self) -> u64 { self.controller.rebuilds() }

    pub fn cells(&self) -> impl Iterator<Item = &Cell<D>> {
        self.overlay.cells()
    }

    /// Draw onto a canvas whose origin is the top-left of the plot area.
    pub fn draw(&self, canvas: &skia::Canvas, opts: &RenderOptions) {
        self.overlay.draw(canvas, &opts.theme, opts.show_cells);
        if let Some(f) = &self.focus {
            f.draw(canvas, opts.theme.focus);
        }
    }

    /// Render the plot plus margins to PNG bytes using a CPU raster surface.
    pub fn render_to_png_bytes(&self, opts: &RenderOptions) -> Result<Vec<u8>> {
        let m = &self.props.margins;
        let w = (self.props.width + m.hsum()).ceil().max(1.0) as i32;
        let h = (self.props.height + m.vsum()).ceil().max(1.0) as i32;
        let mut surface = skia::surfaces::raster_n32_premul((w, h))
            .ok_or_else(|| anyhow::anyhow!("failed to create raster surface"))?;
        let canvas = surface.canvas();
        canvas.clear(opts.theme.background);

        canvas.save();
        canvas.translate((m.left as f32, m.top as f32));
        self.draw(canvas, opts);
        canvas.restore();

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| anyhow::anyhow!("encode PNG failed"))?;
        Ok(data.as_bytes().to_vec())
    }

    pub fn render_to_png(&self, opts: &RenderOptions, output_png_path: impl AsRef<std::path::Path>) -> Result<()> {
        let bytes = self.render_to_png_bytes(opts)?;
        if let Some(parent) = output_png_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_png_path, bytes)?;
        Ok(())
    }
}
