// File: crates/voronoi-core/tests/snapshot.rs
// Purpose: Golden snapshot of the debug rendering (cell outlines + focus) with bless flow.
// Behavior:
// - Renders a deterministic small layer to PNG bytes.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.
// - Pixel checks on the focus marker and hovered cell run regardless of the golden file.

use std::sync::Arc;

use voronoi_core::scale::identity;
use voronoi_core::theme::{self, Theme};
use voronoi_core::{Domain, HoverCallbacks, Margins, Point, RenderOptions, Series, VoronoiLayer, VoronoiProps};

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn layer() -> VoronoiLayer<usize> {
    let pts = [(20.0, 30.0), (60.0, 80.0), (110.0, 20.0), (150.0, 90.0), (90.0, 50.0)];
    let data = vec![Series::with_data("s", pts.iter().enumerate().map(|(i, &(x, y))| Point::new(x, y, i)).collect())];
    let props = VoronoiProps::builder(Arc::new(data), Arc::new(Domain::new(0.0, 160.0, 0.0, 100.0)))
        .x_scale(identity())
        .y_scale(identity())
        .margins(Margins::new(10.0, 10.0, 10.0, 10.0))
        .size(160.0, 100.0)
        .focus(true)
        .build()
        .expect("valid props");
    let mut layer = VoronoiLayer::mount(props, HoverCallbacks::track_focus());
    layer.pointer_move(95.0, 55.0);
    layer
}

#[test]
fn render_produces_png() {
    let bytes = layer().render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!((img.width(), img.height()), (180, 120));
}

#[test]
fn golden_overlay_debug_view() {
    let bytes = layer().render_to_png_bytes(&RenderOptions::default()).expect("render bytes");
    let snap_path = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__/overlay_debug.png");

    if bless_mode() {
        if let Some(parent) = snap_path.parent() { std::fs::create_dir_all(parent).expect("create snapshots dir"); }
        std::fs::write(&snap_path, &bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), bytes.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read(&snap_path).expect("read snapshot");
        // Compare decoded pixel buffers to avoid PNG encoder variance
        let got_img = image::load_from_memory(&bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "rendered pixels differ from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
    }
}

#[test]
fn invisible_mode_shows_only_background_and_focus() {
    let mut opts = RenderOptions::default();
    opts.show_cells = false;
    let bytes = layer().render_to_png_bytes(&opts).expect("render bytes");
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    // far corner is untouched background
    let bg = opts.theme.background;
    let px = img.get_pixel(img.width() - 1, img.height() - 1);
    assert_eq!([px[0], px[1], px[2]], [bg.r(), bg.g(), bg.b()]);
}

fn render(show_cells: bool, theme: Theme) -> image::RgbaImage {
    let opts = RenderOptions { theme, show_cells };
    let bytes = layer().render_to_png_bytes(&opts).expect("render bytes");
    image::load_from_memory(&bytes).expect("decode").to_rgba8()
}

fn rgb(img: &image::RgbaImage, x: u32, y: u32) -> [u8; 3] {
    let px = img.get_pixel(x, y);
    [px[0], px[1], px[2]]
}

// Pointer at (95, 55) hovers the site at (90, 50); margins shift it to (100, 60) in the image.
const FOCUS_PX: (u32, u32) = (100, 60);
// Inside the hovered cell, clear of outlines and of the focus marker.
const HOVER_PX: (u32, u32) = (90, 55);

#[test]
fn focus_marker_and_hover_fill_land_on_hovered_site() {
    let t = Theme::dark();
    let shown = render(true, t);
    assert_eq!(rgb(&shown, FOCUS_PX.0, FOCUS_PX.1), [t.focus.r(), t.focus.g(), t.focus.b()]);
    assert_ne!(rgb(&shown, HOVER_PX.0, HOVER_PX.1), [t.background.r(), t.background.g(), t.background.b()]);

    let hidden = render(false, t);
    assert_eq!(rgb(&hidden, FOCUS_PX.0, FOCUS_PX.1), [t.focus.r(), t.focus.g(), t.focus.b()]);
    assert_eq!(rgb(&hidden, HOVER_PX.0, HOVER_PX.1), [t.background.r(), t.background.g(), t.background.b()]);
}

#[test]
fn every_preset_paints_its_own_colours() {
    let names: Vec<_> = theme::presets().iter().map(|t| t.name).collect();
    assert_eq!(names, vec!["dark", "light", "high-contrast-dark"]);
    for name in names {
        let t = theme::find(&name.to_uppercase());
        assert_eq!(t.name, name);
        let img = render(false, t);
        assert_eq!(rgb(&img, 0, 0), [t.background.r(), t.background.g(), t.background.b()]);
        assert_eq!(rgb(&img, FOCUS_PX.0, FOCUS_PX.1), [t.focus.r(), t.focus.g(), t.focus.b()]);
    }
    assert_eq!(theme::find("solarized").name, "dark");
}
