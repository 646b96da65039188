// File: crates/voronoi-core/src/theme.rs
// Summary: Light/Dark theming for the overlay's debug rendering and focus indicator.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub cell_stroke: skia::Color,
    pub cell_hover: skia::Color,
    pub site: skia::Color,
    pub focus: skia::Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            cell_stroke: skia::Color::from_argb(255, 40, 40, 45),
            cell_hover: skia::Color::from_argb(48, 64, 160, 255),
            site: skia::Color::from_argb(255, 64, 160, 255),
            focus: skia::Color::from_argb(255, 255, 230, 70),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            cell_stroke: skia::Color::from_argb(255, 230, 230, 235),
            cell_hover: skia::Color::from_argb(48, 32, 120, 200),
            site: skia::Color::from_argb(255, 32, 120, 200),
            focus: skia::Color::from_argb(255, 30, 120, 240),
        }
    }

    pub fn high_contrast_dark() -> Self {
        Self {
            name: "high-contrast-dark",
            background: skia::Color::from_argb(255, 0x00, 0x00, 0x00),
            cell_stroke: skia::Color::from_argb(255, 0x44, 0x44, 0x44),
            cell_hover: skia::Color::from_argb(80, 0x00, 0xaa, 0xff),
            site: skia::Color::from_argb(255, 0x00, 0xff, 0xff),
            focus: skia::Color::from_argb(255, 0xff, 0xff, 0x00),
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light(), Theme::high_contrast_dark()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::dark()
}
