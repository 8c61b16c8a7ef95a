// File: crates/trend-core/src/theme.rs
// Summary: Color presets for the grid, titles, trend line, markers and tooltip.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub title: skia::Color,
    pub trend_line: skia::Color,
    pub marker: skia::Color,
    pub highlight: skia::Color,
    pub tooltip: skia::Color,
}

impl Theme {
    /// Translucent green table, red trend, yellow highlight.
    pub fn classic() -> Self {
        Self {
            name: "classic",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(120, 0, 200, 55),
            title: skia::Color::from_argb(120, 0, 200, 55),
            trend_line: skia::Color::from_argb(255, 255, 0, 0),
            marker: skia::Color::from_argb(255, 255, 0, 0),
            highlight: skia::Color::from_argb(100, 200, 200, 0),
            tooltip: skia::Color::from_argb(255, 255, 255, 255),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 250, 250, 252),
            grid: skia::Color::from_argb(255, 210, 215, 220),
            title: skia::Color::from_argb(255, 90, 90, 100),
            trend_line: skia::Color::from_argb(255, 32, 120, 200),
            marker: skia::Color::from_argb(255, 32, 120, 200),
            highlight: skia::Color::from_argb(90, 30, 120, 240),
            tooltip: skia::Color::from_argb(255, 20, 20, 30),
        }
    }

    pub fn solarized_dark() -> Self {
        Self {
            name: "solarized-dark",
            background: skia::Color::from_argb(255, 0x00, 0x2b, 0x36), // base03
            grid: skia::Color::from_argb(255, 0x07, 0x36, 0x42),       // base02
            title: skia::Color::from_argb(255, 0x83, 0x94, 0x96),      // base0
            trend_line: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f), // red
            marker: skia::Color::from_argb(255, 0xdc, 0x32, 0x2f),
            highlight: skia::Color::from_argb(110, 0xb5, 0x89, 0x00),  // yellow
            tooltip: skia::Color::from_argb(255, 0xee, 0xe8, 0xd5),    // base2
        }
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::classic(), Theme::light(), Theme::solarized_dark()]
}

/// Find a theme by its `name`, falling back to classic.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    log::warn!("unknown theme '{name}', using classic");
    Theme::classic()
}
