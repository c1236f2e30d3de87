// File: crates/bairro-chart/src/theme.rs
// Summary: Colour themes for axes, gridlines, bars, the timeline stroke and labels.

use skia_safe as skia;

#[derive(Clone, Copy, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub axis_line: skia::Color,
    pub grid: skia::Color,
    pub tick_label: skia::Color,
    pub category_label: skia::Color,
    pub legend_label: skia::Color,
    /// First bar of each group (male counts).
    pub series_a: skia::Color,
    /// Second bar of each group (female counts).
    pub series_b: skia::Color,
    pub line_stroke: skia::Color,
    pub marker: skia::Color,
}

impl Theme {
    /// Colours of the neighbourhood page.
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::WHITE,
            axis_line: skia::Color::BLACK,
            grid: skia::Color::from_rgb(0xcc, 0xcc, 0xcc),
            tick_label: skia::Color::BLACK,
            category_label: skia::Color::BLACK,
            legend_label: skia::Color::BLACK,
            series_a: skia::Color::from_rgb(0, 0, 255),
            series_b: skia::Color::from_rgb(255, 0, 0),
            line_stroke: skia::Color::from_rgb(0x4a, 0x90, 0xe2),
            marker: skia::Color::from_rgb(0x4a, 0x90, 0xe2),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            tick_label: skia::Color::from_argb(255, 150, 150, 160),
            category_label: skia::Color::from_argb(255, 235, 235, 245),
            legend_label: skia::Color::from_argb(255, 235, 235, 245),
            series_a: skia::Color::from_argb(255, 64, 160, 255),
            series_b: skia::Color::from_argb(255, 220, 80, 80),
            line_stroke: skia::Color::from_argb(255, 64, 160, 255),
            marker: skia::Color::from_argb(255, 96, 176, 255),
        }
    }

    pub fn high_contrast() -> Self {
        Self {
            name: "high-contrast",
            background: skia::Color::from_rgb(0x00, 0x00, 0x00),
            axis_line: skia::Color::from_rgb(0xff, 0xff, 0xff),
            grid: skia::Color::from_rgb(0x44, 0x44, 0x44),
            tick_label: skia::Color::from_rgb(0xff, 0xff, 0xff),
            category_label: skia::Color::from_rgb(0xff, 0xff, 0xff),
            legend_label: skia::Color::from_rgb(0xff, 0xff, 0xff),
            series_a: skia::Color::from_rgb(0x00, 0xff, 0xff),
            series_b: skia::Color::from_rgb(0xff, 0xff, 0x00),
            line_stroke: skia::Color::from_rgb(0x00, 0xff, 0x00),
            marker: skia::Color::from_rgb(0xff, 0xff, 0xff),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}

/// Built-in presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark(), Theme::high_contrast()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_default()
}
