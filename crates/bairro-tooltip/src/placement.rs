// File: crates/bairro-tooltip/src/placement.rs
// Summary: Overlay geometry: 90% of the viewport wide, centred, sitting just above its target.

use serde::Deserialize;

use crate::geometry::{Rect, Viewport};

/// Visual style of the overlay node. The host applies it; the headless host
/// also uses `padding` and `font_size` to model text wrapping.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct OverlayStyle {
    pub background: String,
    pub color: String,
    pub padding: f64,
    pub border_radius: f64,
    pub font_size: f64,
    pub z_index: i32,
}

impl Default for OverlayStyle {
    fn default() -> Self {
        Self {
            background: "#6643b5".to_string(),
            color: "#fff".to_string(),
            padding: 10.0,
            border_radius: 6.0,
            font_size: 14.0,
            z_index: 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TooltipConfig {
    /// Overlay width relative to the viewport width.
    pub width_fraction: f64,
    /// Space between the overlay's bottom edge and the target's top edge.
    pub gap: f64,
    /// Keep the overlay's top at or below the document top. Off by default:
    /// targets near the top of the page get an overlay above the fold.
    pub clamp_top: bool,
    pub style: OverlayStyle,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self { width_fraction: 0.9, gap: 10.0, clamp_top: false, style: OverlayStyle::default() }
    }
}

impl TooltipConfig {
    pub fn overlay_width(&self, viewport_width: f64) -> f64 {
        viewport_width * self.width_fraction
    }
}

/// Absolute (document) position and width of the overlay.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
}

/// `target` is the viewport-relative bounding box; `overlay_height` the measured
/// height of the overlay at the width this returns.
pub fn compute_placement(viewport: &Viewport, target: &Rect, overlay_height: f64, config: &TooltipConfig) -> Placement {
    let width = config.overlay_width(viewport.width);
    let left = (viewport.width - width) / 2.0;
    let mut top = viewport.scroll_y + target.top - overlay_height - config.gap;
    if config.clamp_top {
        top = top.max(0.0);
    }
    Placement { left, top, width }
}
