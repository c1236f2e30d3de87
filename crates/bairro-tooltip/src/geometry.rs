// File: crates/bairro-tooltip/src/geometry.rs
// Summary: Bounding boxes and the viewport snapshot the placement math works from.

use serde::{Deserialize, Serialize};

/// Axis-aligned box in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }
    pub fn right(&self) -> f64 { self.left + self.width }
    pub fn bottom(&self) -> f64 { self.top + self.height }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self { left: self.left + dx, top: self.top + dy, ..*self }
    }
}

/// Window state at the moment of a placement.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// `innerWidth`
    pub width: f64,
    /// `innerHeight`
    pub height: f64,
    pub scroll_x: f64,
    pub scroll_y: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height, scroll_x: 0.0, scroll_y: 0.0 }
    }

    pub fn scrolled(self, scroll_x: f64, scroll_y: f64) -> Self {
        Self { scroll_x, scroll_y, ..self }
    }

    /// Viewport-relative box to document coordinates.
    pub fn to_document(&self, client: &Rect) -> Rect {
        client.translate(self.scroll_x, self.scroll_y)
    }

    /// Document box to viewport-relative coordinates.
    pub fn to_client(&self, document: &Rect) -> Rect {
        document.translate(-self.scroll_x, -self.scroll_y)
    }
}
