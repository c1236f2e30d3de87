// File: crates/bairro-chart/src/types.rs
// Summary: Shared constants (surface size, padding) and the padding band type.

/// Logical surface width in pixels. The host scales it visually with CSS,
/// the internal coordinate space stays fixed.
pub const WIDTH: i32 = 1300;
/// Logical surface height in pixels.
pub const HEIGHT: i32 = 500;
/// Band reserved on every side for tick labels, category labels and legend.
pub const PADDING: f32 = 60.0;

/// Padding band, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Same padding on all four sides.
    pub const fn uniform(p: f32) -> Self {
        Self::new(p, p, p, p)
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::uniform(PADDING)
    }
}
