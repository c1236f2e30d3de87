// File: crates/bairro-chart/src/geometry.rs
// Summary: Pixel math for the chart area, category slots, bar pairs and line points.

use crate::types::Insets;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// True when the two rectangles share interior area (touching edges do not count).
    pub fn overlaps_x(&self, other: &RectF) -> bool {
        self.left < other.right && other.left < self.right
    }

    pub fn to_skia(&self) -> skia_safe::Rect {
        skia_safe::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// Drawable region: the surface minus the padding band on every side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartArea {
    pub rect: RectF,
}

impl ChartArea {
    /// Returns `None` when the padding swallows the whole surface.
    pub fn new(width: i32, height: i32, insets: &Insets) -> Option<Self> {
        let w = width as f32 - insets.hsum();
        let h = height as f32 - insets.vsum();
        if !(w > 0.0 && h > 0.0) {
            return None;
        }
        Some(Self { rect: RectF::from_ltwh(insets.left, insets.top, w, h) })
    }

    pub fn left(&self) -> f32 { self.rect.left }
    pub fn right(&self) -> f32 { self.rect.right }
    pub fn top(&self) -> f32 { self.rect.top }
    /// The x axis; values are measured up from here.
    pub fn baseline(&self) -> f32 { self.rect.bottom }
    pub fn width(&self) -> f32 { self.rect.width() }
    pub fn height(&self) -> f32 { self.rect.height() }

    /// Horizontal slot width when `count` categories share the area.
    pub fn slot_width(&self, count: usize) -> f32 {
        self.width() / count.max(1) as f32
    }

    pub fn slot_left(&self, index: usize, count: usize) -> f32 {
        self.left() + index as f32 * self.slot_width(count)
    }

    /// y pixel of a bar/point whose extent above the baseline is `extent`.
    pub fn y_for_extent(&self, extent: f32) -> f32 {
        self.baseline() - extent
    }
}

/// Fractions of the slot width used to lay out the two bars of a group.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarLayout {
    /// Width of each bar relative to the slot.
    pub bar_fraction: f32,
    /// Left edge of the first bar relative to the slot.
    pub first_offset: f32,
    /// Left edge of the second bar relative to the slot.
    pub second_offset: f32,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self { bar_fraction: 0.35, first_offset: 0.10, second_offset: 0.55 }
    }
}

/// The two side-by-side bars of one category slot, before heights are applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BarGroup {
    pub first_left: f32,
    pub second_left: f32,
    pub bar_width: f32,
}

impl BarGroup {
    pub fn for_slot(slot_left: f32, slot_width: f32, layout: &BarLayout) -> Self {
        Self {
            first_left: slot_left + slot_width * layout.first_offset,
            second_left: slot_left + slot_width * layout.second_offset,
            bar_width: slot_width * layout.bar_fraction,
        }
    }

    /// Horizontal space left between the two bars.
    pub fn inner_gap(&self) -> f32 {
        self.second_left - (self.first_left + self.bar_width)
    }

    pub fn first_rect(&self, baseline: f32, extent: f32) -> RectF {
        RectF::from_ltrb(self.first_left, baseline - extent, self.first_left + self.bar_width, baseline)
    }

    pub fn second_rect(&self, baseline: f32, extent: f32) -> RectF {
        RectF::from_ltrb(self.second_left, baseline - extent, self.second_left + self.bar_width, baseline)
    }
}

/// x pixel of point `index` in a polyline of `count` points spanning the area.
/// Callers guarantee `count >= 2`.
pub fn line_point_x(area: &ChartArea, index: usize, count: usize) -> f32 {
    let step = area.width() / (count - 1) as f32;
    area.left() + index as f32 * step
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn chart_area_subtracts_padding_everywhere() {
        let area = ChartArea::new(1300, 500, &Insets::uniform(60.0)).unwrap();
        assert_relative_eq!(area.width(), 1180.0);
        assert_relative_eq!(area.height(), 380.0);
        assert_relative_eq!(area.baseline(), 440.0);
    }

    #[test]
    fn chart_area_rejects_oversized_padding() {
        assert!(ChartArea::new(100, 100, &Insets::uniform(60.0)).is_none());
    }

    #[test]
    fn bar_group_leaves_gaps() {
        let g = BarGroup::for_slot(60.0, 100.0, &BarLayout::default());
        assert_relative_eq!(g.bar_width, 35.0);
        assert_relative_eq!(g.first_left, 70.0);
        assert_relative_eq!(g.second_left, 115.0);
        assert_relative_eq!(g.inner_gap(), 10.0);
        // 20% of the slot separates neighbouring groups
        let next = BarGroup::for_slot(160.0, 100.0, &BarLayout::default());
        assert_relative_eq!(next.first_left - (g.second_left + g.bar_width), 20.0);
    }

    #[test]
    fn line_points_span_the_area() {
        let area = ChartArea::new(1300, 500, &Insets::uniform(60.0)).unwrap();
        assert_relative_eq!(line_point_x(&area, 0, 3), 60.0);
        assert_relative_eq!(line_point_x(&area, 1, 3), 650.0);
        assert_relative_eq!(line_point_x(&area, 2, 3), 1240.0);
    }

    proptest! {
        #[test]
        fn bar_pairs_never_overlap(width in 0.01f32..1e4, index in 0usize..50) {
            let layout = BarLayout::default();
            let slot_left = 60.0 + index as f32 * width;
            let g = BarGroup::for_slot(slot_left, width, &layout);
            let next = BarGroup::for_slot(slot_left + width, width, &layout);

            let first = g.first_rect(440.0, 100.0);
            let second = g.second_rect(440.0, 100.0);
            prop_assert!(!first.overlaps_x(&second));
            prop_assert!(!second.overlaps_x(&next.first_rect(440.0, 100.0)));
            prop_assert!(!first.overlaps_x(&next.second_rect(440.0, 100.0)));
            prop_assert!(g.inner_gap() > 0.0);
            prop_assert!((g.bar_width - 0.35 * width).abs() <= width * 1e-6);
        }
    }
}
