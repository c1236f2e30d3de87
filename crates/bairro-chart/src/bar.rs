// File: crates/bairro-chart/src/bar.rs
// Summary: Population pyramid painter: two bars per age bracket, legend in the top-right corner.

use skia_safe as skia;

use crate::chart::{BarChartOptions, Frame};
use crate::geometry::{BarGroup, RectF};
use crate::series::MultiSeriesDataset;
use crate::text::Align;

/// Legend anchor, measured from the right and top edges of the surface.
const LEGEND_RIGHT_OFFSET: f32 = 160.0;
const LEGEND_FIRST_BASELINE: f32 = 30.0;
const LEGEND_LINE_HEIGHT: f32 = 20.0;
const LEGEND_SWATCH: f32 = 12.0;

/// Returns the number of bars painted. Expects exactly two aligned series.
pub(crate) fn draw_population_pyramid(frame: &Frame<'_>, dataset: &MultiSeriesDataset, opts: &BarChartOptions) -> usize {
    let [first, second] = dataset.series() else {
        return 0;
    };
    let area = &frame.area;
    let count = dataset.category_count();
    let slot_width = area.slot_width(count);

    let mut fill_a = fill_paint(frame.opts.theme.series_a);
    fill_a.set_anti_alias(true);
    let mut fill_b = fill_paint(frame.opts.theme.series_b);
    fill_b.set_anti_alias(true);

    let mut bars = 0;
    let pairs = first.points().iter().zip(second.points());
    for (i, ((label, a), (_, b))) in pairs.enumerate() {
        let slot_left = area.slot_left(i, count);
        let group = BarGroup::for_slot(slot_left, slot_width, &opts.layout);

        let ra = group.first_rect(area.baseline(), frame.scale.height_of(*a, area.height()));
        let rb = group.second_rect(area.baseline(), frame.scale.height_of(*b, area.height()));
        frame.canvas.draw_rect(ra.to_skia(), &fill_a);
        frame.canvas.draw_rect(rb.to_skia(), &fill_b);
        bars += 2;

        frame.category_label(label, &opts.label_suffix, slot_left + slot_width * 0.5);
    }

    draw_legend(frame, opts, [frame.opts.theme.series_a, frame.opts.theme.series_b]);
    bars
}

fn fill_paint(color: skia::Color) -> skia::Paint {
    let mut p = skia::Paint::default();
    p.set_style(skia::paint::Style::Fill);
    p.set_color(color);
    p
}

/// Colour swatch plus label for each series, stacked at a fixed top-right position.
fn draw_legend(frame: &Frame<'_>, opts: &BarChartOptions, colors: [skia::Color; 2]) {
    let x = frame.width as f32 - LEGEND_RIGHT_OFFSET;
    for (i, (label, color)) in opts.legend_labels.iter().zip(colors).enumerate() {
        let baseline = LEGEND_FIRST_BASELINE + i as f32 * LEGEND_LINE_HEIGHT;
        let swatch = RectF::from_ltwh(x, baseline - LEGEND_SWATCH, LEGEND_SWATCH, LEGEND_SWATCH);
        frame.canvas.draw_rect(swatch.to_skia(), &fill_paint(color));
        frame.label(
            label,
            x + LEGEND_SWATCH + 6.0,
            baseline,
            frame.opts.legend_font_size,
            frame.opts.theme.legend_label,
            Align::Left,
        );
    }
}
