// File: crates/bairro-chart/src/line.rs
// Summary: Timeline painter: one polyline across the chart width with a marker per point.

use skia_safe as skia;

use crate::chart::{Frame, LineChartOptions};
use crate::geometry::line_point_x;
use crate::series::MultiSeriesDataset;

/// Returns `(points on the polyline, markers painted)`.
/// The caller has already checked for one series with at least two points.
pub(crate) fn draw_timeline(frame: &Frame<'_>, dataset: &MultiSeriesDataset, opts: &LineChartOptions) -> (usize, usize) {
    let Some(series) = dataset.series().first() else {
        return (0, 0);
    };
    let area = &frame.area;
    let count = series.len();

    let points: Vec<(f32, f32)> = series
        .values()
        .enumerate()
        .map(|(i, v)| {
            let x = line_point_x(area, i, count);
            (x, area.y_for_extent(frame.scale.height_of(v, area.height())))
        })
        .collect();

    for ((label, _), &(x, _)) in series.points().iter().zip(&points) {
        frame.category_label(label, &opts.label_suffix, x);
    }

    let mut path = skia::Path::new();
    for (i, &p) in points.iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }

    let mut stroke = skia::Paint::default();
    stroke.set_anti_alias(true);
    stroke.set_style(skia::paint::Style::Stroke);
    stroke.set_stroke_width(opts.stroke_width);
    stroke.set_color(frame.opts.theme.line_stroke);
    frame.canvas.draw_path(&path, &stroke);

    let mut fill = skia::Paint::default();
    fill.set_anti_alias(true);
    fill.set_style(skia::paint::Style::Fill);
    fill.set_color(frame.opts.theme.marker);
    for &p in &points {
        frame.canvas.draw_circle(p, opts.marker_radius, &fill);
    }

    (points.len(), points.len())
}
