// File: crates/bairro-chart/tests/render.rs
// Purpose: End-to-end renders of both chart kinds: reports, pixels, idempotence and failure modes.

use bairro_chart::{ChartError, ChartKind, ChartSurface, MultiSeriesDataset, RenderOptions};
use indexmap::IndexMap;

fn surface() -> ChartSurface {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // avoid font variance
    ChartSurface::with_default_size(opts).expect("surface")
}

fn map(pairs: &[(&str, f64)]) -> IndexMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn pyramid() -> MultiSeriesDataset {
    MultiSeriesDataset::population_pyramid(
        &map(&[("0-4", 100.0), ("5-9", 200.0)]),
        &map(&[("0-4", 150.0), ("5-9", 180.0)]),
    )
    .expect("pyramid dataset")
}

fn buildings() -> MultiSeriesDataset {
    MultiSeriesDataset::time_series("edificios", &map(&[("2019", 10.0), ("2020", 0.0), ("2021", 25.0)]))
        .expect("building dataset")
}

fn pixel(px: &[u8], width: i32, x: i32, y: i32) -> [u8; 4] {
    let i = (y as usize * width as usize + x as usize) * 4;
    [px[i], px[i + 1], px[i + 2], px[i + 3]]
}

fn close_to(got: [u8; 4], want: [u8; 3], tol: u8) -> bool {
    got[..3].iter().zip(want).all(|(g, w)| g.abs_diff(w) <= tol)
}

#[test]
fn population_example_draws_two_groups_on_two_gridlines() {
    let mut s = surface();
    let report = s.render(&pyramid(), &ChartKind::population_pyramid()).expect("render");
    assert_eq!(report.scale.max_value, 400.0);
    assert_eq!(report.scale.step_value, 400.0);
    assert_eq!(report.gridlines, 2);
    assert_eq!(report.bars, 4);
    assert_eq!(report.points, 0);
}

#[test]
fn population_bars_land_in_their_slots() {
    let mut s = surface();
    s.render(&pyramid(), &ChartKind::population_pyramid()).expect("render");
    let w = s.width();
    let px = s.to_rgba8().expect("pixels");

    // Slot 0 spans x 60..650; male bar 119..325.5, female bar 384.5..591, both reach y >= 345.
    assert!(close_to(pixel(&px, w, 222, 400), [0, 0, 255], 0), "male bar should be blue");
    assert!(close_to(pixel(&px, w, 487, 400), [255, 0, 0], 0), "female bar should be red");
    // Gap between the two bars stays background.
    assert!(close_to(pixel(&px, w, 355, 400), [255, 255, 255], 0));
    // Above the male bar (top at y=345) is background too.
    assert!(close_to(pixel(&px, w, 222, 300), [255, 255, 255], 0));
}

#[test]
fn timeline_example_uses_adaptive_step() {
    let mut s = surface();
    let report = s.render(&buildings(), &ChartKind::timeline()).expect("render");
    assert_eq!(report.scale.step_value, 5.0);
    assert_eq!(report.scale.max_value, 25.0);
    assert_eq!(report.gridlines, 6);
    assert_eq!(report.points, 3);
    assert_eq!(report.markers, 3);
    assert_eq!(report.bars, 0);
}

#[test]
fn timeline_markers_sit_on_their_values() {
    let mut s = surface();
    s.render(&buildings(), &ChartKind::timeline()).expect("render");
    let w = s.width();
    let px = s.to_rgba8().expect("pixels");
    // 2020 has value 0: middle point on the baseline (x=650, y=440).
    assert!(close_to(pixel(&px, w, 650, 440), [0x4a, 0x90, 0xe2], 2));
    // 2021 is the maximum: last point at the top gridline (x=1240, y=60).
    assert!(close_to(pixel(&px, w, 1240, 60), [0x4a, 0x90, 0xe2], 2));
    // Well away from the polyline.
    assert!(close_to(pixel(&px, w, 650, 200), [255, 255, 255], 0));
}

#[test]
fn render_is_idempotent() {
    let mut s = surface();
    s.render(&pyramid(), &ChartKind::population_pyramid()).expect("first");
    let first = s.to_rgba8().expect("pixels");

    // A different chart in between must leave no trace.
    s.render(&buildings(), &ChartKind::timeline()).expect("other");
    s.render(&pyramid(), &ChartKind::population_pyramid()).expect("second");
    let second = s.to_rgba8().expect("pixels");
    assert!(first == second, "repeated render must be pixel-identical");
}

#[test]
fn single_point_timeline_fails_before_drawing() {
    let mut s = surface();
    s.render(&pyramid(), &ChartKind::population_pyramid()).expect("render");
    let before = s.to_rgba8().expect("pixels");

    let one = MultiSeriesDataset::time_series("edificios", &map(&[("2021", 4.0)])).expect("dataset");
    let err = s.render(&one, &ChartKind::timeline()).unwrap_err();
    assert_eq!(err, ChartError::TooFewPoints { found: 1 });
    assert!(before == s.to_rgba8().expect("pixels"), "failed render must not touch the surface");
}

#[test]
fn series_count_must_match_kind() {
    let mut s = surface();
    let err = s.render(&buildings(), &ChartKind::population_pyramid()).unwrap_err();
    assert!(matches!(err, ChartError::WrongSeriesCount { expected: 2, found: 1, .. }));
    let err = s.render(&pyramid(), &ChartKind::timeline()).unwrap_err();
    assert!(matches!(err, ChartError::WrongSeriesCount { expected: 1, found: 2, .. }));
}

#[test]
fn all_zero_pyramid_still_renders() {
    let mut s = surface();
    let zeros = MultiSeriesDataset::population_pyramid(&map(&[("0-4", 0.0)]), &map(&[("0-4", 0.0)])).expect("dataset");
    let report = s.render(&zeros, &ChartKind::population_pyramid()).expect("render");
    assert_eq!(report.scale.max_value, 400.0);
    assert_eq!(report.gridlines, 2);
}

#[test]
fn huge_pyramid_value_is_rejected_before_drawing() {
    let mut s = surface();
    let huge = MultiSeriesDataset::population_pyramid(&map(&[("0-4", 1e300)]), &map(&[("0-4", 1.0)])).expect("dataset");
    let err = s.render(&huge, &ChartKind::population_pyramid()).unwrap_err();
    assert!(matches!(err, ChartError::TooManyTicks { .. }));
}

#[test]
fn padding_larger_than_surface_is_rejected() {
    let err = ChartSurface::new(100, 80, RenderOptions::default()).err().expect("too small");
    assert!(matches!(err, ChartError::SurfaceTooSmall { .. }));
}

#[test]
fn png_and_rgba_readback() {
    let mut s = surface();
    s.render(&pyramid(), &ChartKind::population_pyramid()).expect("render");
    let px = s.to_rgba8().expect("pixels");
    assert_eq!(px.len(), 1300 * 500 * 4);
    assert_eq!(px[3], 255, "background is opaque");

    let png = s.encode_png().expect("png");
    assert!(png.starts_with(&[137, 80, 78, 71]), "should be PNG header");

    let out = std::path::PathBuf::from("target/test_out/pyramid.png");
    s.save_png(&out).expect("save");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}

#[test]
fn labels_render_without_panicking() {
    let mut s = ChartSurface::with_default_size(RenderOptions::default()).expect("surface");
    s.render(&pyramid(), &ChartKind::population_pyramid()).expect("pyramid with labels");
    s.render(&buildings(), &ChartKind::timeline()).expect("timeline with labels");
}
