// File: crates/bairro-chart/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow for both chart kinds.
// Behavior:
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares decoded pixels for an exact match.
// - Else, no golden comparison happens until the files are blessed and committed.
//   The test still checks that two renders decode to identical pixels, and
//   REQUIRE_SNAPSHOTS=1 turns a missing golden into a failure (use it in CI).

use bairro_chart::{ChartKind, ChartSurface, MultiSeriesDataset, RenderOptions};
use indexmap::IndexMap;

fn bless_mode() -> bool {
    std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn require_mode() -> bool {
    std::env::var("REQUIRE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true")).unwrap_or(false)
}

fn write_or_compare(name: &str, bytes: &[u8]) {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__").join(name);
    if bless_mode() {
        if let Some(parent) = path.parent() { std::fs::create_dir_all(parent).ok(); }
        std::fs::write(&path, bytes).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", path.display(), bytes.len());
        return;
    }
    if path.exists() {
        let want = std::fs::read(&path).expect("read snapshot");
        let got_img = image::load_from_memory(bytes).expect("decode got").to_rgba8();
        let want_img = image::load_from_memory(&want).expect("decode want").to_rgba8();
        assert_eq!(got_img.as_raw(), want_img.as_raw(), "Pixels differ: {}", path.display());
    } else {
        assert!(!require_mode(), "Missing snapshot {}; run with UPDATE_SNAPSHOTS=1 first", path.display());
        eprintln!("[snapshot] Missing {}; set UPDATE_SNAPSHOTS=1 to bless.", path.display());
    }
}

fn render(dataset: &MultiSeriesDataset, kind: &ChartKind) -> Vec<u8> {
    let mut opts = RenderOptions::default();
    opts.draw_labels = false; // deterministic
    let mut surface = ChartSurface::with_default_size(opts).expect("surface");
    surface.render(dataset, kind).expect("render");
    surface.encode_png().expect("png")
}

fn assert_stable(dataset: &MultiSeriesDataset, kind: &ChartKind) -> Vec<u8> {
    let first = render(dataset, kind);
    let second = render(dataset, kind);
    let a = image::load_from_memory(&first).expect("decode first").to_rgba8();
    let b = image::load_from_memory(&second).expect("decode second").to_rgba8();
    assert_eq!(a.dimensions(), (1300, 500));
    assert_eq!(a.as_raw(), b.as_raw(), "two renders of the same data differ");
    first
}

fn map(pairs: &[(&str, f64)]) -> IndexMap<String, f64> {
    pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

#[test]
fn golden_population_pyramid() {
    let male = map(&[("0-4 anos", 812.0), ("5-9 anos", 905.0), ("10-14 anos", 760.0), ("15-19 anos", 1210.0)]);
    let female = map(&[("0-4 anos", 790.0), ("5-9 anos", 870.0), ("10-14 anos", 802.0), ("15-19 anos", 1333.0)]);
    let ds = MultiSeriesDataset::population_pyramid(&male, &female).expect("dataset");
    write_or_compare("population_pyramid.png", &assert_stable(&ds, &ChartKind::population_pyramid()));
}

#[test]
fn golden_timeline() {
    let years = map(&[("1990", 40.0), ("2000", 85.0), ("2010", 62.0), ("2020", 17.0), ("2021", 30.0)]);
    let ds = MultiSeriesDataset::time_series("edificios", &years).expect("dataset");
    write_or_compare("timeline.png", &assert_stable(&ds, &ChartKind::timeline()));
}
