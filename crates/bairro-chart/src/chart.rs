// File: crates/bairro-chart/src/chart.rs
// Summary: Host-owned raster surface and the shared render pipeline (clear, scale, axes, gridlines)
// dispatching to the population pyramid and timeline painters.

use std::path::Path;

use serde::Deserialize;
use skia_safe as skia;
use tracing::debug;

use crate::bar;
use crate::error::ChartError;
use crate::geometry::{BarLayout, ChartArea};
use crate::line;
use crate::scale::{format_tick, AxisScale, DEFAULT_TICK_TARGET};
use crate::series::{MultiSeriesDataset, DEFAULT_LABEL_SUFFIX};
use crate::text::{Align, TextShaper};
use crate::theme::Theme;
use crate::types::{Insets, HEIGHT, WIDTH};

/// Surface-wide drawing options shared by both chart kinds.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub insets: Insets,
    pub theme: Theme,
    /// Turn off to get font-independent pixels (snapshots, benches).
    pub draw_labels: bool,
    pub label_font_size: f32,
    pub legend_font_size: f32,
    /// How far gridlines reach left of the y axis as tick marks.
    pub tick_overhang: f32,
    /// Distance between the y axis and the right edge of tick labels.
    pub tick_label_gap: f32,
    /// Distance below the x axis of category label baselines.
    pub category_label_offset: f32,
    pub axis_stroke_width: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            insets: Insets::default(),
            theme: Theme::light(),
            draw_labels: true,
            label_font_size: 12.0,
            legend_font_size: 14.0,
            tick_overhang: 5.0,
            tick_label_gap: 10.0,
            category_label_offset: 20.0,
            axis_stroke_width: 1.0,
        }
    }
}

/// Grouped two-bar chart per category on a constant-step axis.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct BarChartOptions {
    /// Constant gridline interval, kept fixed so charts compare across queries.
    pub step: f64,
    #[serde(skip)]
    pub layout: BarLayout,
    pub legend_labels: [String; 2],
    pub label_suffix: String,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            step: 400.0,
            layout: BarLayout::default(),
            legend_labels: ["Masculino".to_string(), "Feminino".to_string()],
            label_suffix: DEFAULT_LABEL_SUFFIX.to_string(),
        }
    }
}

/// Single-series polyline with markers on a data-derived axis.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct LineChartOptions {
    pub tick_target: u32,
    pub stroke_width: f32,
    pub marker_radius: f32,
    pub label_suffix: String,
}

impl Default for LineChartOptions {
    fn default() -> Self {
        Self {
            tick_target: DEFAULT_TICK_TARGET,
            stroke_width: 2.0,
            marker_radius: 3.0,
            label_suffix: DEFAULT_LABEL_SUFFIX.to_string(),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum ChartKind {
    PopulationPyramid(BarChartOptions),
    Timeline(LineChartOptions),
}

impl ChartKind {
    pub fn population_pyramid() -> Self {
        Self::PopulationPyramid(BarChartOptions::default())
    }

    pub fn timeline() -> Self {
        Self::Timeline(LineChartOptions::default())
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::PopulationPyramid(_) => "population pyramid",
            Self::Timeline(_) => "timeline",
        }
    }

    fn expected_series(&self) -> usize {
        match self {
            Self::PopulationPyramid(_) => 2,
            Self::Timeline(_) => 1,
        }
    }

    /// Validate the dataset shape and derive the value axis, before any drawing.
    pub fn axis_scale(&self, dataset: &MultiSeriesDataset) -> Result<AxisScale, ChartError> {
        let expected = self.expected_series();
        if dataset.series_count() != expected {
            return Err(ChartError::WrongSeriesCount {
                kind: self.name(),
                expected,
                found: dataset.series_count(),
            });
        }
        let max = dataset.max_value();
        match self {
            Self::PopulationPyramid(o) => AxisScale::fixed_step(max, o.step),
            Self::Timeline(o) => {
                let found = dataset.category_count();
                if found < 2 {
                    return Err(ChartError::TooFewPoints { found });
                }
                AxisScale::adaptive(max, o.tick_target)
            }
        }
    }
}

/// What one render call put on the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderReport {
    pub scale: AxisScale,
    pub area: ChartArea,
    pub gridlines: usize,
    pub bars: usize,
    pub points: usize,
    pub markers: usize,
}

/// Everything a painter needs for one pass over the surface.
pub(crate) struct Frame<'a> {
    pub canvas: &'a skia::Canvas,
    pub text: &'a TextShaper,
    pub opts: &'a RenderOptions,
    pub area: ChartArea,
    pub scale: AxisScale,
    pub width: i32,
}

impl Frame<'_> {
    pub fn label(&self, text: &str, x: f32, y: f32, size: f32, color: skia::Color, align: Align) {
        if self.opts.draw_labels {
            self.text.draw(self.canvas, text, x, y, size, color, align);
        }
    }

    /// Category label centred under `x`, unit suffix removed.
    pub fn category_label(&self, label: &str, suffix: &str, x: f32) {
        let shown = crate::series::strip_label_suffix(label, suffix);
        self.label(
            &shown,
            x,
            self.area.baseline() + self.opts.category_label_offset,
            self.opts.label_font_size,
            self.opts.theme.category_label,
            Align::Center,
        );
    }
}

/// Fixed-size canvas owned by the host. Holds no drawing state between renders:
/// every `render` clears and repaints all of it.
pub struct ChartSurface {
    surface: skia::Surface,
    width: i32,
    height: i32,
    area: ChartArea,
    opts: RenderOptions,
    text: TextShaper,
}

impl ChartSurface {
    pub fn new(width: i32, height: i32, opts: RenderOptions) -> Result<Self, ChartError> {
        let area = ChartArea::new(width, height, &opts.insets)
            .ok_or(ChartError::SurfaceTooSmall { width, height, padding: opts.insets.left })?;
        let surface = skia::surfaces::raster_n32_premul((width, height)).ok_or(ChartError::SurfaceCreation)?;
        Ok(Self { surface, width, height, area, opts, text: TextShaper::new() })
    }

    /// The page's 1300x500 logical canvas.
    pub fn with_default_size(opts: RenderOptions) -> Result<Self, ChartError> {
        Self::new(WIDTH, HEIGHT, opts)
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }
    pub fn options(&self) -> &RenderOptions { &self.opts }

    /// Drawable region inside the padding band.
    pub fn chart_area(&self) -> ChartArea { self.area }

    /// Draw a complete chart, replacing whatever the surface held.
    /// Validation happens first; on error the surface is left untouched.
    pub fn render(&mut self, dataset: &MultiSeriesDataset, kind: &ChartKind) -> Result<RenderReport, ChartError> {
        let scale = kind.axis_scale(dataset)?;
        let area = self.area;

        let canvas = self.surface.canvas();
        canvas.clear(self.opts.theme.background);

        let frame = Frame { canvas, text: &self.text, opts: &self.opts, area, scale, width: self.width };
        draw_axes(&frame);
        let gridlines = draw_gridlines(&frame);

        let mut report = RenderReport { scale, area, gridlines, bars: 0, points: 0, markers: 0 };
        match kind {
            ChartKind::PopulationPyramid(o) => {
                report.bars = bar::draw_population_pyramid(&frame, dataset, o);
            }
            ChartKind::Timeline(o) => {
                let (points, markers) = line::draw_timeline(&frame, dataset, o);
                report.points = points;
                report.markers = markers;
            }
        }

        debug!(
            kind = kind.name(),
            categories = dataset.category_count(),
            max_axis = scale.max_value,
            step = scale.step_value,
            gridlines,
            "chart rendered"
        );
        Ok(report)
    }

    /// Unpremultiplied RGBA8 pixels, rows packed (`stride == width * 4`).
    pub fn to_rgba8(&mut self) -> Result<Vec<u8>, ChartError> {
        let info = skia::ImageInfo::new(
            (self.width, self.height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let row_bytes = self.width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * self.height as usize];
        if !self.surface.read_pixels(&info, &mut pixels, row_bytes, (0, 0)) {
            return Err(ChartError::PixelReadback);
        }
        Ok(pixels)
    }

    pub fn encode_png(&mut self) -> Result<Vec<u8>, ChartError> {
        let pixels = self.to_rgba8()?;
        let img = image::RgbaImage::from_raw(self.width as u32, self.height as u32, pixels)
            .ok_or(ChartError::PixelReadback)?;
        let mut out = std::io::Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png)
            .map_err(|e| ChartError::Encode(e.to_string()))?;
        Ok(out.into_inner())
    }

    /// Write the current pixels as PNG, creating parent directories.
    pub fn save_png(&mut self, path: impl AsRef<Path>) -> Result<(), ChartError> {
        let path = path.as_ref();
        let io_err = |e: std::io::Error| ChartError::Io { path: path.display().to_string(), message: e.to_string() };
        let data = self.encode_png()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, data).map_err(io_err)
    }
}

// ---- shared pipeline --------------------------------------------------------

fn draw_axes(frame: &Frame<'_>) {
    let mut paint = skia::Paint::default();
    paint.set_color(frame.opts.theme.axis_line);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(frame.opts.axis_stroke_width);

    let a = &frame.area;
    frame.canvas.draw_line((a.left(), a.top()), (a.left(), a.baseline()), &paint);
    frame.canvas.draw_line((a.left(), a.baseline()), (a.right(), a.baseline()), &paint);
}

/// One horizontal line per tick with its value right-aligned in the left margin.
fn draw_gridlines(frame: &Frame<'_>) -> usize {
    let mut paint = skia::Paint::default();
    paint.set_color(frame.opts.theme.grid);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(1.0);

    let a = &frame.area;
    let mut count = 0;
    for value in frame.scale.ticks() {
        let y = a.y_for_extent(frame.scale.height_of(value, a.height()));
        frame.canvas.draw_line((a.left() - frame.opts.tick_overhang, y), (a.right(), y), &paint);
        frame.label(
            &format_tick(value),
            a.left() - frame.opts.tick_label_gap,
            y + 4.0,
            frame.opts.label_font_size,
            frame.opts.theme.tick_label,
            Align::Right,
        );
        count += 1;
    }
    count
}
