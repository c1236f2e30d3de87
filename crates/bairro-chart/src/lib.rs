// File: crates/bairro-chart/src/lib.rs
// Summary: Chart engine entry point; exports datasets, scales and the raster chart surface.

pub mod chart;
pub mod series;
pub mod scale;
pub mod geometry;
pub mod types;
pub mod theme;
pub mod text;
pub mod error;
mod bar;
mod line;

pub use chart::{BarChartOptions, ChartKind, ChartSurface, LineChartOptions, RenderOptions, RenderReport};
pub use error::ChartError;
pub use geometry::{BarGroup, BarLayout, ChartArea, RectF};
pub use scale::{AxisScale, MAX_GRIDLINES};
pub use series::{CategoricalSeries, MultiSeriesDataset};
pub use theme::Theme;
pub use text::TextShaper;
