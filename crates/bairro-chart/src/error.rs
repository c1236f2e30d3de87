// File: crates/bairro-chart/src/error.rs
// Summary: Error type for dataset construction and chart rendering.

use thiserror::Error;

/// Errors raised before any pixel is touched. A render either fails up front
/// with one of these or paints the whole surface.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ChartError {
    #[error("dataset has no series")]
    EmptyDataset,

    #[error("series `{series}` has no categories")]
    EmptySeries { series: String },

    #[error("series `{series}` repeats label `{label}`")]
    DuplicateLabel { series: String, label: String },

    #[error("series `{series}` has a non-finite value at `{label}`")]
    NonFiniteValue { series: String, label: String },

    #[error("series `{series}` has a negative value {value} at `{label}`")]
    NegativeValue { series: String, label: String, value: f64 },

    #[error("series `{series}` does not share the label axis of `{reference}`")]
    MisalignedSeries { series: String, reference: String },

    #[error("{kind} chart needs {expected} series, got {found}")]
    WrongSeriesCount { kind: &'static str, expected: usize, found: usize },

    #[error("line chart needs at least 2 points, got {found}")]
    TooFewPoints { found: usize },

    #[error("axis step must be positive and finite, got {step}")]
    InvalidStep { step: f64 },

    #[error("axis maximum {max} needs more than {limit} gridlines at step {step}", limit = crate::scale::MAX_GRIDLINES)]
    TooManyTicks { max: f64, step: f64 },

    #[error("surface {width}x{height} leaves no room inside a {padding}px padding")]
    SurfaceTooSmall { width: i32, height: i32, padding: f32 },

    #[error("failed to create raster surface")]
    SurfaceCreation,

    #[error("failed to read back surface pixels")]
    PixelReadback,

    #[error("failed to encode PNG: {0}")]
    Encode(String),

    #[error("failed to write {path}: {message}")]
    Io { path: String, message: String },
}
