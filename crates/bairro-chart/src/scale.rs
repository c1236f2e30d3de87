// File: crates/bairro-chart/src/scale.rs
// Summary: Vertical axis scaling. Fixed-step (population pyramid) and adaptive-step (timeline) policies.

use crate::error::ChartError;

/// Default number of intervals the adaptive policy aims for.
pub const DEFAULT_TICK_TARGET: u32 = 5;

/// Upper bound on axis intervals; a data maximum that needs more is rejected.
pub const MAX_GRIDLINES: usize = 10_000;

/// Value axis derived fresh for every render.
///
/// Invariants: `min_value == 0`, `step_value > 0`,
/// `max_value` is a multiple of `step_value` and covers every data value,
/// `tick_count == max_value / step_value + 1` (gridlines including zero).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisScale {
    pub min_value: f64,
    pub max_value: f64,
    pub step_value: f64,
    pub tick_count: usize,
}

impl AxisScale {
    /// Constant step chosen by the caller so gridlines stay comparable across queries.
    pub fn fixed_step(data_max: f64, step: f64) -> Result<Self, ChartError> {
        if !(step.is_finite() && step > 0.0) {
            return Err(ChartError::InvalidStep { step });
        }
        Self::from_step(data_max, step)
    }

    /// Step derived from the data: `ceil(max / tick_target)`, never below 1.
    pub fn adaptive(data_max: f64, tick_target: u32) -> Result<Self, ChartError> {
        let target = tick_target.max(1) as f64;
        let step = (data_max.max(0.0) / target).ceil().max(1.0);
        Self::from_step(data_max, step)
    }

    fn from_step(data_max: f64, step: f64) -> Result<Self, ChartError> {
        let data_max = if data_max.is_finite() { data_max.max(0.0) } else { 0.0 };
        let raw = (data_max / step).ceil();
        if raw > MAX_GRIDLINES as f64 {
            return Err(ChartError::TooManyTicks { max: data_max, step });
        }
        // All-zero data still gets one interval so heights never divide by zero.
        let mut intervals = (raw as usize).max(1);
        // `intervals * step` can round one ulp under the data for fractional steps.
        while (intervals as f64) * step < data_max {
            intervals += 1;
        }
        if intervals > MAX_GRIDLINES {
            return Err(ChartError::TooManyTicks { max: data_max, step });
        }
        Ok(Self {
            min_value: 0.0,
            max_value: intervals as f64 * step,
            step_value: step,
            tick_count: intervals + 1,
        })
    }

    /// Gridline values from zero to `max_value`, inclusive.
    pub fn ticks(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.tick_count).map(move |i| self.min_value + i as f64 * self.step_value)
    }

    /// Vertical extent of `value` above the baseline in a chart `chart_height` pixels tall.
    pub fn height_of(&self, value: f64, chart_height: f32) -> f32 {
        ((value - self.min_value) / (self.max_value - self.min_value)) as f32 * chart_height
    }
}

/// Tick labels print integers without a trailing `.0`.
pub fn format_tick(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
