// File: crates/bairro-demo/src/config.rs
// Summary: Optional JSON configuration for surface size, theme and per-chart options.

use std::path::Path;

use anyhow::{Context, Result};
use bairro_chart::types::{HEIGHT, PADDING, WIDTH};
use bairro_chart::{theme, BarChartOptions, LineChartOptions, RenderOptions};
use bairro_tooltip::TooltipConfig;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub width: i32,
    pub height: i32,
    pub padding: f32,
    pub theme: String,
    pub draw_labels: bool,
    pub pyramid: BarChartOptions,
    pub timeline: LineChartOptions,
    pub tooltip: TooltipConfig,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            width: WIDTH,
            height: HEIGHT,
            padding: PADDING,
            theme: "light".to_string(),
            draw_labels: true,
            pyramid: BarChartOptions::default(),
            timeline: LineChartOptions::default(),
            tooltip: TooltipConfig::default(),
        }
    }
}

impl DemoConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn render_options(&self) -> RenderOptions {
        let mut opts = RenderOptions::default();
        opts.insets = bairro_chart::types::Insets::uniform(self.padding);
        opts.theme = theme::find(&self.theme);
        opts.draw_labels = self.draw_labels;
        opts
    }
}
