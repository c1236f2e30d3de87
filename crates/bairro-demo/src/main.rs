// File: crates/bairro-demo/src/main.rs
// Summary: Plays the host page: renders the population pyramid and building timeline of a search
// response to PNG, then replays a hover/scroll/resize/leave cycle on a headless window.

mod config;
mod input;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bairro_chart::{ChartKind, ChartSurface, MultiSeriesDataset};
use bairro_tooltip::{Rect, SimulatedWindow, Tooltip, TooltipHost, Viewport};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

struct Args {
    input: PathBuf,
    config: Option<PathBuf>,
    out_dir: PathBuf,
}

fn parse_args() -> Result<Args> {
    let mut args = std::env::args().skip(1);
    let mut input = None;
    let mut config = None;
    let mut out_dir = PathBuf::from("target/out");
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => config = Some(PathBuf::from(args.next().context("--config needs a path")?)),
            "--out" => out_dir = PathBuf::from(args.next().context("--out needs a directory")?),
            _ if input.is_none() => input = Some(PathBuf::from(arg)),
            other => anyhow::bail!("unexpected argument `{other}`"),
        }
    }
    let input = input.unwrap_or_else(|| {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_response.json")
    });
    Ok(Args { input, config, out_dir })
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let cfg = match &args.config {
        Some(p) => DemoConfig::load(p)?,
        None => DemoConfig::default(),
    };
    info!(input = %args.input.display(), "loading datasets");
    let data = input::load(&args.input)?;
    if let Some(name) = &data.freguesia {
        info!(freguesia = %name, "search response");
    }

    // The host keeps one surface per chart and redraws it when its data changes.
    if let Some(ds) = &data.population {
        let kind = ChartKind::PopulationPyramid(cfg.pyramid.clone());
        render_chart(&cfg, ds, &kind, &args.out_dir.join("populacao.png"))?;
    }
    if let Some(ds) = &data.buildings {
        let kind = ChartKind::Timeline(cfg.timeline.clone());
        render_chart(&cfg, ds, &kind, &args.out_dir.join("edificios.png"))?;
    }

    replay_hover(&cfg)?;
    Ok(())
}

fn render_chart(cfg: &DemoConfig, dataset: &MultiSeriesDataset, kind: &ChartKind, out: &Path) -> Result<()> {
    let mut surface = ChartSurface::new(cfg.width, cfg.height, cfg.render_options())
        .with_context(|| format!("creating {}x{} surface", cfg.width, cfg.height))?;
    let report = surface.render(dataset, kind).with_context(|| format!("rendering {}", kind.name()))?;
    surface.save_png(out)?;
    info!(
        chart = kind.name(),
        max_axis = report.scale.max_value,
        step = report.scale.step_value,
        gridlines = report.gridlines,
        bars = report.bars,
        points = report.points,
        file = %out.display(),
        "wrote chart"
    );
    Ok(())
}

/// Hover an index label, scroll and resize while the tooltip is up, then leave.
fn replay_hover(cfg: &DemoConfig) -> Result<()> {
    let mut window = SimulatedWindow::new(Viewport::new(1280.0, 720.0));
    let label = window.add_element(Rect::new(320.0, 1180.0, 180.0, 22.0));
    let mut tooltip = Tooltip::new(
        label,
        "Índice de acessibilidade: proximidade a transportes, escolas e serviços de saúde no raio escolhido.",
        cfg.tooltip.clone(),
    );

    tooltip.pointer_enter(&mut window)?;
    log_anchor("enter", &tooltip, &window);
    window.scroll_to(0.0, 600.0);
    log_anchor("scroll", &tooltip, &window);
    window.resize(480.0, 720.0);
    log_anchor("resize", &tooltip, &window);
    tooltip.pointer_leave(&mut window);
    info!(listeners = window.listener_count(), overlays = window.overlay_count(), "tooltip left");
    Ok(())
}

fn log_anchor(step: &str, tooltip: &Tooltip, window: &SimulatedWindow) {
    if let Some(a) = tooltip.anchor() {
        info!(
            step,
            top = a.placement.top,
            left = a.placement.left,
            width = a.placement.width,
            height = a.overlay_height,
            scroll_y = window.viewport().scroll_y,
            "tooltip anchor"
        );
    }
}
