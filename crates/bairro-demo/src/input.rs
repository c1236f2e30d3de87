// File: crates/bairro-demo/src/input.rs
// Summary: Loads the upstream search response (JSON) or a `year,count` CSV into chart datasets.

use std::path::Path;

use anyhow::{Context, Result};
use bairro_chart::MultiSeriesDataset;
use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{info, warn};

/// Subset of the search response the charts use; every other field is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct SearchResponse {
    pub freguesia: Option<String>,
    pub populacao: Option<Population>,
    pub edificios: Option<IndexMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
pub struct Population {
    #[serde(rename = "H")]
    pub male: Option<IndexMap<String, f64>>,
    #[serde(rename = "M")]
    pub female: Option<IndexMap<String, f64>>,
}

/// Datasets ready to render; `None` means the host skips that chart.
#[derive(Debug, Default)]
pub struct Datasets {
    pub freguesia: Option<String>,
    pub population: Option<MultiSeriesDataset>,
    pub buildings: Option<MultiSeriesDataset>,
}

pub fn load(path: &Path) -> Result<Datasets> {
    let ext = path.extension().map(|e| e.to_string_lossy().to_lowercase()).unwrap_or_default();
    match ext.as_str() {
        "csv" => {
            let years = load_year_csv(path)?;
            Ok(Datasets { buildings: building_dataset(&years)?, ..Datasets::default() })
        }
        _ => {
            let raw = std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            let response: SearchResponse =
                serde_json::from_str(&raw).with_context(|| format!("parsing response {}", path.display()))?;
            from_response(response)
        }
    }
}

pub fn from_response(response: SearchResponse) -> Result<Datasets> {
    let population = match response.populacao {
        Some(Population { male: Some(male), female: Some(female) }) => {
            Some(MultiSeriesDataset::population_pyramid(&male, &female).context("population data")?)
        }
        _ => {
            warn!("response has no population by sex; skipping pyramid");
            None
        }
    };
    let buildings = match response.edificios {
        Some(years) => building_dataset(&years)?,
        None => {
            warn!("response has no building counts; skipping timeline");
            None
        }
    };
    Ok(Datasets { freguesia: response.freguesia, population, buildings })
}

/// A timeline needs at least two years; shorter maps are skipped rather than failing the run.
fn building_dataset(years: &IndexMap<String, f64>) -> Result<Option<MultiSeriesDataset>> {
    if years.len() < 2 {
        warn!(years = years.len(), "too few building years for a timeline; skipping");
        return Ok(None);
    }
    Ok(Some(MultiSeriesDataset::time_series("edificios", years).context("building data")?))
}

/// Two columns, `year` and `count`, header required. Row order is kept.
pub fn load_year_csv(path: &Path) -> Result<IndexMap<String, f64>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;

    let mut out = IndexMap::new();
    for (i, rec) in rdr.records().enumerate() {
        let rec = rec.with_context(|| format!("reading row {}", i + 1))?;
        let year = rec.get(0).context("missing year column")?.to_string();
        let count: f64 = rec
            .get(1)
            .context("missing count column")?
            .parse()
            .with_context(|| format!("row {}: count is not a number", i + 1))?;
        out.insert(year, count);
    }
    info!(rows = out.len(), file = %path.display(), "loaded building counts");
    Ok(out)
}
