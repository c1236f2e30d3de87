// File: crates/bairro-chart/src/series.rs
// Summary: Categorical series and multi-series datasets, plus the host-side builders for
// population-by-age and buildings-by-year responses.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::error::ChartError;

/// Default series names used by the upstream population response.
pub const MALE_SERIES: &str = "H";
pub const FEMALE_SERIES: &str = "M";
/// Unit word stripped from category labels before drawing.
pub const DEFAULT_LABEL_SUFFIX: &str = " anos";

/// Ordered `(label, value)` pairs. Order is draw order; labels are unique.
#[derive(Clone, Debug, PartialEq)]
pub struct CategoricalSeries {
    name: String,
    points: Vec<(String, f64)>,
}

impl CategoricalSeries {
    /// Validate and build a series. Values are counts: finite and non-negative.
    pub fn new(name: impl Into<String>, points: Vec<(String, f64)>) -> Result<Self, ChartError> {
        let name = name.into();
        if points.is_empty() {
            return Err(ChartError::EmptySeries { series: name });
        }
        let mut seen = HashSet::with_capacity(points.len());
        for (label, value) in &points {
            if !seen.insert(label.as_str()) {
                return Err(ChartError::DuplicateLabel { series: name, label: label.clone() });
            }
            if !value.is_finite() {
                return Err(ChartError::NonFiniteValue { series: name, label: label.clone() });
            }
            if *value < 0.0 {
                return Err(ChartError::NegativeValue { series: name, label: label.clone(), value: *value });
            }
        }
        Ok(Self { name, points })
    }

    pub fn name(&self) -> &str { &self.name }
    pub fn len(&self) -> usize { self.points.len() }
    pub fn is_empty(&self) -> bool { self.points.is_empty() }
    pub fn points(&self) -> &[(String, f64)] { &self.points }
    pub fn labels(&self) -> impl Iterator<Item = &str> { self.points.iter().map(|(l, _)| l.as_str()) }
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ { self.points.iter().map(|&(_, v)| v) }

    pub fn max_value(&self) -> f64 {
        self.values().fold(0.0, f64::max)
    }
}

/// Named series sharing one ordered label axis.
#[derive(Clone, Debug, PartialEq)]
pub struct MultiSeriesDataset {
    series: Vec<CategoricalSeries>,
}

impl MultiSeriesDataset {
    /// Every series must carry the same labels in the same order as the first one.
    pub fn new(series: Vec<CategoricalSeries>) -> Result<Self, ChartError> {
        let Some(reference) = series.first() else {
            return Err(ChartError::EmptyDataset);
        };
        for s in &series[1..] {
            if s.len() != reference.len() || !s.labels().eq(reference.labels()) {
                return Err(ChartError::MisalignedSeries {
                    series: s.name().to_string(),
                    reference: reference.name().to_string(),
                });
            }
        }
        Ok(Self { series })
    }

    /// Two-series age pyramid. Labels come from `male`, ordered by their leading
    /// number; an age bracket absent from `female` counts as zero.
    pub fn population_pyramid(
        male: &IndexMap<String, f64>,
        female: &IndexMap<String, f64>,
    ) -> Result<Self, ChartError> {
        let mut labels: Vec<&String> = male.keys().collect();
        labels.sort_by_key(|l| age_bracket_start(l).map_or((1, 0), |n| (0, n)));

        let male_points = labels.iter().map(|l| ((*l).clone(), male[*l])).collect();
        let female_points = labels
            .iter()
            .map(|l| ((*l).clone(), female.get(*l).copied().unwrap_or(0.0)))
            .collect();
        Self::new(vec![
            CategoricalSeries::new(MALE_SERIES, male_points)?,
            CategoricalSeries::new(FEMALE_SERIES, female_points)?,
        ])
    }

    /// Single series in the map's insertion order.
    pub fn time_series(name: impl Into<String>, values: &IndexMap<String, f64>) -> Result<Self, ChartError> {
        let points = values.iter().map(|(k, v)| (k.clone(), *v)).collect();
        Self::new(vec![CategoricalSeries::new(name, points)?])
    }

    pub fn series(&self) -> &[CategoricalSeries] { &self.series }
    pub fn series_count(&self) -> usize { self.series.len() }

    /// Number of categories on the shared axis.
    pub fn category_count(&self) -> usize {
        self.series.first().map_or(0, CategoricalSeries::len)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.first().into_iter().flat_map(|s| s.labels())
    }

    /// Maximum across every series.
    pub fn max_value(&self) -> f64 {
        self.series.iter().map(CategoricalSeries::max_value).fold(0.0, f64::max)
    }
}

/// Leading integer of an age-bracket label: `"15-19 anos"` -> 15, `"85 ou mais"` -> 85.
pub fn age_bracket_start(label: &str) -> Option<i64> {
    let trimmed = label.trim_start();
    let end = trimmed.find(|c: char| !c.is_ascii_digit()).unwrap_or(trimmed.len());
    trimmed[..end].parse().ok()
}

/// Drop the first occurrence of the unit suffix for a shorter axis label.
pub fn strip_label_suffix<'a>(label: &'a str, suffix: &str) -> std::borrow::Cow<'a, str> {
    if suffix.is_empty() || !label.contains(suffix) {
        std::borrow::Cow::Borrowed(label)
    } else {
        std::borrow::Cow::Owned(label.replacen(suffix, "", 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(pairs: &[(&str, f64)]) -> IndexMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn rejects_duplicate_and_invalid_values() {
        let dup = CategoricalSeries::new("x", vec![("a".into(), 1.0), ("a".into(), 2.0)]);
        assert!(matches!(dup, Err(ChartError::DuplicateLabel { .. })));
        let nan = CategoricalSeries::new("x", vec![("a".into(), f64::NAN)]);
        assert!(matches!(nan, Err(ChartError::NonFiniteValue { .. })));
        let neg = CategoricalSeries::new("x", vec![("a".into(), -1.0)]);
        assert!(matches!(neg, Err(ChartError::NegativeValue { .. })));
        assert!(matches!(CategoricalSeries::new("x", vec![]), Err(ChartError::EmptySeries { .. })));
    }

    #[test]
    fn rejects_misaligned_series() {
        let a = CategoricalSeries::new("a", vec![("0-4".into(), 1.0), ("5-9".into(), 2.0)]).unwrap();
        let b = CategoricalSeries::new("b", vec![("5-9".into(), 1.0), ("0-4".into(), 2.0)]).unwrap();
        assert!(matches!(
            MultiSeriesDataset::new(vec![a, b]),
            Err(ChartError::MisalignedSeries { .. })
        ));
        assert_eq!(MultiSeriesDataset::new(vec![]), Err(ChartError::EmptyDataset));
    }

    #[test]
    fn pyramid_sorts_by_bracket_start_and_fills_missing() {
        let male = map(&[("10-14 anos", 3.0), ("0-4 anos", 1.0), ("5-9 anos", 2.0)]);
        let female = map(&[("0-4 anos", 4.0), ("10-14 anos", 6.0)]);
        let ds = MultiSeriesDataset::population_pyramid(&male, &female).unwrap();
        assert_eq!(ds.labels().collect::<Vec<_>>(), vec!["0-4 anos", "5-9 anos", "10-14 anos"]);
        let f: Vec<f64> = ds.series()[1].values().collect();
        assert_eq!(f, vec![4.0, 0.0, 6.0]);
        assert_eq!(ds.series()[0].name(), MALE_SERIES);
        assert_eq!(ds.max_value(), 6.0);
    }

    #[test]
    fn time_series_keeps_insertion_order() {
        let ds = MultiSeriesDataset::time_series("edificios", &map(&[("2019", 10.0), ("2020", 0.0), ("2021", 25.0)])).unwrap();
        assert_eq!(ds.labels().collect::<Vec<_>>(), vec!["2019", "2020", "2021"]);
        assert_eq!(ds.category_count(), 3);
        assert_eq!(ds.max_value(), 25.0);
    }

    #[test]
    fn bracket_start_parsing() {
        assert_eq!(age_bracket_start("15-19 anos"), Some(15));
        assert_eq!(age_bracket_start(" 85 ou mais"), Some(85));
        assert_eq!(age_bracket_start("total"), None);
    }

    #[test]
    fn suffix_is_stripped_once() {
        assert_eq!(strip_label_suffix("0-4 anos", DEFAULT_LABEL_SUFFIX), "0-4");
        assert_eq!(strip_label_suffix("2021", DEFAULT_LABEL_SUFFIX), "2021");
        assert_eq!(strip_label_suffix("0-4 anos anos", DEFAULT_LABEL_SUFFIX), "0-4 anos");
    }
}
