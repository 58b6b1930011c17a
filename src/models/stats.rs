//! Per-configuration metric statistics.

use crate::error::SchemaError;
use indexmap::IndexMap;

/// Metric name to value for one configuration.
pub type MetricMap = IndexMap<String, f64>;

/// Configuration name to its metrics, in document order.
///
/// Every entry is expected (not enforced on load) to carry the same metric
/// names; renderers check this when they index into other entries.
pub type StatsTable = IndexMap<String, MetricMap>;

/// Metric names of the representative (first) entry, sorted lexicographically.
pub fn series_names(stats: &StatsTable) -> Result<Vec<String>, SchemaError> {
    let (_, representative) = stats.first().ok_or(SchemaError::EmptyTable)?;
    let mut names: Vec<String> = representative.keys().cloned().collect();
    names.sort();
    Ok(names)
}

/// Looks up one metric of one configuration.
pub fn metric_value(metrics: &MetricMap, category: &str, metric: &str) -> Result<f64, SchemaError> {
    metrics
        .get(metric)
        .copied()
        .ok_or_else(|| SchemaError::MissingMetric {
            category: category.to_string(),
            metric: metric.to_string(),
        })
}

/// Values of every series across all configurations.
///
/// Returns one `Vec` per entry of `series`, each holding one value per
/// configuration in table order.
pub fn series_values(stats: &StatsTable, series: &[String]) -> Result<Vec<Vec<f64>>, SchemaError> {
    series
        .iter()
        .map(|metric| {
            stats
                .iter()
                .map(|(category, metrics)| metric_value(metrics, category, metric))
                .collect()
        })
        .collect()
}
