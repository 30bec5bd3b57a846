//! Per-column key metrics.
//!
//! Computes flat summary statistics over every numeric column of a dataset,
//! plus overall row and column counts.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tabula_core::Dataset;

/// Key under which the total row count is reported.
pub const ROW_COUNT: &str = "row_count";

/// Key under which the total column count is reported.
pub const COLUMN_COUNT: &str = "column_count";

/// Flat, ordered mapping of metric name to value.
///
/// Contains `<column>_mean`, `<column>_sum`, `<column>_min`, `<column>_max`,
/// and `<column>_std` for every numeric column with at least one present
/// value, plus [`ROW_COUNT`] and [`COLUMN_COUNT`]. Serializes as a plain
/// JSON object; keys iterate in lexicographic order.
///
/// An empty mapping means the dataset had no rows or no numeric columns.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyMetrics(BTreeMap<String, f64>);

impl KeyMetrics {
    /// Returns the metric value for `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<f64> {
        self.0.get(key).copied()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no metrics were produced.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over `(name, value)` entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Returns the reported row count, if metrics were produced.
    #[must_use]
    pub fn row_count(&self) -> Option<f64> {
        self.get(ROW_COUNT)
    }

    /// Returns the reported column count, if metrics were produced.
    #[must_use]
    pub fn column_count(&self) -> Option<f64> {
        self.get(COLUMN_COUNT)
    }
}

/// Computes key metrics over all numeric columns of `dataset`.
///
/// Statistics are population statistics: the standard deviation divides by
/// `n`, not `n - 1`. Missing cells are dropped per column; a numeric column
/// with no present values contributes no entries. The row and column counts
/// always refer to the full dataset, counting non-numeric columns and rows
/// whose cells are all missing.
///
/// Returns an empty mapping when the dataset has no rows or no numeric
/// columns.
///
/// # Example
///
/// ```
/// use tabula_analytics::compute_key_metrics;
/// use tabula_core::Dataset;
///
/// let dataset = Dataset::builder()
///     .column("a", [10.0, 20.0, 30.0])
///     .build()?;
///
/// let metrics = compute_key_metrics(&dataset);
/// assert_eq!(metrics.get("a_mean"), Some(20.0));
/// assert_eq!(metrics.get("a_sum"), Some(60.0));
/// assert_eq!(metrics.row_count(), Some(3.0));
/// # Ok::<(), tabula_core::DatasetError>(())
/// ```
#[must_use]
pub fn compute_key_metrics(dataset: &Dataset) -> KeyMetrics {
    let mut out = BTreeMap::new();

    if dataset.is_empty() {
        return KeyMetrics(out);
    }

    let numeric = dataset.numeric_columns();
    if numeric.is_empty() {
        return KeyMetrics(out);
    }

    for column in &numeric {
        let values: Vec<f64> = column.present().collect();
        if values.is_empty() {
            continue;
        }

        let n = values.len() as f64;
        let sum: f64 = values.iter().sum();
        let mean = sum / n;
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        // Second pass over the deviations keeps the result deterministic
        // and avoids the catastrophic cancellation of the one-pass formula.
        let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        out.insert(format!("{}_mean", column.name), mean);
        out.insert(format!("{}_sum", column.name), sum);
        out.insert(format!("{}_min", column.name), min);
        out.insert(format!("{}_max", column.name), max);
        out.insert(format!("{}_std", column.name), std);
    }

    out.insert(ROW_COUNT.to_string(), dataset.row_count() as f64);
    out.insert(COLUMN_COUNT.to_string(), dataset.column_count() as f64);

    KeyMetrics(out)
}
