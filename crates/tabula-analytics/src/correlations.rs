//! Pairwise Pearson correlations.
//!
//! Computes the correlation of every unordered pair of numeric columns and
//! reports the pairs whose coefficient clears a strength threshold.

use serde::{Deserialize, Serialize};
use tabula_core::{Dataset, NumericColumn};

/// Default minimum absolute coefficient for a pair to be reported.
pub const DEFAULT_CORRELATION_THRESHOLD: f64 = 0.5;

/// A reported correlation between two numeric columns.
///
/// `a` always precedes `b` in the dataset's column order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationRecord {
    /// Name of the earlier column of the pair.
    pub a: String,

    /// Name of the later column of the pair.
    pub b: String,

    /// Pearson correlation coefficient.
    ///
    /// Nominally in `[-1, 1]`; floating-point rounding can land a perfectly
    /// collinear pair a few ulps outside.
    pub coefficient: f64,
}

/// Computes pairwise Pearson correlations between numeric columns.
///
/// Each unordered pair is evaluated over its complete rows only (rows where
/// both cells are present); pairs with fewer than two complete rows or with
/// a zero-variance side have no defined coefficient and are skipped. A pair
/// is reported iff `|coefficient| >= threshold`.
///
/// Records are ordered by column-index pair, never by coefficient
/// magnitude. The threshold is conventionally in `[0, 1]` but is not
/// validated; `0.0` reports every defined pair and values above `1.0`
/// report none.
///
/// Returns an empty vector when fewer than two numeric columns exist.
///
/// # Example
///
/// ```
/// use tabula_analytics::{compute_correlations, DEFAULT_CORRELATION_THRESHOLD};
/// use tabula_core::Dataset;
///
/// let dataset = Dataset::builder()
///     .column("x", [1.0, 2.0, 3.0, 4.0])
///     .column("y", [2.0, 4.0, 6.0, 8.0])
///     .build()?;
///
/// let records = compute_correlations(&dataset, DEFAULT_CORRELATION_THRESHOLD);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].coefficient, 1.0);
/// # Ok::<(), tabula_core::DatasetError>(())
/// ```
#[must_use]
pub fn compute_correlations(dataset: &Dataset, threshold: f64) -> Vec<CorrelationRecord> {
    let mut records = Vec::new();

    let numeric = dataset.numeric_columns();
    if numeric.len() < 2 {
        return records;
    }

    for i in 0..numeric.len() {
        for j in (i + 1)..numeric.len() {
            let a = &numeric[i];
            let b = &numeric[j];

            let Some(coefficient) = pearson(a, b) else {
                log::trace!("correlation undefined for ({}, {})", a.name, b.name);
                continue;
            };

            if coefficient.abs() >= threshold {
                records.push(CorrelationRecord {
                    a: a.name.clone(),
                    b: b.name.clone(),
                    coefficient,
                });
            }
        }
    }

    records
}

/// Pearson product-moment coefficient over the pair's complete rows.
///
/// Two-pass formulation: means first, then centered sums. Summation order
/// is fixed by row order, so identical inputs give bit-identical results.
/// Returns `None` when the coefficient is undefined.
fn pearson(x: &NumericColumn, y: &NumericColumn) -> Option<f64> {
    let pairs: Vec<(f64, f64)> = x
        .cells
        .iter()
        .zip(&y.cells)
        .filter_map(|(a, b)| a.zip(*b))
        .collect();

    if pairs.len() < 2 {
        return None;
    }

    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(a, _)| a).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, b)| b).sum::<f64>() / n;

    let mut cov = 0.0;
    let mut var_x = 0.0;
    let mut var_y = 0.0;
    for (a, b) in &pairs {
        let dx = a - mean_x;
        let dy = b - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }

    let denom = (var_x * var_y).sqrt();
    if denom == 0.0 {
        return None;
    }

    let coefficient = cov / denom;
    if coefficient.is_nan() {
        None
    } else {
        Some(coefficient)
    }
}
