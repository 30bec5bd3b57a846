//! Combined dataset analysis summary.
//!
//! Bundles the three analyses into a single report structure.

use serde::{Deserialize, Serialize};
use tabula_core::Dataset;

use crate::config::AnalysisConfig;
use crate::correlations::{compute_correlations, CorrelationRecord};
use crate::metrics::{compute_key_metrics, KeyMetrics};
use crate::trends::{detect_trends, TrendRecord};

/// Complete analysis summary for one dataset.
///
/// This is the primary output for dataset-level analysis: key metrics,
/// trends, and correlations computed together over the same snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Flat per-column statistics plus row and column counts.
    pub key_metrics: KeyMetrics,

    /// Trend classification per numeric column, in column order.
    pub trends: Vec<TrendRecord>,

    /// Correlations at or above the configured threshold, in column-pair
    /// order.
    pub correlations: Vec<CorrelationRecord>,
}

impl DatasetSummary {
    /// Runs all three analyses over `dataset`.
    ///
    /// The summary is a plain composition of [`compute_key_metrics`],
    /// [`detect_trends`], and [`compute_correlations`]; nothing is cached
    /// and the dataset is not mutated.
    ///
    /// # Example
    ///
    /// ```
    /// use tabula_analytics::{AnalysisConfig, DatasetSummary};
    /// use tabula_core::Dataset;
    ///
    /// let dataset = Dataset::builder()
    ///     .column("visits", [120.0, 135.0, 160.0])
    ///     .column("sales", [12.0, 14.0, 17.0])
    ///     .build()?;
    ///
    /// let summary = DatasetSummary::compute(&dataset, &AnalysisConfig::default());
    /// assert_eq!(summary.trends.len(), 2);
    /// assert_eq!(summary.correlations.len(), 1);
    /// # Ok::<(), tabula_core::DatasetError>(())
    /// ```
    #[must_use]
    pub fn compute(dataset: &Dataset, config: &AnalysisConfig) -> Self {
        Self {
            key_metrics: compute_key_metrics(dataset),
            trends: detect_trends(dataset),
            correlations: compute_correlations(dataset, config.correlation_threshold),
        }
    }
}

/// Convenience function to compute a full dataset summary.
#[must_use]
pub fn summarize_dataset(dataset: &Dataset, config: &AnalysisConfig) -> DatasetSummary {
    DatasetSummary::compute(dataset, config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_dataset() -> Dataset {
        Dataset::builder()
            .column("month", ["Jan", "Feb", "Mar", "Apr"])
            .column("visits", [120.0, 135.0, 150.0, 160.0])
            .column("sales", [12.0, 14.0, 15.5, 17.0])
            .build()
            .unwrap()
    }

    #[test]
    fn test_compute_bundles_all_three() {
        let summary = DatasetSummary::compute(&sample_dataset(), &AnalysisConfig::default());

        assert_eq!(summary.key_metrics.row_count(), Some(4.0));
        assert_eq!(summary.key_metrics.column_count(), Some(3.0));
        assert_eq!(summary.trends.len(), 2);
        assert_eq!(summary.correlations.len(), 1);
        assert_eq!(summary.correlations[0].a, "visits");
        assert_eq!(summary.correlations[0].b, "sales");
    }

    #[test]
    fn test_matches_standalone_functions() {
        let dataset = sample_dataset();
        let config = AnalysisConfig::default();
        let summary = summarize_dataset(&dataset, &config);

        assert_eq!(summary.key_metrics, compute_key_metrics(&dataset));
        assert_eq!(summary.trends, detect_trends(&dataset));
        assert_eq!(
            summary.correlations,
            compute_correlations(&dataset, config.correlation_threshold)
        );
    }

    #[test]
    fn test_empty_dataset_summary() {
        let summary = DatasetSummary::compute(&Dataset::new(), &AnalysisConfig::default());
        assert!(summary.key_metrics.is_empty());
        assert!(summary.trends.is_empty());
        assert!(summary.correlations.is_empty());
    }

    #[test]
    fn test_serializes_to_json() {
        let summary = DatasetSummary::compute(&sample_dataset(), &AnalysisConfig::default());
        let json = serde_json::to_value(&summary).unwrap();

        assert!(json["key_metrics"].is_object());
        assert!(json["trends"].is_array());
        assert_eq!(json["trends"][0]["direction"], "up");
        assert!(json["correlations"].is_array());
    }
}
