//! Configuration for dataset analysis.

use serde::{Deserialize, Serialize};

use crate::correlations::DEFAULT_CORRELATION_THRESHOLD;

/// Configuration for dataset analysis.
///
/// Currently controls only the correlation strength threshold; key metrics
/// and trend detection take no parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Minimum absolute Pearson coefficient for a pair to be reported.
    ///
    /// Conventionally in `[0, 1]` but not validated: `0.0` reports every
    /// defined pair, values above `1.0` report none.
    pub correlation_threshold: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            correlation_threshold: DEFAULT_CORRELATION_THRESHOLD,
        }
    }
}

impl AnalysisConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the correlation threshold.
    #[must_use]
    pub fn with_correlation_threshold(mut self, threshold: f64) -> Self {
        self.correlation_threshold = threshold;
        self
    }
}
