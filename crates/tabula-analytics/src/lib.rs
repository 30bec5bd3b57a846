//! # Tabula Analytics
//!
//! Analysis engine for tabular data: key metrics, trend detection, and
//! correlation discovery over a [`Dataset`](tabula_core::Dataset).
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: All analyses are stateless with explicit inputs;
//!   no I/O, no caching, no mutation of the dataset
//! - **Total operations**: Every analysis maps degenerate input (empty
//!   dataset, no numeric columns) to an empty result instead of an error
//! - **Deterministic**: Fixed summation order makes results bit-identical
//!   across runs for identical input
//!
//! ## Analyses
//!
//! - [`compute_key_metrics`] - Per-column mean/sum/min/max/std plus row
//!   and column counts
//! - [`detect_trends`] - First-to-last up/down/stable classification per
//!   numeric column
//! - [`compute_correlations`] - Pairwise-complete Pearson coefficients
//!   filtered by strength
//! - [`DatasetSummary`] - All three bundled per dataset
//!
//! ## Quick Start
//!
//! ```rust
//! use tabula_analytics::prelude::*;
//! use tabula_core::Dataset;
//!
//! let dataset = Dataset::builder()
//!     .column("month", ["Jan", "Feb", "Mar"])
//!     .column("revenue", [100.0, 110.0, 125.0])
//!     .column("cost", [80.0, 84.0, 90.0])
//!     .build()?;
//!
//! let summary = DatasetSummary::compute(&dataset, &AnalysisConfig::default());
//!
//! assert_eq!(summary.key_metrics.get("revenue_mean"), Some(111.66666666666667));
//! assert_eq!(summary.trends[0].direction, TrendDirection::Up);
//! assert_eq!(summary.correlations[0].a, "revenue");
//! # Ok::<(), tabula_core::DatasetError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod correlations;
pub mod metrics;
pub mod summary;
pub mod trends;

pub use config::AnalysisConfig;
pub use correlations::{compute_correlations, CorrelationRecord, DEFAULT_CORRELATION_THRESHOLD};
pub use metrics::{compute_key_metrics, KeyMetrics, COLUMN_COUNT, ROW_COUNT};
pub use summary::{summarize_dataset, DatasetSummary};
pub use trends::{detect_trends, TrendDirection, TrendRecord, TREND_THRESHOLD_PCT};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::AnalysisConfig;
    pub use crate::correlations::{
        compute_correlations, CorrelationRecord, DEFAULT_CORRELATION_THRESHOLD,
    };
    pub use crate::metrics::{compute_key_metrics, KeyMetrics};
    pub use crate::summary::{summarize_dataset, DatasetSummary};
    pub use crate::trends::{detect_trends, TrendDirection, TrendRecord, TREND_THRESHOLD_PCT};
}
