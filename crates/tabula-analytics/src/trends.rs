//! First-to-last trend detection.
//!
//! Classifies each numeric column as trending up, down, or stable by
//! comparing its earliest and latest present values. Row order is assumed
//! to approximate time order.

use std::fmt;

use serde::{Deserialize, Serialize};
use tabula_core::Dataset;

/// Percentage-change boundary separating `Stable` from `Up` / `Down`.
///
/// The boundary is exclusive: a change of exactly ±5% is still `Stable`.
pub const TREND_THRESHOLD_PCT: f64 = 5.0;

/// Direction of a detected trend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    /// Change greater than +5%.
    Up,
    /// Change smaller than -5%.
    Down,
    /// Change within ±5% inclusive.
    Stable,
}

impl fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up => write!(f, "up"),
            Self::Down => write!(f, "down"),
            Self::Stable => write!(f, "stable"),
        }
    }
}

/// Trend classification for one numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendRecord {
    /// Name of the column the trend was detected on.
    pub metric: String,

    /// Classified direction.
    pub direction: TrendDirection,

    /// Percentage change from first to last present value.
    ///
    /// Positive infinity when the first value is exactly zero and the last
    /// is not; zero when both are zero.
    pub change_pct: f64,

    /// Human-readable one-line summary of the trend.
    pub description: String,
}

/// Detects first-to-last trends for every numeric column of `dataset`.
///
/// Missing cells are dropped with row order preserved; columns with fewer
/// than two present values produce no record. The change is relative to the
/// magnitude of the first present value:
///
/// ```text
/// change_pct = (last - first) / |first| * 100
/// ```
///
/// A first value of exactly zero makes the relative change undefined; it is
/// reported as positive infinity (or zero when the last value is also
/// zero), which classifies as `Up` (`Stable` for the zero-to-zero case).
///
/// Records are returned in column order.
///
/// # Example
///
/// ```
/// use tabula_analytics::{detect_trends, TrendDirection};
/// use tabula_core::Dataset;
///
/// let dataset = Dataset::builder()
///     .column("revenue", [100.0, 104.0, 112.0])
///     .build()?;
///
/// let trends = detect_trends(&dataset);
/// assert_eq!(trends[0].direction, TrendDirection::Up);
/// assert_eq!(trends[0].change_pct, 12.0);
/// # Ok::<(), tabula_core::DatasetError>(())
/// ```
#[must_use]
pub fn detect_trends(dataset: &Dataset) -> Vec<TrendRecord> {
    let mut trends = Vec::new();

    for column in dataset.numeric_columns() {
        if column.present_count() < 2 {
            continue;
        }
        let (Some(first), Some(last)) = (column.first_present(), column.last_present()) else {
            continue;
        };

        let change_pct = if first == 0.0 {
            if last == 0.0 {
                0.0
            } else {
                f64::INFINITY
            }
        } else {
            (last - first) / first.abs() * 100.0
        };

        let direction = if change_pct > TREND_THRESHOLD_PCT {
            TrendDirection::Up
        } else if change_pct < -TREND_THRESHOLD_PCT {
            TrendDirection::Down
        } else {
            TrendDirection::Stable
        };

        let description = format!(
            "{} changed by {:.1}% from first to last row.",
            column.name, change_pct
        );

        trends.push(TrendRecord {
            metric: column.name,
            direction,
            change_pct,
            description,
        });
    }

    trends
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn single_column(values: impl IntoIterator<Item = Option<f64>>) -> Dataset {
        Dataset::builder().column("v", values).build().unwrap()
    }

    #[test]
    fn test_upward_trend() {
        let dataset = single_column([Some(100.0), Some(90.0), Some(112.0)]);
        let trends = detect_trends(&dataset);

        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].metric, "v");
        assert_eq!(trends[0].direction, TrendDirection::Up);
        assert_relative_eq!(trends[0].change_pct, 12.0, max_relative = 1e-12);
        assert_eq!(
            trends[0].description,
            "v changed by 12.0% from first to last row."
        );
    }

    #[test]
    fn test_downward_trend() {
        let dataset = single_column([Some(200.0), Some(170.0)]);
        let trends = detect_trends(&dataset);
        assert_eq!(trends[0].direction, TrendDirection::Down);
        assert_relative_eq!(trends[0].change_pct, -15.0, max_relative = 1e-12);
    }

    #[test]
    fn test_exact_boundary_is_stable() {
        // The ±5% boundary is exclusive in both directions.
        let up = single_column([Some(100.0), Some(105.0)]);
        assert_eq!(detect_trends(&up)[0].direction, TrendDirection::Stable);

        let down = single_column([Some(100.0), Some(95.0)]);
        assert_eq!(detect_trends(&down)[0].direction, TrendDirection::Stable);

        let just_over = single_column([Some(100.0), Some(105.1)]);
        assert_eq!(detect_trends(&just_over)[0].direction, TrendDirection::Up);
    }

    #[test]
    fn test_negative_first_value_uses_magnitude() {
        // (-5 - -10) / 10 * 100 = +50% even though the series is negative.
        let dataset = single_column([Some(-10.0), Some(-5.0)]);
        let trends = detect_trends(&dataset);
        assert_eq!(trends[0].direction, TrendDirection::Up);
        assert_relative_eq!(trends[0].change_pct, 50.0, max_relative = 1e-12);
    }

    #[test]
    fn test_zero_first_value_reports_infinity() {
        let dataset = single_column([Some(0.0), Some(10.0)]);
        let trends = detect_trends(&dataset);
        assert_eq!(trends[0].direction, TrendDirection::Up);
        assert_eq!(trends[0].change_pct, f64::INFINITY);
        assert_eq!(
            trends[0].description,
            "v changed by inf% from first to last row."
        );
    }

    #[test]
    fn test_zero_to_zero_is_stable() {
        let dataset = single_column([Some(0.0), Some(0.0)]);
        let trends = detect_trends(&dataset);
        assert_eq!(trends[0].direction, TrendDirection::Stable);
        assert_eq!(trends[0].change_pct, 0.0);
    }

    #[test]
    fn test_missing_values_skipped_for_endpoints() {
        // First and last present values are 100 and 120; the leading and
        // trailing missing cells do not count.
        let dataset = single_column([None, Some(100.0), Some(7.0), Some(120.0), None]);
        let trends = detect_trends(&dataset);
        assert_relative_eq!(trends[0].change_pct, 20.0, max_relative = 1e-12);
    }

    #[test]
    fn test_fewer_than_two_present_values_skipped() {
        let one = single_column([None, Some(42.0), None]);
        assert!(detect_trends(&one).is_empty());

        let none = single_column([None, None]);
        assert!(detect_trends(&none).is_empty());
    }

    #[test]
    fn test_non_numeric_columns_ignored() {
        let dataset = Dataset::builder()
            .column("label", ["a", "b"])
            .column("value", [1.0, 2.0])
            .build()
            .unwrap();

        let trends = detect_trends(&dataset);
        assert_eq!(trends.len(), 1);
        assert_eq!(trends[0].metric, "value");
    }

    #[test]
    fn test_records_in_column_order() {
        let dataset = Dataset::builder()
            .column("z", [1.0, 2.0])
            .column("a", [2.0, 1.0])
            .build()
            .unwrap();

        let trends = detect_trends(&dataset);
        assert_eq!(trends[0].metric, "z");
        assert_eq!(trends[1].metric, "a");
    }

    #[test]
    fn test_direction_serializes_lowercase() {
        let json = serde_json::to_string(&TrendDirection::Up).unwrap();
        assert_eq!(json, "\"up\"");
        assert_eq!(TrendDirection::Down.to_string(), "down");
    }

    #[test]
    fn test_description_rounds_to_one_decimal() {
        let dataset = single_column([Some(3.0), Some(4.0)]);
        let trends = detect_trends(&dataset);
        // 33.333...% renders as 33.3%.
        assert_eq!(
            trends[0].description,
            "v changed by 33.3% from first to last row."
        );
    }
}
