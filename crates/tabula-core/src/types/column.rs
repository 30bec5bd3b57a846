//! Columns and the column classification pass.

use crate::types::Value;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named, ordered column of scalar values.
///
/// Row order is significant: trend detection treats it as an approximation
/// of temporal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Cell values, one per dataset row.
    pub values: Vec<Value>,
}

impl Column {
    /// Creates a column from a name and prepared values.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Creates a column from anything convertible to values.
    ///
    /// ```
    /// use tabula_core::types::Column;
    ///
    /// let revenue = Column::from_values("revenue", [100.0, 120.0, 90.0]);
    /// let city = Column::from_values("city", ["Oslo", "Lima", "Pune"]);
    /// let sparse = Column::from_values("clicks", [Some(3.0), None, Some(7.0)]);
    /// assert_eq!(revenue.len(), 3);
    /// assert_eq!(city.len(), 3);
    /// assert_eq!(sparse.len(), 3);
    /// ```
    #[must_use]
    pub fn from_values<I, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns the number of cells in the column.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if the column has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns the cell at `row`, if in range.
    #[must_use]
    pub fn get(&self, row: usize) -> Option<&Value> {
        self.values.get(row)
    }

    /// Classifies the column.
    ///
    /// A column is [`ColumnType::Numeric`] when every present value has a
    /// numeric interpretation; missing values never disqualify a column.
    /// An all-missing column is vacuously numeric.
    #[must_use]
    pub fn column_type(&self) -> ColumnType {
        let numeric = self
            .values
            .iter()
            .all(|v| v.is_missing() || v.as_number().is_some());
        if numeric {
            ColumnType::Numeric
        } else {
            ColumnType::Other
        }
    }

    /// Extracts the row-aligned numeric cells, or `None` for a non-numeric
    /// column.
    ///
    /// Missing cells map to `None`. Numeric values that are NaN also map to
    /// `None`: NaN and missing are indistinguishable to the statistics
    /// downstream.
    #[must_use]
    pub fn numeric_cells(&self) -> Option<Vec<Option<f64>>> {
        let mut cells = Vec::with_capacity(self.values.len());
        for value in &self.values {
            if value.is_missing() {
                cells.push(None);
                continue;
            }
            match value.as_number() {
                Some(n) if n.is_nan() => cells.push(None),
                Some(n) => cells.push(Some(n)),
                None => return None,
            }
        }
        Some(cells)
    }
}

/// Result of the per-call column classification pass.
///
/// Classification runs once per analysis call, before any statistic: the
/// aggregation loops only ever see pre-extracted numeric cells and never
/// branch on cell types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnType {
    /// All present values are interpretable as numbers.
    Numeric,
    /// At least one present value has no numeric interpretation.
    Other,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ColumnType::Numeric => "numeric",
            ColumnType::Other => "other",
        };
        write!(f, "{name}")
    }
}

/// A classified numeric column, extracted once per analysis call.
#[derive(Debug, Clone, PartialEq)]
pub struct NumericColumn {
    /// Column name.
    pub name: String,
    /// Index of the column in the source dataset.
    pub index: usize,
    /// Row-aligned cells; `None` marks a missing cell.
    pub cells: Vec<Option<f64>>,
}

impl NumericColumn {
    /// Iterates over the present values in row order.
    pub fn present(&self) -> impl Iterator<Item = f64> + '_ {
        self.cells.iter().filter_map(|c| *c)
    }

    /// Returns the number of present values.
    #[must_use]
    pub fn present_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Returns the earliest present value by row position.
    #[must_use]
    pub fn first_present(&self) -> Option<f64> {
        self.cells.iter().find_map(|c| *c)
    }

    /// Returns the latest present value by row position.
    #[must_use]
    pub fn last_present(&self) -> Option<f64> {
        self.cells.iter().rev().find_map(|c| *c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_numeric() {
        let col = Column::from_values("a", [1.0, 2.0, 3.0]);
        assert_eq!(col.column_type(), ColumnType::Numeric);
    }

    #[test]
    fn test_classify_numeric_text() {
        // Text cells that parse as numbers keep the column numeric.
        let col = Column::from_values("a", ["1", "2.5", "-3e2"]);
        assert_eq!(col.column_type(), ColumnType::Numeric);
    }

    #[test]
    fn test_classify_other() {
        let col = Column::from_values("a", ["1", "two", "3"]);
        assert_eq!(col.column_type(), ColumnType::Other);
        assert!(col.numeric_cells().is_none());
    }

    #[test]
    fn test_missing_does_not_disqualify() {
        let col = Column::new(
            "a",
            vec![Value::Number(1.0), Value::Missing, Value::Number(3.0)],
        );
        assert_eq!(col.column_type(), ColumnType::Numeric);
        assert_eq!(
            col.numeric_cells().unwrap(),
            vec![Some(1.0), None, Some(3.0)]
        );
    }

    #[test]
    fn test_all_missing_is_vacuously_numeric() {
        let col = Column::new("a", vec![Value::Missing, Value::Missing]);
        assert_eq!(col.column_type(), ColumnType::Numeric);
        assert_eq!(col.numeric_cells().unwrap(), vec![None, None]);
    }

    #[test]
    fn test_nan_cell_folds_into_missing() {
        let col = Column::from_values("a", [1.0, f64::NAN, 3.0]);
        assert_eq!(col.column_type(), ColumnType::Numeric);
        assert_eq!(
            col.numeric_cells().unwrap(),
            vec![Some(1.0), None, Some(3.0)]
        );
    }

    #[test]
    fn test_first_last_present() {
        let numeric = NumericColumn {
            name: "a".to_string(),
            index: 0,
            cells: vec![None, Some(2.0), Some(5.0), None],
        };
        assert_eq!(numeric.first_present(), Some(2.0));
        assert_eq!(numeric.last_present(), Some(5.0));
        assert_eq!(numeric.present_count(), 2);
        assert_eq!(numeric.present().collect::<Vec<_>>(), vec![2.0, 5.0]);
    }
}
