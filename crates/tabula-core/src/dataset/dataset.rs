//! Dataset struct and core methods.

use crate::error::{DatasetError, DatasetResult};
use crate::types::{Column, NumericColumn, Value};
use serde::{Deserialize, Serialize};

/// An ordered, in-memory tabular dataset.
///
/// A dataset is a sequence of equally long, uniquely named columns. Column
/// order and row order are significant: row order is assumed to approximate
/// temporal order for trend detection.
///
/// Datasets are plain values. The analysis operations in `tabula-analytics`
/// never mutate one, so a dataset may be shared across threads and analyzed
/// concurrently without synchronization.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Column>", into = "Vec<Column>")]
pub struct Dataset {
    columns: Vec<Column>,
}

impl Dataset {
    /// Creates an empty dataset (zero rows, zero columns).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new dataset builder.
    #[must_use]
    pub fn builder() -> super::DatasetBuilder {
        super::DatasetBuilder::new()
    }

    /// Creates a dataset from prepared columns.
    ///
    /// # Errors
    ///
    /// Returns an error if two columns share a name or if the columns do
    /// not all have the same length.
    pub fn from_columns(columns: Vec<Column>) -> DatasetResult<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            for column in &columns {
                if column.len() != expected {
                    return Err(DatasetError::column_length_mismatch(
                        &column.name,
                        expected,
                        column.len(),
                    ));
                }
            }
        }

        for (i, column) in columns.iter().enumerate() {
            if columns[..i].iter().any(|c| c.name == column.name) {
                return Err(DatasetError::duplicate_column(&column.name));
            }
        }

        Ok(Self { columns })
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    /// Returns the number of columns (numeric and non-numeric alike).
    #[must_use]
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the dataset has no rows.
    ///
    /// A dataset with columns but zero rows (e.g. a header-only CSV) is
    /// empty; every analysis operation maps an empty dataset to an empty
    /// result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Returns the column names in column order.
    #[must_use]
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Returns the column with the given name, if present.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns all columns in column order.
    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Appends one row of values, in column order.
    ///
    /// # Errors
    ///
    /// Returns an error if the row's arity differs from the column count.
    pub fn push_row(&mut self, row: Vec<Value>) -> DatasetResult<()> {
        if row.len() != self.columns.len() {
            return Err(DatasetError::row_arity_mismatch(
                self.columns.len(),
                row.len(),
            ));
        }
        for (column, value) in self.columns.iter_mut().zip(row) {
            column.values.push(value);
        }
        Ok(())
    }

    /// Runs the column classification pass and extracts the numeric view.
    ///
    /// Returns one [`NumericColumn`] per numeric column, in column order;
    /// non-numeric columns are absent. The pass runs once per analysis
    /// call and never mutates the dataset.
    #[must_use]
    pub fn numeric_columns(&self) -> Vec<NumericColumn> {
        self.columns
            .iter()
            .enumerate()
            .filter_map(|(index, column)| {
                column.numeric_cells().map(|cells| NumericColumn {
                    name: column.name.clone(),
                    index,
                    cells,
                })
            })
            .collect()
    }
}

impl TryFrom<Vec<Column>> for Dataset {
    type Error = DatasetError;

    fn try_from(columns: Vec<Column>) -> DatasetResult<Self> {
        Self::from_columns(columns)
    }
}

impl From<Dataset> for Vec<Column> {
    fn from(dataset: Dataset) -> Self {
        dataset.columns
    }
}
