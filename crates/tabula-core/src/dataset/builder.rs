//! Builder for constructing datasets column by column.

use crate::error::DatasetResult;
use crate::types::{Column, Value};

use super::Dataset;

/// Builder for [`Dataset`] instances.
///
/// Columns are appended in call order and validated once at
/// [`build`](Self::build) time.
///
/// # Example
///
/// ```
/// use tabula_core::Dataset;
///
/// let dataset = Dataset::builder()
///     .column("region", ["north", "south"])
///     .column("revenue", [1200.0, 950.0])
///     .build()?;
///
/// assert_eq!(dataset.row_count(), 2);
/// # Ok::<(), tabula_core::DatasetError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct DatasetBuilder {
    columns: Vec<Column>,
}

impl DatasetBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column built from any values convertible to [`Value`].
    #[must_use]
    pub fn column<I>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.columns.push(Column::from_values(name, values));
        self
    }

    /// Appends an already constructed column.
    #[must_use]
    pub fn add_column(mut self, column: Column) -> Self {
        self.columns.push(column);
        self
    }

    /// Validates the accumulated columns and builds the dataset.
    ///
    /// # Errors
    ///
    /// Returns an error if two columns share a name or the columns differ
    /// in length.
    pub fn build(self) -> DatasetResult<Dataset> {
        Dataset::from_columns(self.columns)
    }
}
