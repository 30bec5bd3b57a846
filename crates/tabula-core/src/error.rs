//! Error types for dataset construction.
//!
//! Analysis itself never fails: the engine operations are total over any
//! well-formed dataset. These errors only guard well-formedness (equal
//! column lengths, unique column names) at the construction edges.

use thiserror::Error;

/// A specialized Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Errors that can occur while constructing or mutating a dataset.
#[derive(Error, Debug, Clone)]
pub enum DatasetError {
    /// Two columns share the same name.
    #[error("Duplicate column name: '{name}'")]
    DuplicateColumn {
        /// The repeated column name.
        name: String,
    },

    /// A column's length differs from the dataset's row count.
    #[error("Column '{name}' has {actual} rows, expected {expected}")]
    ColumnLengthMismatch {
        /// The offending column name.
        name: String,
        /// The row count established by the preceding columns.
        expected: usize,
        /// The offending column's length.
        actual: usize,
    },

    /// A pushed row's arity differs from the dataset's column count.
    #[error("Row has {actual} values, expected {expected}")]
    RowArityMismatch {
        /// The dataset's column count.
        expected: usize,
        /// The pushed row's value count.
        actual: usize,
    },
}

impl DatasetError {
    /// Creates a duplicate column error.
    #[must_use]
    pub fn duplicate_column(name: impl Into<String>) -> Self {
        Self::DuplicateColumn { name: name.into() }
    }

    /// Creates a column length mismatch error.
    #[must_use]
    pub fn column_length_mismatch(
        name: impl Into<String>,
        expected: usize,
        actual: usize,
    ) -> Self {
        Self::ColumnLengthMismatch {
            name: name.into(),
            expected,
            actual,
        }
    }

    /// Creates a row arity mismatch error.
    #[must_use]
    pub fn row_arity_mismatch(expected: usize, actual: usize) -> Self {
        Self::RowArityMismatch { expected, actual }
    }
}
