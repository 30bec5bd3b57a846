//! CSV loading error types.

use thiserror::Error;

/// CSV loading result type.
pub type CsvReadResult<T> = Result<T, CsvReadError>;

/// CSV loading error types.
///
/// Loading fails fast: the first malformed record aborts the whole load.
#[derive(Debug, Error)]
pub enum CsvReadError {
    /// I/O error opening or reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally malformed CSV, e.g. a record with the wrong number of
    /// fields or an unterminated quote.
    #[error("Malformed CSV: {0}")]
    Malformed(#[from] csv::Error),

    /// Two header fields carry the same name.
    #[error("Duplicate column in header: '{name}'")]
    DuplicateColumn {
        /// The repeated header name.
        name: String,
    },

    /// The input contained no header record.
    #[error("Empty input: no header record")]
    EmptyInput,

    /// The parsed records did not form a valid dataset.
    #[error("Dataset construction failed: {0}")]
    Dataset(#[from] tabula_core::DatasetError),
}

impl CsvReadError {
    /// Creates a duplicate column error.
    #[must_use]
    pub fn duplicate_column(name: impl Into<String>) -> Self {
        Self::DuplicateColumn { name: name.into() }
    }
}
