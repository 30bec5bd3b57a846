//! CSV parsing into datasets.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tabula_core::{Column, Dataset, Value};

use crate::error::{CsvReadError, CsvReadResult};

/// Cell markers treated as missing, compared case-insensitively after
/// trimming.
const NA_MARKERS: [&str; 4] = ["na", "n/a", "nan", "null"];

/// Reads a dataset from a CSV file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or its content is not
/// valid CSV; see [`read_reader`].
pub fn read_path(path: impl AsRef<Path>) -> CsvReadResult<Dataset> {
    let file = File::open(path)?;
    read_reader(io::BufReader::new(file))
}

/// Reads a dataset from a CSV string.
///
/// # Errors
///
/// See [`read_reader`].
///
/// # Example
///
/// ```
/// use tabula_csv::read_str;
///
/// let dataset = read_str("month,revenue\nJan,100\nFeb,125\n")?;
/// assert_eq!(dataset.row_count(), 2);
/// assert_eq!(dataset.column_names(), vec!["month", "revenue"]);
/// # Ok::<(), tabula_csv::CsvReadError>(())
/// ```
pub fn read_str(text: &str) -> CsvReadResult<Dataset> {
    read_reader(text.as_bytes())
}

/// Reads a dataset from any CSV byte stream.
///
/// The first record is the header and its fields become column names
/// verbatim. Every later record is one row; cells are typed one by one:
///
/// - empty or whitespace-only, or `NA` / `N/A` / `NaN` / `NULL` in any
///   casing, becomes [`Value::Missing`]
/// - otherwise, a cell whose trimmed form parses as `f64` becomes
///   [`Value::Number`]
/// - anything else becomes [`Value::Text`] with the original, untrimmed
///   content
///
/// A header-only input yields a valid zero-row dataset.
///
/// # Errors
///
/// Loading fails fast on the first problem: I/O failure, structurally
/// malformed CSV (ragged records included), a duplicate header name, or
/// input with no header record at all.
pub fn read_reader<R: Read>(reader: R) -> CsvReadResult<Dataset> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let header = match records.next() {
        Some(result) => result?,
        None => return Err(CsvReadError::EmptyInput),
    };

    let mut names: Vec<String> = Vec::with_capacity(header.len());
    for field in header.iter() {
        if names.iter().any(|name| name == field) {
            return Err(CsvReadError::duplicate_column(field));
        }
        names.push(field.to_string());
    }

    let mut cells: Vec<Vec<Value>> = vec![Vec::new(); names.len()];
    for result in records {
        // Ragged records surface here as csv::Error::UnequalLengths.
        let record = result?;
        for (column, field) in cells.iter_mut().zip(record.iter()) {
            column.push(parse_cell(field));
        }
    }

    let columns: Vec<Column> = names
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, values))
        .collect();

    let dataset = Dataset::from_columns(columns)?;
    log::debug!(
        "parsed csv: {} rows x {} columns",
        dataset.row_count(),
        dataset.column_count()
    );
    Ok(dataset)
}

/// Types a single cell.
fn parse_cell(field: &str) -> Value {
    let trimmed = field.trim();
    if trimmed.is_empty() {
        return Value::Missing;
    }
    let lowered = trimmed.to_ascii_lowercase();
    if NA_MARKERS.contains(&lowered.as_str()) {
        return Value::Missing;
    }
    match trimmed.parse::<f64>() {
        Ok(number) => Value::Number(number),
        Err(_) => Value::Text(field.to_string()),
    }
}
