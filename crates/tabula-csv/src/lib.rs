//! # Tabula CSV
//!
//! CSV loading for Tabula datasets.
//!
//! Parses a CSV byte stream into a [`Dataset`](tabula_core::Dataset): the
//! header record names the columns and every cell is typed individually as
//! number, text, or missing. Malformed input fails fast with a
//! [`CsvReadError`].
//!
//! ```rust
//! use tabula_csv::read_str;
//!
//! let dataset = read_str("month,revenue\nJan,100\nFeb,\nMar,125\n")?;
//!
//! assert_eq!(dataset.row_count(), 3);
//! assert_eq!(dataset.numeric_columns().len(), 1);
//! # Ok::<(), tabula_csv::CsvReadError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod error;
mod reader;

pub use error::{CsvReadError, CsvReadResult};
pub use reader::{read_path, read_reader, read_str};
