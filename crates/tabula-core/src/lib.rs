//! # Tabula Core
//!
//! Core tabular data model for the Tabula analysis library.
//!
//! This crate provides the foundational building blocks used throughout
//! Tabula:
//!
//! - **Values**: The [`Value`] cell type (number, text, or missing)
//! - **Columns**: Named, ordered [`Column`]s and their numeric view
//! - **Datasets**: The validated [`Dataset`] table with a builder
//!
//! ## Design Philosophy
//!
//! - **Columns first**: A dataset is a list of equally long named columns;
//!   row order is significant and approximates temporal order
//! - **Classify once**: Each column is tagged numeric or non-numeric in a
//!   single pass before any statistics run
//! - **Total operations**: Accessors return empty views instead of failing;
//!   errors arise only at construction time
//!
//! ## Example
//!
//! ```rust
//! use tabula_core::prelude::*;
//!
//! let dataset = Dataset::builder()
//!     .column("region", ["north", "south", "west"])
//!     .column("revenue", [1200.0, 950.0, 1430.0])
//!     .build()?;
//!
//! assert_eq!(dataset.row_count(), 3);
//! assert_eq!(dataset.numeric_columns().len(), 1);
//! # Ok::<(), DatasetError>(())
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod dataset;
pub mod error;
pub mod types;

pub use dataset::{Dataset, DatasetBuilder};
pub use error::{DatasetError, DatasetResult};
pub use types::{Column, ColumnType, NumericColumn, Value};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dataset::{Dataset, DatasetBuilder};
    pub use crate::error::{DatasetError, DatasetResult};
    pub use crate::types::{Column, ColumnType, NumericColumn, Value};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = DatasetError::duplicate_column("price");
        assert!(err.to_string().contains("price"));
    }
}
