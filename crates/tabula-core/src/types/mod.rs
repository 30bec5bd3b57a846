//! Core types for tabular data.
//!
//! - [`Value`]: one scalar cell (number, text, or missing)
//! - [`Column`]: a named, ordered vector of cells
//! - [`ColumnType`]: the numeric/other tag produced by classification
//! - [`NumericColumn`]: the row-aligned numeric view the engine consumes

mod column;
mod value;

pub use column::{Column, ColumnType, NumericColumn};
pub use value::Value;
