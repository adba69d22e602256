//! DataTable Component
//!
//! A reusable table with column definitions and an optional caption.

pub mod column;
pub mod data_table;

pub use column::{Column, ColumnWidth};
pub use data_table::DataTable;
