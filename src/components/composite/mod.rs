//! Composite Components
//!
//! Components built from primitives: tables and overlays.

pub mod data_table;
pub mod notification;
