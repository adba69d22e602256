//! Counter Feature
//!
//! Counter widget plus the fixed sample table.

pub mod controller;
pub mod page;
