//! Utils - Persistence and Formatting Helpers

pub mod config_store;
pub mod format;
