//! Features - Vertical Feature Slices
//!
//! Each feature contains its page, controller, and local widgets.

pub mod archive;
pub mod counter;
pub mod welcome;
