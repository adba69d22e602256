//! Archive Feature
//!
//! Submission form, endpoint editing and submission history.

pub mod controller;
pub mod form;
pub mod page;
