//! Primitive Components
//!
//! Basic building blocks like buttons, checkboxes and form rows.

pub mod button;
pub mod checkbox;
pub mod form_field;
