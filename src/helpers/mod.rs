//! Helper Utilities
//!
//! Keyboard actions and shortcut formatting.

mod action;

pub use action::*;
