//! Welcome Feature

pub mod page;
