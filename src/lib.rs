//! Archive GUI Library
//!
//! A native demo client: a counter with a fixed data table, a welcome card,
//! and a form that submits archive readings to a local HTTP endpoint.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod eventing;
pub mod features;
pub mod helpers;
pub mod i18n;
pub mod services;
pub mod state;
pub mod theme;
pub mod utils;
