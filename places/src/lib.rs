//! Place dataset for the filter engine.
//!
//! This crate provides the GeoJSON-subset data model the place explorer
//! loads, plus the standard classifiers that turn places into filter
//! dimensions. It depends on `filter-engine` only for the definition types.
//!
//! Layers:
//! - `place`: Data model (what a place IS)
//! - `classify`: Label functions and the standard dimension pair
//! - `loader`: JSON parsing and file reading
//! - `error`: Error taxonomy

pub mod place;
pub mod classify;
pub mod loader;
pub mod error;

#[cfg(test)]
mod tests;

pub use place::*;
pub use classify::{standard_filters, state_label, utm_zone_label};
pub use loader::{parse_places, read_places};
pub use error::PlaceError;
