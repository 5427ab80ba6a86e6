//! Dataset loading.
//!
//! Places arrive as one GeoJSON FeatureCollection, read in full before any
//! filtering happens. There is no incremental loading: when a new dataset
//! arrives, the host rebuilds its filter engine from the fresh array.

use std::fs;
use std::path::Path;

use crate::error::PlaceError;
use crate::place::{Place, PlaceCollection};

/// Parses a FeatureCollection JSON document into its places.
pub fn parse_places(json: &str) -> Result<Vec<Place>, PlaceError> {
    let collection: PlaceCollection = serde_json::from_str(json)?;
    log::debug!("parsed {} places", collection.features.len());
    Ok(collection.features)
}

/// Reads and parses a FeatureCollection file.
pub fn read_places(path: impl AsRef<Path>) -> Result<Vec<Place>, PlaceError> {
    let text = fs::read_to_string(path.as_ref())?;
    parse_places(&text)
}
