//! Place data model - the GeoJSON subset the explorer consumes.
//!
//! A dataset is a FeatureCollection of point features carrying a place name,
//! its state, and an optional alias. Fields the explorer does not use are
//! ignored on load and dropped on save.

use serde::{Deserialize, Serialize};

// ============================================================================
// GEOMETRY
// ============================================================================

/// Feature geometry. Only points occur in place datasets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    /// GeoJSON position order: longitude first, then latitude.
    Point { coordinates: Vec<f64> },
}

impl Geometry {
    pub fn point(lon: f64, lat: f64) -> Self {
        Geometry::Point {
            coordinates: vec![lon, lat],
        }
    }
}

// ============================================================================
// PROPERTIES
// ============================================================================

/// The properties block of a place feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceProperties {
    pub name: String,

    pub state: String,

    /// Alternate name, shown as "NAME aka ALIAS" in popups.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aka: Option<String>,
}

// ============================================================================
// PLACE
// ============================================================================

/// One geocoded place: a GeoJSON Feature subset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Place {
    #[serde(rename = "type", default = "feature_type")]
    pub kind: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    pub properties: PlaceProperties,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

fn feature_type() -> String {
    "Feature".to_string()
}

impl Place {
    pub fn new(id: impl Into<String>, name: impl Into<String>, state: impl Into<String>) -> Self {
        Place {
            kind: feature_type(),
            id: Some(id.into()),
            properties: PlaceProperties {
                name: name.into(),
                state: state.into(),
                aka: None,
            },
            geometry: None,
        }
    }

    pub fn with_point(mut self, lon: f64, lat: f64) -> Self {
        self.geometry = Some(Geometry::point(lon, lat));
        self
    }

    pub fn with_aka(mut self, aka: impl Into<String>) -> Self {
        self.properties.aka = Some(aka.into());
        self
    }

    /// Longitude, if the place has a point geometry.
    pub fn lon(&self) -> Option<f64> {
        match &self.geometry {
            Some(Geometry::Point { coordinates }) => coordinates.first().copied(),
            None => None,
        }
    }

    /// Latitude, if the place has a point geometry.
    pub fn lat(&self) -> Option<f64> {
        match &self.geometry {
            Some(Geometry::Point { coordinates }) => coordinates.get(1).copied(),
            None => None,
        }
    }

    /// Popup text: the name, joined with the alias when one exists.
    pub fn popup_label(&self) -> String {
        match &self.properties.aka {
            Some(aka) => format!("{} aka {}", self.properties.name, aka),
            None => self.properties.name.clone(),
        }
    }
}

// ============================================================================
// COLLECTION
// ============================================================================

/// A GeoJSON FeatureCollection subset: the on-disk dataset shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceCollection {
    #[serde(rename = "type", default = "collection_type")]
    pub kind: String,

    pub features: Vec<Place>,
}

fn collection_type() -> String {
    "FeatureCollection".to_string()
}

impl PlaceCollection {
    pub fn new(features: Vec<Place>) -> Self {
        PlaceCollection {
            kind: collection_type(),
            features,
        }
    }
}
