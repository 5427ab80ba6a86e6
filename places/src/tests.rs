//! Consolidated unit tests for the places crate.

use filter_engine::{FilterEngine, Gesture};

use crate::classify::{standard_filters, state_label, utm_zone_label};
use crate::loader::parse_places;
use crate::place::{Place, PlaceCollection};

// ========================================
// FIXTURES
// ========================================

fn sample_places() -> Vec<Place> {
    vec![
        Place::new("NSW4119", "WAGGA WAGGA", "NSW").with_point(147.35983656, -35.10817205),
        Place::new("NSW1234", "SYDNEY", "NSW").with_point(151.21, -33.87),
        Place::new("VIC2000", "MELBOURNE", "VIC").with_point(144.96, -37.81),
    ]
}

// ========================================
// DATA MODEL TESTS
// ========================================

#[test]
fn parses_a_feature_collection() {
    let json = r#"{
        "type": "FeatureCollection",
        "features": [{
            "type": "Feature",
            "id": "NSW4119",
            "properties": {
                "name": "WAGGA WAGGA",
                "state": "NSW"
            },
            "geometry": {
                "type": "Point",
                "coordinates": [147.35983656, -35.10817205]
            }
        }]
    }"#;

    let places = parse_places(json).unwrap();
    assert_eq!(places.len(), 1);

    let place = &places[0];
    assert_eq!(place.id.as_deref(), Some("NSW4119"));
    assert_eq!(place.properties.name, "WAGGA WAGGA");
    assert_eq!(place.properties.state, "NSW");
    assert_eq!(place.lon(), Some(147.35983656));
    assert_eq!(place.lat(), Some(-35.10817205));
}

#[test]
fn ignores_fields_the_explorer_does_not_use() {
    let json = r#"{
        "type": "FeatureCollection",
        "bbox": [113.34, -43.63, 153.57, -10.67],
        "features": [{
            "type": "Feature",
            "properties": {
                "name": "SOMEWHERE",
                "state": "QLD",
                "population": 1234
            },
            "geometry": { "type": "Point", "coordinates": [153.0, -27.5] }
        }]
    }"#;

    let places = parse_places(json).unwrap();
    assert_eq!(places[0].properties.state, "QLD");
    assert_eq!(places[0].id, None);
}

#[test]
fn rejects_malformed_json() {
    assert!(parse_places("{ not geojson").is_err());
    assert!(parse_places(r#"{"type": "FeatureCollection"}"#).is_err());
}

#[test]
fn collection_round_trips_with_type_tags() {
    let collection = PlaceCollection::new(sample_places());
    let json = serde_json::to_string(&collection).unwrap();

    assert!(json.contains(r#""type":"FeatureCollection""#));
    assert!(json.contains(r#""type":"Feature""#));
    assert!(json.contains(r#""type":"Point""#));

    let back: PlaceCollection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, collection);
}

#[test]
fn popup_label_joins_the_alias_when_present() {
    let plain = Place::new("X", "ORANGE", "NSW");
    assert_eq!(plain.popup_label(), "ORANGE");

    let aliased = Place::new("X", "ORANGE", "NSW").with_aka("THE COLOUR CITY");
    assert_eq!(aliased.popup_label(), "ORANGE aka THE COLOUR CITY");
}

// ========================================
// CLASSIFIER TESTS
// ========================================

#[test]
fn state_label_reads_the_state_code() {
    let place = Place::new("X", "WAGGA WAGGA", "NSW");
    assert_eq!(state_label(&place), "NSW");
}

#[test]
fn utm_zone_label_buckets_by_longitude() {
    let wagga = Place::new("X", "WAGGA WAGGA", "NSW").with_point(147.35983656, -35.10817205);
    assert_eq!(utm_zone_label(&wagga), "55");

    let sydney = Place::new("X", "SYDNEY", "NSW").with_point(151.21, -33.87);
    assert_eq!(utm_zone_label(&sydney), "56");

    let perth = Place::new("X", "PERTH", "WA").with_point(115.86, -31.95);
    assert_eq!(utm_zone_label(&perth), "50");
}

#[test]
fn utm_zone_label_handles_missing_geometry() {
    let nowhere = Place::new("X", "NOWHERE", "NSW");
    assert_eq!(utm_zone_label(&nowhere), "?");
}

// ========================================
// END-TO-END FILTERING TESTS
// ========================================

#[test]
fn standard_filters_drive_the_engine() {
    let mut engine = FilterEngine::new(sample_places(), &standard_filters());

    let names = |engine: &FilterEngine<Place>| -> Vec<String> {
        engine
            .survivors()
            .iter()
            .map(|p| p.properties.name.clone())
            .collect()
    };

    assert_eq!(names(&engine), ["WAGGA WAGGA", "SYDNEY", "MELBOURNE"]);

    let state = engine.dimension("State").unwrap();
    assert_eq!(state.labels(), ["NSW", "VIC"]);
    let zones = engine.dimension("UTM Zone").unwrap();
    assert_eq!(zones.labels(), ["55", "56"]);

    engine.toggle("State", "NSW", Gesture::Choose).unwrap();
    assert_eq!(names(&engine), ["WAGGA WAGGA", "SYDNEY"]);

    engine.toggle("UTM Zone", "55", Gesture::Choose).unwrap();
    assert_eq!(names(&engine), ["WAGGA WAGGA"]);

    // Clicking the sole active state filter clears it again.
    engine.toggle("State", "NSW", Gesture::Choose).unwrap();
    assert_eq!(names(&engine), ["WAGGA WAGGA", "MELBOURNE"]);
}
