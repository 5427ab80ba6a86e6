//! Standard classifiers for place datasets.
//!
//! These are the label functions the explorer ships with: one dimension per
//! Australian state, one per UTM longitude zone. Hosts are free to supply
//! their own `FilterDefinition`s instead.

use filter_engine::{FilterDefinition, Label};

use crate::place::Place;

/// Buckets a place by its state code (e.g. "NSW", "VIC").
pub fn state_label(place: &Place) -> Label {
    place.properties.state.clone()
}

/// Buckets a place by UTM longitude zone: zone 1 starts at 180°W, each zone
/// spans 6° of longitude. Places without a usable longitude share a "?"
/// bucket rather than poisoning a numeric one.
pub fn utm_zone_label(place: &Place) -> Label {
    match place.lon() {
        Some(lon) if lon.is_finite() => {
            let zone = 1 + ((lon + 180.0) / 6.0).floor() as i64;
            zone.to_string()
        }
        _ => "?".to_string(),
    }
}

/// The explorer's standard dimension pair.
pub fn standard_filters() -> Vec<FilterDefinition<Place>> {
    vec![
        FilterDefinition::new("State", state_label),
        FilterDefinition::new("UTM Zone", utm_zone_label),
    ]
}
