//! Filter Definition - The configuration supplied by the host.
//!
//! This module contains the types needed to DESCRIBE a filter dimension.
//! A definition is consumed once at engine construction: the label function
//! runs over every item exactly once to build that dimension's buckets, and
//! is not retained afterwards. When the underlying item array changes, the
//! host rebuilds the engine from fresh definitions.

use serde::{Deserialize, Serialize};

/// A bucket label. Distinct labels observed within one dimension become the
/// fixed key set of that dimension's toggle group.
pub type Label = String;

/// Index into the original item array (0-based). Item identity.
pub type ItemIndex = usize;

// ============================================================================
// FILTER DEFINITION
// ============================================================================

/// Describes one filter dimension: a name plus a label function that assigns
/// every item to exactly one bucket.
///
/// The label function must be a pure function of the item for the lifetime
/// of the engine built from it.
pub struct FilterDefinition<T> {
    /// Display name, and the key used to route `toggle` calls.
    pub name: String,

    /// Assigns an item to its bucket.
    pub label_fn: Box<dyn Fn(&T) -> Label>,
}

impl<T> FilterDefinition<T> {
    pub fn new(name: impl Into<String>, label_fn: impl Fn(&T) -> Label + 'static) -> Self {
        FilterDefinition {
            name: name.into(),
            label_fn: Box::new(label_fn),
        }
    }
}

impl<T> std::fmt::Debug for FilterDefinition<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterDefinition")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// GESTURE
// ============================================================================

/// The two user gestures a toggle button supports.
///
/// The mapping from raw input to gesture is host policy (typically `Flip`
/// when a modifier key is held and `Choose` otherwise); the core only ever
/// sees the enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Gesture {
    /// Independent toggle: negate one label, leave the rest alone.
    Flip,
    /// Single-select with an escape hatch: collapse to one label, or reset
    /// to all-enabled when the sole enabled label is chosen again.
    Choose,
}

// ============================================================================
// LABEL CHANGE
// ============================================================================

/// One label whose enabled value actually changed during a gesture.
///
/// Labels that kept their value are never reported, so a host can update
/// exactly the toggle elements that need restyling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelChange {
    pub label: Label,
    pub enabled: bool,
}

impl LabelChange {
    pub fn new(label: impl Into<Label>, enabled: bool) -> Self {
        LabelChange {
            label: label.into(),
            enabled,
        }
    }
}
