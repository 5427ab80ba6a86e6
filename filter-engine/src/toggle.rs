//! Toggle Group - Per-dimension toggle state machine.
//!
//! Tracks which of a fixed set of labels are "on" and applies one of two
//! mutually exclusive gestures:
//!
//! - `flip`: negate one label independently (the modifier-click gesture)
//! - `choose`: single-select by default, with two special cases - choosing
//!   the sole enabled label re-enables everything, and choosing from an
//!   all-off state enables just that label
//!
//! The label key set is fixed at construction and never grows or shrinks.
//! Both gestures report exactly the labels whose value changed, in a
//! deterministic order, so hosts can restyle precisely the affected toggles.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::definition::{Label, LabelChange};
use crate::error::FilterError;

/// The labels that changed during one gesture. Most gestures touch only a
/// handful of labels, so the list lives inline.
pub type ChangeList = SmallVec<[LabelChange; 4]>;

// ============================================================================
// TOGGLE GROUP
// ============================================================================

/// On/off state for the fixed label set of one filter dimension.
#[derive(Debug, Clone)]
pub struct ToggleGroup {
    /// Enabled flag per label. Key set fixed at construction.
    enabled: FxHashMap<Label, bool>,

    /// Labels in ascending order, for deterministic iteration and display.
    order: Vec<Label>,
}

impl ToggleGroup {
    /// Creates a group over the given labels, all enabled. Duplicate labels
    /// collapse to one entry.
    pub fn new(labels: impl IntoIterator<Item = Label>) -> Self {
        let mut enabled = FxHashMap::default();
        for label in labels {
            enabled.insert(label, true);
        }
        let mut order: Vec<Label> = enabled.keys().cloned().collect();
        order.sort();
        ToggleGroup { enabled, order }
    }

    /// The label set in ascending order.
    pub fn labels(&self) -> &[Label] {
        &self.order
    }

    /// Whether a label is currently enabled. Unknown labels read as disabled.
    pub fn is_enabled(&self, label: &str) -> bool {
        self.enabled.get(label).copied().unwrap_or(false)
    }

    /// Number of currently enabled labels. O(labels) scan; the label sets
    /// observed in practice are tens of entries, so no counter is kept.
    pub fn enabled_count(&self) -> usize {
        self.enabled.values().filter(|&&on| on).count()
    }

    /// Number of labels in the group.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Negates one label. No other label changes.
    pub fn flip(&mut self, label: &str) -> Result<ChangeList, FilterError> {
        let value = match self.enabled.get(label) {
            Some(&v) => v,
            None => return Err(FilterError::UnknownLabel(label.to_string())),
        };
        let mut changes = ChangeList::new();
        self.set(label, !value, &mut changes);
        Ok(changes)
    }

    /// Applies the single-select gesture. Policy depends on the enabled
    /// count before mutation:
    ///
    /// - exactly one enabled: choosing it again re-enables all labels
    ///   (reset); choosing another swaps which single label is enabled
    /// - zero enabled: enables just the chosen label
    /// - two or more enabled: disables everything except the chosen label
    pub fn choose(&mut self, label: &str) -> Result<ChangeList, FilterError> {
        if !self.enabled.contains_key(label) {
            return Err(FilterError::UnknownLabel(label.to_string()));
        }

        let on: Vec<Label> = self
            .order
            .iter()
            .filter(|l| self.enabled[l.as_str()])
            .cloned()
            .collect();

        let mut changes = ChangeList::new();
        match on.len() {
            1 => {
                let current = &on[0];
                if current.as_str() == label {
                    // Reset: clicking the sole active filter clears the filter.
                    let all: Vec<Label> = self.order.clone();
                    for l in &all {
                        self.set(l, true, &mut changes);
                    }
                } else {
                    let current = current.clone();
                    self.set(&current, false, &mut changes);
                    self.set(label, true, &mut changes);
                }
            }
            0 => {
                self.set(label, true, &mut changes);
            }
            _ => {
                // Collapse-to-one.
                let all: Vec<Label> = self.order.clone();
                for l in &all {
                    self.set(l, l.as_str() == label, &mut changes);
                }
            }
        }
        Ok(changes)
    }

    /// Writes a label's value, recording a change only if the value actually
    /// differs. Caller guarantees the label is a known key.
    fn set(&mut self, label: &str, value: bool, changes: &mut ChangeList) {
        if let Some(slot) = self.enabled.get_mut(label) {
            if *slot != value {
                *slot = value;
                changes.push(LabelChange::new(label, value));
            }
        }
    }
}
