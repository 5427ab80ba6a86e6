//! Filter Engine - Bucket construction and survivor composition.
//!
//! This module takes an item array plus a list of `FilterDefinition`s and
//! produces a `FilterEngine` that answers "which items survive the current
//! toggle state" after any gesture.
//!
//! Algorithm:
//! 1. At construction, run each definition's label function over every item
//!    once, grouping indices by label into ascending bucket lists
//! 2. On a gesture, mutate only the target dimension's toggle group
//! 3. Recompute per-dimension survivors as the sorted union of enabled
//!    buckets, then fold the ordered intersection across dimensions
//! 4. Notify observers with the surviving items in original array order

use rustc_hash::FxHashMap;

use crate::definition::{FilterDefinition, Gesture, ItemIndex, Label};
use crate::error::FilterError;
use crate::intersect::intersect_sorted;
use crate::toggle::{ChangeList, ToggleGroup};

// ============================================================================
// DIMENSION
// ============================================================================

/// One built filter dimension: its bucket map plus its toggle state.
///
/// Buckets are computed once from the definition and never re-partitioned;
/// only the toggle group mutates afterwards.
#[derive(Debug, Clone)]
pub struct Dimension {
    /// The definition's name; routes `toggle` calls.
    name: String,

    /// Item indices per label. Each list is ascending because items are
    /// scanned in index order at build time.
    buckets: FxHashMap<Label, Vec<ItemIndex>>,

    /// Enabled state over exactly the bucket labels.
    toggles: ToggleGroup,
}

impl Dimension {
    /// Partitions the item array into buckets per the definition's label
    /// function. All labels start enabled.
    fn build<T>(definition: &FilterDefinition<T>, items: &[T]) -> Self {
        let mut buckets: FxHashMap<Label, Vec<ItemIndex>> = FxHashMap::default();
        for (idx, item) in items.iter().enumerate() {
            let label = (definition.label_fn)(item);
            buckets.entry(label).or_default().push(idx);
        }

        log::trace!(
            "dimension '{}': {} buckets over {} items",
            definition.name,
            buckets.len(),
            items.len()
        );

        let toggles = ToggleGroup::new(buckets.keys().cloned());
        Dimension {
            name: definition.name.clone(),
            buckets,
            toggles,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The dimension's labels in ascending order (display order).
    pub fn labels(&self) -> &[Label] {
        self.toggles.labels()
    }

    /// The ascending item indices bucketed under a label.
    pub fn bucket(&self, label: &str) -> Option<&[ItemIndex]> {
        self.buckets.get(label).map(|b| b.as_slice())
    }

    /// Whether a label is currently enabled.
    pub fn is_enabled(&self, label: &str) -> bool {
        self.toggles.is_enabled(label)
    }

    /// Read access to the toggle state.
    pub fn toggles(&self) -> &ToggleGroup {
        &self.toggles
    }

    /// Indices surviving this dimension alone: the union of every enabled
    /// label's bucket, ascending.
    pub fn survivor_indices(&self) -> Vec<ItemIndex> {
        let mut out = Vec::new();
        for (label, bucket) in &self.buckets {
            if self.toggles.is_enabled(label) {
                out.extend_from_slice(bucket);
            }
        }
        // Bucket lists are individually ascending, but label iteration
        // order is not index order.
        out.sort_unstable();
        out
    }

    /// Routes a gesture to the toggle group. Validation happens before any
    /// mutation, so an unknown label leaves the state untouched.
    fn apply(&mut self, label: &str, gesture: Gesture) -> Result<ChangeList, FilterError> {
        match gesture {
            Gesture::Flip => self.toggles.flip(label),
            Gesture::Choose => self.toggles.choose(label),
        }
    }
}

// ============================================================================
// FILTER ENGINE
// ============================================================================

/// Owns the item array and its dimensions, composes per-dimension survivors
/// into one ordered survivor list, and notifies observers after every
/// successful gesture.
///
/// The engine is built once per dataset. When the items change, discard it
/// and build a new one; there is no incremental re-partitioning.
pub struct FilterEngine<T> {
    items: Vec<T>,
    dimensions: Vec<Dimension>,
    observers: Vec<Box<dyn FnMut(&[&T])>>,
}

impl<T> FilterEngine<T> {
    /// Builds the engine: one pass over the items per definition.
    ///
    /// An empty item array or an empty definition list is valid - the former
    /// never yields survivors, the latter never filters anything out.
    pub fn new(items: Vec<T>, definitions: &[FilterDefinition<T>]) -> Self {
        let dimensions = definitions
            .iter()
            .map(|def| Dimension::build(def, &items))
            .collect();

        log::debug!(
            "filter engine built: {} items, {} dimensions",
            items.len(),
            definitions.len()
        );

        FilterEngine {
            items,
            dimensions,
            observers: Vec::new(),
        }
    }

    /// The full item array, in original order.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// The dimensions, in definition order.
    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    /// Looks up a dimension by name.
    pub fn dimension(&self, name: &str) -> Option<&Dimension> {
        self.dimensions.iter().find(|d| d.name == name)
    }

    /// Registers an observer called with the fresh survivor list after every
    /// successful `toggle`.
    pub fn subscribe(&mut self, observer: impl FnMut(&[&T]) + 'static) {
        self.observers.push(Box::new(observer));
    }

    /// Applies a gesture to one label of one dimension, then notifies
    /// observers with the new survivors.
    ///
    /// Fails with `UnknownDimension` or `UnknownLabel` without mutating any
    /// state or notifying anyone. Returns the labels whose enabled value
    /// changed (possibly none: choosing the only label of a fully enabled
    /// single-label dimension is a no-op, but still notifies).
    pub fn toggle(
        &mut self,
        dimension: &str,
        label: &str,
        gesture: Gesture,
    ) -> Result<ChangeList, FilterError> {
        let dim = self
            .dimensions
            .iter_mut()
            .find(|d| d.name == dimension)
            .ok_or_else(|| FilterError::UnknownDimension(dimension.to_string()))?;

        let changes = dim.apply(label, gesture)?;

        log::debug!(
            "toggle {:?} '{}':'{}' changed {} label(s)",
            gesture,
            dimension,
            label,
            changes.len()
        );

        self.notify();
        Ok(changes)
    }

    /// Indices of items surviving every dimension, ascending.
    ///
    /// With no dimensions, every item survives.
    pub fn survivor_indices(&self) -> Vec<ItemIndex> {
        let mut dims = self.dimensions.iter();
        let mut acc = match dims.next() {
            Some(first) => first.survivor_indices(),
            None => (0..self.items.len()).collect(),
        };
        for dim in dims {
            acc = intersect_sorted(&dim.survivor_indices(), &acc);
        }
        acc
    }

    /// Items surviving every dimension, in original array order. Pure
    /// function of the current toggle state.
    pub fn survivors(&self) -> Vec<&T> {
        self.survivor_indices()
            .into_iter()
            .map(|idx| &self.items[idx])
            .collect()
    }

    /// Pushes the current survivors to every observer.
    fn notify(&mut self) {
        if self.observers.is_empty() {
            return;
        }
        let indices = self.survivor_indices();
        let Self {
            items, observers, ..
        } = self;
        let survivors: Vec<&T> = indices.iter().map(|&idx| &items[idx]).collect();
        for observer in observers.iter_mut() {
            observer(&survivors);
        }
    }
}

impl<T> std::fmt::Debug for FilterEngine<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterEngine")
            .field("items", &self.items.len())
            .field("dimensions", &self.dimensions)
            .field("observers", &self.observers.len())
            .finish()
    }
}
